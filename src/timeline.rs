//! Nearest-hour resolution over Open-Meteo hourly time axes
//!
//! Open-Meteo returns hourly timestamps as naive local datetimes (the
//! `timezone=auto` query parameter shifts them to the spot's timezone), so
//! all comparisons here are against a naive local "now".

use chrono::NaiveDateTime;

use crate::error::SurfcastError;
use crate::Result;

const HOURLY_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse a single timestamp from an hourly time axis.
///
/// An unparseable timestamp is an upstream data error, never silently
/// replaced with a default.
pub fn parse_hourly_timestamp(timestamp: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(timestamp, HOURLY_FORMAT).map_err(|e| {
        SurfcastError::upstream(format!("Unparseable hourly timestamp {timestamp:?}: {e}"))
    })
}

/// Return the index of the timestamp closest to `now`.
///
/// Ties break to the first occurrence: a later entry only replaces the
/// stored minimum on a strictly smaller difference. An empty time axis is
/// rejected with an explicit error.
pub fn closest_hour_index(times: &[String], now: NaiveDateTime) -> Result<usize> {
    if times.is_empty() {
        return Err(SurfcastError::upstream("Hourly time axis is empty"));
    }

    let mut closest = 0;
    let mut min_diff = None;
    for (i, timestamp) in times.iter().enumerate() {
        let parsed = parse_hourly_timestamp(timestamp)?;
        let diff = (parsed - now).abs();
        if min_diff.is_none_or(|min| diff < min) {
            min_diff = Some(diff);
            closest = i;
        }
    }
    Ok(closest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    fn times(ts: &[&str]) -> Vec<String> {
        ts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_axis_is_rejected() {
        let result = closest_hour_index(&[], naive("2024-01-01T12:00"));
        assert!(matches!(result, Err(SurfcastError::Upstream { .. })));
    }

    #[test]
    fn test_picks_nearest_hour() {
        let axis = times(&[
            "2024-01-01T10:00",
            "2024-01-01T11:00",
            "2024-01-01T12:00",
            "2024-01-01T13:00",
        ]);
        let idx = closest_hour_index(&axis, naive("2024-01-01T11:40")).unwrap();
        assert_eq!(idx, 2);
    }

    #[test]
    fn test_exact_match_wins() {
        let axis = times(&["2024-01-01T10:00", "2024-01-01T11:00"]);
        let idx = closest_hour_index(&axis, naive("2024-01-01T11:00")).unwrap();
        assert_eq!(idx, 1);
    }

    #[test]
    fn test_tie_breaks_to_first_occurrence() {
        // 11:30 is 30 minutes from both entries
        let axis = times(&["2024-01-01T11:00", "2024-01-01T12:00"]);
        let idx = closest_hour_index(&axis, naive("2024-01-01T11:30")).unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn test_nearest_is_optimal() {
        let axis = times(&[
            "2024-01-01T00:00",
            "2024-01-01T06:00",
            "2024-01-01T18:00",
            "2024-01-02T00:00",
        ]);
        let now = naive("2024-01-01T15:30");
        let idx = closest_hour_index(&axis, now).unwrap();
        let best = (parse_hourly_timestamp(&axis[idx]).unwrap() - now).abs();
        for t in &axis {
            let diff = (parse_hourly_timestamp(t).unwrap() - now).abs();
            assert!(best <= diff);
        }
    }

    #[test]
    fn test_unparseable_timestamp_is_rejected() {
        let axis = times(&["2024-01-01T10:00", "not-a-timestamp"]);
        let result = closest_hour_index(&axis, naive("2024-01-01T10:00"));
        assert!(matches!(result, Err(SurfcastError::Upstream { .. })));
    }
}
