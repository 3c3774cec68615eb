//! Spoken-sentence assembly for surf and forecast reports
//!
//! Pure functions over already-fetched payloads. The surf report resolves
//! the hour closest to `now` on each hourly axis independently, since the
//! marine and weather responses are not guaranteed to share a time grid.

use chrono::NaiveDateTime;

use crate::error::SurfcastError;
use crate::meteo::{DailyResponse, MarineResponse, WindResponse};
use crate::timeline::closest_hour_index;
use crate::units::{degrees_to_cardinal, knots_from_kmh, weather_description};
use crate::Result;

fn value_at<T: Copy>(values: &[T], index: usize, field: &str) -> Result<T> {
    values.get(index).copied().ok_or_else(|| {
        SurfcastError::upstream(format!("Field '{field}' is shorter than its time axis"))
    })
}

/// Build the current-conditions sentence from marine and wind payloads.
pub fn surf_report(
    spot: &str,
    marine: &MarineResponse,
    wind: &WindResponse,
    now: NaiveDateTime,
) -> Result<String> {
    let marine_idx = closest_hour_index(&marine.hourly.time, now)?;
    let wind_idx = closest_hour_index(&wind.hourly.time, now)?;

    let wave_height = value_at(&marine.hourly.wave_height, marine_idx, "wave_height")?;
    let wind_speed_kmh = value_at(&wind.hourly.wind_speed, wind_idx, "wind_speed_10m")?;
    let wind_direction_deg = value_at(&wind.hourly.wind_direction, wind_idx, "wind_direction_10m")?;

    let wind_speed_knots = knots_from_kmh(wind_speed_kmh);
    let wind_direction = degrees_to_cardinal(wind_direction_deg);

    Ok(format!(
        "Currently at {spot}, the waves are {wave_height} meters high \
         and the wind is blowing at {wind_speed_knots:.1} knots, direction {wind_direction}."
    ))
}

/// Build the today's-forecast sentence from a daily payload.
///
/// The first entry of every daily array is today.
pub fn daily_forecast(spot: &str, daily: &DailyResponse) -> Result<String> {
    let series = &daily.daily;
    if series.time.is_empty() {
        return Err(SurfcastError::upstream("Daily time axis is empty"));
    }

    let code = value_at(&series.weather_code, 0, "weather_code")?;
    let temp_max = value_at(&series.temperature_max, 0, "temperature_2m_max")?;
    let temp_min = value_at(&series.temperature_min, 0, "temperature_2m_min")?;
    let precip = value_at(
        &series.precipitation_probability,
        0,
        "precipitation_probability_max",
    )?;
    let wind_max_kmh = value_at(&series.wind_speed_max, 0, "wind_speed_10m_max")?;

    let condition = weather_description(code);
    let wind_max_knots = knots_from_kmh(wind_max_kmh);

    Ok(format!(
        "Today's forecast for {spot}: {condition}, with a high of {temp_max:.0} degrees \
         and a low of {temp_min:.0} degrees Celsius. There is a {precip:.0}% chance of \
         precipitation and winds up to {wind_max_knots:.1} knots."
    ))
}
