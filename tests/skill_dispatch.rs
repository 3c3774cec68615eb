//! End-to-end dispatch tests against a local Open-Meteo stand-in
//!
//! A throwaway axum server plays both the marine and forecast endpoints, so
//! the full path is exercised: dispatch, concurrent fetch, nearest-hour
//! resolution, unit conversion, and sentence assembly.

use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use surfcast::error::REPORT_UNAVAILABLE;
use surfcast::skill::{FORECAST_INTENT, SURF_REPORT_INTENT};
use surfcast::{ApiConfig, RequestEnvelope, Skill, SurfcastConfig};

const MARINE_BODY: &str = r#"{"hourly":{"time":["2024-01-01T12:00"],"wave_height":[1.2]}}"#;
const WIND_BODY: &str =
    r#"{"hourly":{"time":["2024-01-01T12:00"],"wind_speed_10m":[10.0],"wind_direction_10m":[0.0]}}"#;
const DAILY_BODY: &str = r#"{"daily":{"time":["2024-01-01"],"weather_code":[61],
    "temperature_2m_max":[22.0],"temperature_2m_min":[15.0],
    "precipitation_probability_max":[40.0],"wind_speed_10m_max":[20.0]}}"#;

/// Serve canned payloads; `None` simulates an upstream 500.
async fn spawn_stub(
    marine: Option<&'static str>,
    wind: Option<&'static str>,
    daily: Option<&'static str>,
) -> String {
    let app = Router::new()
        .route(
            "/marine",
            get(move || async move {
                match marine {
                    Some(body) => (StatusCode::OK, body.to_string()),
                    None => (StatusCode::INTERNAL_SERVER_ERROR, String::new()),
                }
            }),
        )
        .route(
            "/forecast",
            // The real forecast endpoint serves both hourly wind and daily
            // requests; tell them apart by the query string
            get(move |RawQuery(query): RawQuery| async move {
                let query = query.unwrap_or_default();
                let body = if query.contains("daily=") { daily } else { wind };
                match body {
                    Some(body) => (StatusCode::OK, body.to_string()),
                    None => (StatusCode::INTERNAL_SERVER_ERROR, String::new()),
                }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Stub has no local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub server failed");
    });
    format!("http://{addr}")
}

fn skill_against(stub_base: &str) -> Skill {
    let config = SurfcastConfig {
        api: ApiConfig {
            marine_base_url: format!("{stub_base}/marine"),
            forecast_base_url: format!("{stub_base}/forecast"),
            timeout_seconds: 5,
        },
        ..SurfcastConfig::default()
    };
    Skill::new(config).expect("Failed to build skill")
}

#[tokio::test]
async fn surf_report_speaks_current_conditions() {
    let base = spawn_stub(Some(MARINE_BODY), Some(WIND_BODY), Some(DAILY_BODY)).await;
    let skill = skill_against(&base);

    let response = skill
        .dispatch(&RequestEnvelope::intent(SURF_REPORT_INTENT))
        .await;

    let speech = response.speech.expect("surf report should speak");
    assert!(speech.contains("Beit Yanai"), "speech: {speech}");
    assert!(speech.contains("1.2 meters"), "speech: {speech}");
    assert!(speech.contains("5.4 knots"), "speech: {speech}");
    assert!(speech.contains("north"), "speech: {speech}");
    assert!(response.should_end_session);
}

#[tokio::test]
async fn surf_report_apologizes_when_marine_fetch_fails() {
    let base = spawn_stub(None, Some(WIND_BODY), Some(DAILY_BODY)).await;
    let skill = skill_against(&base);

    let response = skill
        .dispatch(&RequestEnvelope::intent(SURF_REPORT_INTENT))
        .await;

    assert_eq!(response.speech.as_deref(), Some(REPORT_UNAVAILABLE));
}

#[tokio::test]
async fn surf_report_apologizes_when_wind_fetch_fails() {
    let base = spawn_stub(Some(MARINE_BODY), None, Some(DAILY_BODY)).await;
    let skill = skill_against(&base);

    let response = skill
        .dispatch(&RequestEnvelope::intent(SURF_REPORT_INTENT))
        .await;

    assert_eq!(response.speech.as_deref(), Some(REPORT_UNAVAILABLE));
}

#[tokio::test]
async fn surf_report_apologizes_on_malformed_payload() {
    let base = spawn_stub(Some(r#"{"hourly":{}}"#), Some(WIND_BODY), Some(DAILY_BODY)).await;
    let skill = skill_against(&base);

    let response = skill
        .dispatch(&RequestEnvelope::intent(SURF_REPORT_INTENT))
        .await;

    assert_eq!(response.speech.as_deref(), Some(REPORT_UNAVAILABLE));
}

#[tokio::test]
async fn forecast_speaks_todays_outlook() {
    let base = spawn_stub(Some(MARINE_BODY), Some(WIND_BODY), Some(DAILY_BODY)).await;
    let skill = skill_against(&base);

    let response = skill
        .dispatch(&RequestEnvelope::intent(FORECAST_INTENT))
        .await;

    let speech = response.speech.expect("forecast should speak");
    assert!(speech.contains("slight rain"), "speech: {speech}");
    assert!(speech.contains("22 degrees"), "speech: {speech}");
    assert!(speech.contains("15 degrees"), "speech: {speech}");
    assert!(speech.contains("40%"), "speech: {speech}");
    assert!(speech.contains("10.8 knots"), "speech: {speech}");
}

#[tokio::test]
async fn forecast_apologizes_when_fetch_fails() {
    let base = spawn_stub(Some(MARINE_BODY), Some(WIND_BODY), None).await;
    let skill = skill_against(&base);

    let response = skill
        .dispatch(&RequestEnvelope::intent(FORECAST_INTENT))
        .await;

    assert_eq!(response.speech.as_deref(), Some(REPORT_UNAVAILABLE));
    assert!(!response.should_end_session);
}
