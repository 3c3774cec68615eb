use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{extract::State, response::Json, routing::post, Router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use surfcast::{RequestEnvelope, Skill, SkillResponse, SurfcastConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SurfcastConfig::default();
    tracing::info!(
        spot = %config.spot.name,
        latitude = config.spot.latitude,
        longitude = config.spot.longitude,
        "Starting surfcast skill"
    );

    let skill = Arc::new(Skill::new(config).context("Failed to build skill")?);

    let app = Router::new()
        .route("/", post(handle_request))
        .with_state(skill);

    let addr = "0.0.0.0:8080";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {addr}");
    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}

async fn handle_request(
    State(skill): State<Arc<Skill>>,
    Json(request): Json<RequestEnvelope>,
) -> Json<SkillResponse> {
    Json(skill.dispatch(&request).await)
}
