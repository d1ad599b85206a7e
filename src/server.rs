use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    config::AppConfig,
    error::RelayError,
    relay::{FluxClient, GenerateResponse, GenerationRequest},
};

pub const MODEL_NAME: &str = "FLUX.1-dev by Black Forest Labs";
pub const API_NAME: &str = "HuggingFace Inference API (Free)";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub flux: FluxClient,
}

pub fn build_router(config: Arc<AppConfig>, flux: FluxClient) -> Router {
    let asset_dir = config.asset_dir.clone();
    let state = AppState { config, flux };

    Router::new()
        .route("/health", get(health))
        .route("/generate", post(generate))
        .with_state(state)
        // Root page and assets; unknown paths become 404s here.
        .fallback_service(ServeDir::new(asset_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerateResponse>, RelayError> {
    if request.prompt.is_empty() {
        return Err(RelayError::Validation("Prompt is required".into()));
    }
    if !state.config.token_configured() {
        return Err(RelayError::Configuration);
    }

    let preview: String = request.prompt.chars().take(60).collect();
    info!(
        prompt = %preview,
        width = request.width,
        height = request.height,
        steps = request.steps,
        "generating image"
    );

    let image_bytes = state.flux.generate(&request).await?;
    let image = BASE64.encode(&image_bytes);

    info!(bytes = image_bytes.len(), "image generated successfully");

    Ok(Json(GenerateResponse {
        success: true,
        image,
        message: "Image generated successfully".to_string(),
    }))
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "model": MODEL_NAME,
        "api": API_NAME,
        "token_configured": state.config.token_configured(),
        "note": "No local GPU required - runs on HuggingFace servers",
    }))
}
