//! Health check endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub templates: TemplateHealthResponse,
}

#[derive(Debug, Serialize)]
pub struct TemplateHealthResponse {
    pub kinds: usize,
    pub envelope_loaded: bool,
    pub cached: usize,
}

/// GET /health
///
/// Degraded when the envelope template cannot be loaded, since no kind can
/// compose without it.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let composer = &state.composer;
    let envelope_loaded = match composer.loader().load(&state.settings.templates.envelope) {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Envelope template unavailable");
            false
        }
    };

    let status = if envelope_loaded { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        templates: TemplateHealthResponse {
            kinds: composer.kinds().len(),
            envelope_loaded,
            cached: composer.loader().cached_count(),
        },
    })
}
