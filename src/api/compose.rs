//! Email composition endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::composer::ComposedEmail;
use crate::error::{AppError, Result};
use crate::locale::DEFAULT_LOCALE;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct ComposeRequest {
    pub kind: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "empty_payload")]
    pub payload: serde_json::Value,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn empty_payload() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

#[derive(Debug, Serialize)]
pub struct KindsResponse {
    pub kinds: Vec<&'static str>,
    pub total: usize,
}

/// POST /api/v1/compose - Compose one localized email
#[tracing::instrument(
    name = "http.compose_email",
    skip(state, request),
    fields(kind = %request.kind, locale = %request.locale)
)]
pub async fn compose_email(
    State(state): State<AppState>,
    Json(request): Json<ComposeRequest>,
) -> Result<Json<ComposedEmail>> {
    if request.kind.trim().is_empty() {
        return Err(AppError::Validation("kind must not be empty".to_string()));
    }

    let email = state
        .composer
        .compose(&request.kind, &request.payload, &request.locale)?;

    Ok(Json(email))
}

/// GET /api/v1/kinds - Registered notification kinds
#[tracing::instrument(name = "http.list_kinds", skip(state))]
pub async fn list_kinds(State(state): State<AppState>) -> Json<KindsResponse> {
    let kinds = state.composer.kinds();
    let total = kinds.len();

    Json(KindsResponse { kinds, total })
}
