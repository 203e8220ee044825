//! Ad-hoc rendering through the substitution engine, for template previews.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::template::{self, VariableMap};

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    /// A document string, or any JSON value whose strings are rendered
    pub template: serde_json::Value,
    #[serde(default)]
    pub variables: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub output: serde_json::Value,
}

/// POST /api/v1/render - Substitute variables into a template
#[tracing::instrument(
    name = "http.render_template",
    skip(request),
    fields(variables = request.variables.len())
)]
pub async fn render_template(Json(request): Json<RenderRequest>) -> Json<RenderResponse> {
    let variables = VariableMap::from(&request.variables);

    let output = match &request.template {
        serde_json::Value::String(document) => {
            serde_json::Value::String(template::render(document, &variables))
        }
        other => template::render_json(other, &variables),
    };

    Json(RenderResponse { output })
}
