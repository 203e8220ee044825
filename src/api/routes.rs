use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::compose::{compose_email, list_kinds};
use super::health::health;
use super::locales::list_locales;
use super::metrics::prometheus_metrics;
use super::render::render_template;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health & Metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        .nest(
            "/api/v1",
            Router::new()
                // Composition
                .route("/compose", post(compose_email))
                .route("/kinds", get(list_kinds))
                .route("/locales", get(list_locales))
                // Preview tooling
                .route("/render", post(render_template)),
        )
}
