//! API layer - HTTP endpoint handlers organized by domain.

mod compose;
mod health;
mod locales;
mod metrics;
mod render;
mod routes;

pub use compose::{compose_email, list_kinds, ComposeRequest, KindsResponse};
pub use health::{health, HealthResponse};
pub use locales::{list_locales, LocalesResponse};
pub use metrics::prometheus_metrics;
pub use render::{render_template, RenderRequest, RenderResponse};
pub use routes::api_routes;
