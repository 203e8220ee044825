//! Supported locale listing.

use axum::Json;
use serde::Serialize;

use crate::locale::{LocaleInfo, DEFAULT_LOCALE, LOCALES};

#[derive(Debug, Serialize)]
pub struct LocalesResponse {
    pub default: &'static str,
    pub locales: &'static [LocaleInfo],
}

/// GET /api/v1/locales - Supported locales and their text direction
#[tracing::instrument(name = "http.list_locales")]
pub async fn list_locales() -> Json<LocalesResponse> {
    Json(LocalesResponse {
        default: DEFAULT_LOCALE,
        locales: LOCALES,
    })
}
