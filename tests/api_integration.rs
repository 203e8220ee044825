//! HTTP API integration tests
//!
//! Requests go through the full router (CORS, tracing, body limit) with
//! `tower::ServiceExt::oneshot`; no listener is bound.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

use tournament_mailer::config::Settings;
use tournament_mailer::server::{create_app, AppState};

fn settings() -> Settings {
    let mut settings = Settings::default();
    settings.templates.dir = concat!(env!("CARGO_MANIFEST_DIR"), "/templates").into();
    settings.site.base_url = "https://tournaments.example.com".to_string();
    settings
}

fn app() -> Router {
    create_app(AppState::new(settings()))
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["templates"]["kinds"], 30);
    assert_eq!(body["templates"]["envelope_loaded"], true);
}

#[tokio::test]
async fn test_health_degraded_without_envelope() {
    let mut settings = settings();
    settings.templates.dir = "/nonexistent/templates".into();
    let app = create_app(AppState::new(settings));

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["templates"]["envelope_loaded"], false);
}

#[tokio::test]
async fn test_compose_email() {
    let request = post_json(
        "/api/v1/compose",
        json!({
            "kind": "tournament-registration-received",
            "locale": "es",
            "payload": {
                "participantName": "Lucía",
                "tournamentName": "Copa de Primavera",
                "startDate": "2026-03-10",
                "categories": ["Open", "Veteranos"],
                "priceSingleCategory": 40
            }
        }),
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["subject"], "Inscripción recibida: Copa de Primavera");
    let html = body["html"].as_str().unwrap();
    assert!(html.contains("<html lang=\"es\" dir=\"ltr\">"));
    assert!(html.contains("80 €"));
    assert!(html.contains("https://tournaments.example.com/es/unsubscribe"));
}

#[tokio::test]
async fn test_compose_defaults_to_english() {
    let request = post_json(
        "/api/v1/compose",
        json!({"kind": "welcome", "payload": {"userName": "Ann"}}),
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert!(body["html"].as_str().unwrap().contains("<html lang=\"en\""));
    assert!(body["html"].as_str().unwrap().contains("Hello, Ann!"));
}

#[tokio::test]
async fn test_compose_unknown_kind() {
    let request = post_json("/api/v1/compose", json!({"kind": "tournament-exploded"}));

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"]["code"], "TEMPLATE_NOT_FOUND");
}

#[tokio::test]
async fn test_compose_invalid_payload() {
    let request = post_json(
        "/api/v1/compose",
        json!({"kind": "password-reset", "payload": {"userName": "Ann"}}),
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"].as_str().unwrap().contains("actionUrl"));
}

#[tokio::test]
async fn test_compose_empty_kind() {
    let request = post_json("/api/v1/compose", json!({"kind": "  "}));

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_body_limit() {
    let mut settings = settings();
    settings.server.max_body_bytes = 128;
    let app = create_app(AppState::new(settings));

    let request = post_json(
        "/api/v1/compose",
        json!({"kind": "contact-form-admin", "payload": {"message": "x".repeat(1024)}}),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_list_kinds() {
    let response = app().oneshot(get("/api/v1/kinds")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["total"], 30);
    let kinds: Vec<&str> = body["kinds"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(kinds.contains(&"password-reset"));
    assert!(kinds.contains(&"team-invitation"));
}

#[tokio::test]
async fn test_list_locales() {
    let response = app().oneshot(get("/api/v1/locales")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["default"], "en");
    let locales = body["locales"].as_array().unwrap();
    assert_eq!(locales.len(), 14);

    let arabic = locales.iter().find(|l| l["code"] == "ar").unwrap();
    assert_eq!(arabic["direction"], "rtl");
    assert!(arabic.get("date_format").is_none());
}

#[tokio::test]
async fn test_render_string_template() {
    let request = post_json(
        "/api/v1/render",
        json!({
            "template": "Hi {{name}}{{#if paid}}, paid{{/if}}{{#if vip}} (VIP){{/if}} {{unknown}}",
            "variables": {"name": "Ann", "paid": true, "vip": "false"}
        }),
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["output"], "Hi Ann, paid {{unknown}}");
}

#[tokio::test]
async fn test_render_json_template() {
    let request = post_json(
        "/api/v1/render",
        json!({
            "template": {"title": "Hello {{name}}", "count": 3, "tags": ["{{name}}"]},
            "variables": {"name": "Ann"}
        }),
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["output"], json!({"title": "Hello Ann", "count": 3, "tags": ["Ann"]}));
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = app();
    app.clone()
        .oneshot(post_json("/api/v1/compose", json!({"kind": "welcome"})))
        .await
        .unwrap();

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("mailer_compositions_total"));
}
