//! Composition integration tests
//!
//! These tests compose through the public API against the shipped envelope
//! template, and against throwaway template directories.

use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;

use tournament_mailer::builders::BuilderRegistry;
use tournament_mailer::composer::{ComposeError, Composer};
use tournament_mailer::config::{SiteConfig, TemplateConfig};
use tournament_mailer::locale::LOCALES;
use tournament_mailer::template::{TemplateError, TemplateLoader};

fn shipped_templates() -> TemplateConfig {
    TemplateConfig {
        dir: concat!(env!("CARGO_MANIFEST_DIR"), "/templates").into(),
        ..Default::default()
    }
}

fn site() -> SiteConfig {
    SiteConfig {
        base_url: "https://tournaments.example.com".to_string(),
        brand_name: "Tournament Hub".to_string(),
        logo_url: Some("https://tournaments.example.com/logo.png".to_string()),
        instagram_url: Some("https://instagram.com/tournamenthub".to_string()),
        ..Default::default()
    }
}

fn shipped_composer() -> Composer {
    let templates = shipped_templates();
    Composer::new(
        BuilderRegistry::with_defaults(),
        Arc::new(TemplateLoader::from_config(&templates)),
        templates.envelope,
        site(),
    )
}

/// One payload carrying the required fields of every kind
fn universal_payload() -> serde_json::Value {
    json!({
        "participantName": "Ann Lee",
        "participantEmail": "ann@example.com",
        "recipientName": "Ann Lee",
        "userName": "Ann Lee",
        "memberName": "Ann Lee",
        "staffName": "Ann Lee",
        "name": "Ann Lee",
        "email": "ann@example.com",
        "message": "Is parking available at the venue?",
        "tournamentName": "Spring Open",
        "tournamentUrl": "https://tournaments.example.com/t/spring-open",
        "startDate": "2026-03-10",
        "endDate": "2026-03-12",
        "location": "Valencia",
        "categories": ["Open", {"name": "Veterans", "gender": "women", "ageGroup": "40+"}],
        "priceSingleCategory": 40,
        "amountPaid": 80,
        "waitlistPosition": 2,
        "clubName": "Eagles",
        "teamName": "Eagles A",
        "role": "referee",
        "permissions": ["scores"],
        "actionUrl": "https://tournaments.example.com/act?token=abc&x=1",
        "expiresInHours": 24
    })
}

#[test]
fn test_every_kind_composes_in_every_locale() {
    let composer = shipped_composer();
    let payload = universal_payload();
    assert_eq!(composer.kinds().len(), 30);

    for kind in composer.kinds() {
        for info in LOCALES {
            let email = composer
                .compose(kind, &payload, info.code)
                .unwrap_or_else(|e| panic!("{kind} in {}: {e}", info.code));

            assert!(!email.subject.is_empty(), "{kind} in {}", info.code);
            assert!(
                email
                    .html
                    .contains(&format!("<html lang=\"{}\" dir=\"{}\">", info.code, info.direction.as_str())),
                "{kind} in {}",
                info.code
            );
            assert!(!email.html.contains("{{"), "{kind} in {} left markers", info.code);
            assert_eq!(email.html.matches("<body").count(), 1, "{kind} in {}", info.code);
        }
    }
}

#[test]
fn test_every_kind_is_translated_in_every_locale() {
    let composer = shipped_composer();
    let payload = universal_payload();

    for kind in composer.kinds() {
        let english = composer.compose(kind, &payload, "en").unwrap();
        for info in LOCALES.iter().filter(|info| info.code != "en") {
            let email = composer.compose(kind, &payload, info.code).unwrap();
            assert_ne!(
                email.subject, english.subject,
                "{kind} in {} uses the English subject",
                info.code
            );
        }
    }
}

#[test]
fn test_staff_invitation_without_tournament_name() {
    let composer = shipped_composer();
    let payload = json!({"staffName": "Omar", "role": "referee"});

    let email = composer.compose("staff-invitation", &payload, "en").unwrap();
    assert_eq!(email.subject, "Notification from Tournament Hub");
    assert!(email
        .html
        .contains("The organizers would like you to join the tournament staff."));
    assert!(!email.html.contains("of  "));
}

#[test]
fn test_envelope_branding() {
    let composer = shipped_composer();
    let email = composer
        .compose("tournament-registration-received", &universal_payload(), "en")
        .unwrap();

    assert!(email.html.contains("src=\"https://tournaments.example.com/logo.png\""));
    assert!(email.html.contains("href=\"https://instagram.com/tournamenthub\""));
    assert!(!email.html.contains(">Facebook<"));
    assert!(!email.html.contains(">YouTube<"));
    assert!(email.html.contains("https://tournaments.example.com/en/unsubscribe"));
    assert!(email.html.contains("Your tournaments, all in one place"));
    assert!(email.html.contains("80 €"));
    assert!(email.html.contains("href=\"https://tournaments.example.com/act?token=abc&amp;x=1\""));
}

#[test]
fn test_unsupported_locale_falls_back_to_english() {
    let composer = shipped_composer();
    let payload = universal_payload();

    for kind in ["welcome", "tournament-cancelled", "contact-form-admin"] {
        let en = composer.compose(kind, &payload, "en").unwrap();
        let pt = composer.compose(kind, &payload, "pt-BR").unwrap();
        assert_eq!(en, pt, "{kind}");
    }
}

#[test]
fn test_localized_subject_and_tagline() {
    let composer = shipped_composer();
    let email = composer
        .compose("tournament-registration-received", &universal_payload(), "ru")
        .unwrap();

    assert_eq!(email.subject, "Заявка получена: Spring Open");
    assert!(email.html.contains("Все ваши турниры в одном месте"));
    assert!(email.html.contains("10.03.2026"));
}

#[test]
fn test_unknown_kind_and_bad_payload() {
    let composer = shipped_composer();

    let err = composer.compose("tournament-exploded", &json!({}), "en").unwrap_err();
    assert!(matches!(err, ComposeError::TemplateNotFound(_)));
    assert_eq!(err.reason(), "unknown_kind");

    let err = composer
        .compose("password-reset", &json!({"userName": "Ann"}), "en")
        .unwrap_err();
    assert!(matches!(err, ComposeError::InvalidPayload { ref kind, .. } if kind == "password-reset"));
}

#[test]
fn test_custom_envelope_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("plain.html"),
        "<html><body>[{{brand_name}}]{{#if youtube_url}} yt{{/if}}\n{{content}}</body></html>",
    )
    .unwrap();

    let composer = Composer::new(
        BuilderRegistry::with_defaults(),
        Arc::new(TemplateLoader::new(dir.path())),
        "plain.html",
        site(),
    );
    let email = composer.compose("welcome", &json!({"userName": "Ann"}), "de").unwrap();

    assert!(email.html.starts_with("<html><body>[Tournament Hub]\n"));
    assert!(email.html.contains("Hallo Ann!"));
    assert!(!email.html.contains(" yt"));
}

#[test]
fn test_missing_envelope() {
    let dir = TempDir::new().unwrap();
    let composer = Composer::new(
        BuilderRegistry::with_defaults(),
        Arc::new(TemplateLoader::new(dir.path())),
        "email/envelope.html",
        site(),
    );

    let err = composer.compose("welcome", &json!({}), "en").unwrap_err();
    assert!(matches!(err, ComposeError::Template(TemplateError::NotFound(_))));
    assert_eq!(err.reason(), "envelope_missing");
}
