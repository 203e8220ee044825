//! Composition dispatcher.
//!
//! Looks up the builder for a notification kind, builds the localized
//! document, and wraps its body in the branded envelope template. The
//! result is a subject and a complete HTML email; sending is left to the
//! caller.

mod envelope;
mod types;

pub use envelope::{extract_body, generic_subject, tagline};
pub use types::{ComposeError, ComposeResult, ComposedEmail};

use std::sync::Arc;

use crate::builders::{escape_html, BuilderRegistry};
use crate::config::{Settings, SiteConfig};
use crate::locale;
use crate::metrics::CompositionMetrics;
use crate::template::{TemplateLoader, VariableMap};

pub struct Composer {
    registry: BuilderRegistry,
    loader: Arc<TemplateLoader>,
    envelope: String,
    site: SiteConfig,
}

impl Composer {
    pub fn new(
        registry: BuilderRegistry,
        loader: Arc<TemplateLoader>,
        envelope: impl Into<String>,
        site: SiteConfig,
    ) -> Self {
        Self {
            registry,
            loader,
            envelope: envelope.into(),
            site,
        }
    }

    /// Composer with every built-in kind, configured from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            BuilderRegistry::with_defaults(),
            Arc::new(TemplateLoader::from_config(&settings.templates)),
            settings.templates.envelope.clone(),
            settings.site.clone(),
        )
    }

    pub fn loader(&self) -> &Arc<TemplateLoader> {
        &self.loader
    }

    /// Registered notification kinds, sorted
    pub fn kinds(&self) -> Vec<&'static str> {
        self.registry.kinds()
    }

    /// Compose the email for `kind` in `locale`.
    ///
    /// Unknown locales fall back to English. An unknown kind, an invalid
    /// payload or a missing envelope template is an error.
    pub fn compose(
        &self,
        kind: &str,
        payload: &serde_json::Value,
        locale: &str,
    ) -> ComposeResult<ComposedEmail> {
        let _timer = CompositionMetrics::start_timer();

        match self.compose_inner(kind, payload, locale) {
            Ok(email) => {
                CompositionMetrics::record_composed(kind, locale::resolve_code(locale));
                Ok(email)
            }
            Err(e) => {
                CompositionMetrics::record_failed(e.reason());
                tracing::warn!(kind = %kind, locale = %locale, reason = e.reason(), error = %e, "Composition failed");
                Err(e)
            }
        }
    }

    fn compose_inner(
        &self,
        kind: &str,
        payload: &serde_json::Value,
        locale: &str,
    ) -> ComposeResult<ComposedEmail> {
        let builder = self
            .registry
            .get(kind)
            .ok_or_else(|| ComposeError::TemplateNotFound(kind.to_string()))?;

        let built = builder.build(payload, locale)?;
        let subject = built
            .subject
            .unwrap_or_else(|| generic_subject(locale, &self.site.brand_name));

        let variables = self.envelope_variables(locale, &subject, extract_body(&built.document));
        let html = self.loader.render(&self.envelope, &variables)?;

        tracing::debug!(
            kind = %kind,
            locale = %locale::resolve_code(locale),
            bytes = html.len(),
            "Email composed"
        );

        Ok(ComposedEmail { subject, html })
    }

    /// Envelope variables. `content` goes last so nothing substituted after
    /// it can touch the builder output.
    fn envelope_variables(&self, requested_locale: &str, subject: &str, content: &str) -> VariableMap {
        let code = locale::resolve_code(requested_locale);
        let site = &self.site;
        let link = |url: &Option<String>| url.as_deref().map(escape_html).unwrap_or_default();

        VariableMap::new()
            .with("locale", code)
            .with("dir", locale::text_direction(requested_locale).as_str())
            .with("subject", escape_html(subject))
            .with("tagline", escape_html(tagline(requested_locale)))
            .with("brand_name", escape_html(&site.brand_name))
            .with("site_url", escape_html(&site.base_url))
            .with("logo_url", link(&site.logo_url))
            .with("facebook_url", link(&site.facebook_url))
            .with("instagram_url", link(&site.instagram_url))
            .with("youtube_url", link(&site.youtube_url))
            .with("unsubscribe_url", escape_html(&site.unsubscribe_url(code)))
            .with("content", content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    const ENVELOPE: &str = "<!DOCTYPE html>\n<html lang=\"{{locale}}\" dir=\"{{dir}}\">\n<head><title>{{subject}}</title></head>\n<body>\n<header>{{brand_name}} | {{tagline}}</header>\n{{#if facebook_url}}<a class=\"social\" href=\"{{facebook_url}}\">Facebook</a>{{/if}}\n<main>{{content}}</main>\n<footer><a href=\"{{unsubscribe_url}}\">unsubscribe</a></footer>\n</body>\n</html>\n";

    fn composer_with(site: SiteConfig) -> (TempDir, Composer) {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("email")).unwrap();
        std::fs::write(dir.path().join("email/envelope.html"), ENVELOPE).unwrap();

        let composer = Composer::new(
            BuilderRegistry::with_defaults(),
            Arc::new(TemplateLoader::new(dir.path())),
            "email/envelope.html",
            site,
        );
        (dir, composer)
    }

    fn composer() -> (TempDir, Composer) {
        composer_with(SiteConfig {
            base_url: "https://example.com".to_string(),
            brand_name: "Tournament Hub".to_string(),
            ..Default::default()
        })
    }

    fn registration() -> serde_json::Value {
        json!({
            "participantName": "Ann",
            "tournamentName": "Spring Open",
            "startDate": "2026-03-10",
            "categories": ["Open", "Veterans"],
            "priceSingleCategory": 40
        })
    }

    #[test]
    fn test_unknown_kind_is_fatal() {
        let (_dir, composer) = composer();
        let err = composer.compose("no-such-kind", &json!({}), "en").unwrap_err();
        assert!(matches!(err, ComposeError::TemplateNotFound(ref k) if k == "no-such-kind"));
    }

    #[test]
    fn test_unknown_locale_matches_english() {
        let (_dir, composer) = composer();
        let en = composer
            .compose("tournament-registration-received", &registration(), "en")
            .unwrap();
        let unknown = composer
            .compose("tournament-registration-received", &registration(), "xx-unknown")
            .unwrap();
        assert_eq!(en, unknown);
    }

    #[test]
    fn test_registration_price_in_envelope() {
        let (_dir, composer) = composer();
        let email = composer
            .compose("tournament-registration-received", &registration(), "en")
            .unwrap();

        assert_eq!(email.subject, "Registration received: Spring Open");
        assert!(email.html.contains("80 €"));
        assert!(email.html.contains("<title>Registration received: Spring Open</title>"));
        assert!(email.html.contains("https://example.com/en/unsubscribe"));
        // Only the builder's body is embedded
        assert_eq!(email.html.matches("<html").count(), 1);
        assert!(!email.html.contains("{{"));
    }

    #[test]
    fn test_arabic_is_rtl() {
        let (_dir, composer) = composer();
        let email = composer
            .compose("tournament-registration-received", &registration(), "ar")
            .unwrap();

        assert!(email.html.contains("<html lang=\"ar\" dir=\"rtl\">"));
        assert!(email.html.contains("https://example.com/ar/unsubscribe"));
    }

    #[test]
    fn test_social_links_hidden_unless_configured() {
        let (_dir, composer) = composer();
        let email = composer.compose("welcome", &json!({}), "en").unwrap();
        assert!(!email.html.contains("class=\"social\""));

        let (_dir, composer) = composer_with(SiteConfig {
            facebook_url: Some("https://facebook.com/hub".to_string()),
            ..Default::default()
        });
        let email = composer.compose("welcome", &json!({}), "en").unwrap();
        assert!(email.html.contains("href=\"https://facebook.com/hub\""));
    }

    #[test]
    fn test_generic_subject_when_kind_has_none() {
        let (_dir, composer) = composer();
        let email = composer
            .compose("staff-removed", &json!({"staffName": "Omar"}), "es")
            .unwrap();
        assert_eq!(email.subject, "Notificación de Tournament Hub");
    }

    #[test]
    fn test_payload_text_cannot_reach_envelope_syntax() {
        let (_dir, composer) = composer();
        let payload = json!({
            "participantName": "{{unsubscribe_url}}",
            "tournamentName": "{{#if facebook_url}}Cup",
            "startDate": "2026-03-10"
        });
        let email = composer
            .compose("tournament-registration-confirmed", &payload, "en")
            .unwrap();

        assert!(!email.html.contains("Hello, https://"));
        assert!(email.html.contains("&#123;&#123;unsubscribe_url&#125;&#125;"));
        assert!(email.subject.starts_with("Registration confirmed: {{#if"));
        assert!(email.html.contains("<title>Registration confirmed: &#123;&#123;#if"));
    }

    #[test]
    fn test_invalid_payload_is_rejected() {
        let (_dir, composer) = composer();
        let err = composer
            .compose("tournament-registration-received", &json!({"participantName": "Ann"}), "en")
            .unwrap_err();
        assert!(matches!(err, ComposeError::InvalidPayload { .. }));
        assert_eq!(err.reason(), "invalid_payload");
    }

    #[test]
    fn test_missing_envelope_is_fatal() {
        let dir = TempDir::new().unwrap();
        let composer = Composer::new(
            BuilderRegistry::with_defaults(),
            Arc::new(TemplateLoader::new(dir.path())),
            "email/envelope.html",
            SiteConfig::default(),
        );

        let err = composer.compose("welcome", &json!({}), "en").unwrap_err();
        assert!(matches!(
            err,
            ComposeError::Template(crate::template::TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_envelope_cached_after_first_use() {
        let (_dir, composer) = composer();
        composer.compose("welcome", &json!({}), "en").unwrap();
        composer.compose("welcome", &json!({}), "de").unwrap();
        assert_eq!(composer.loader().cached_count(), 1);
    }
}
