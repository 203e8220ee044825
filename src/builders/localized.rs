//! The builder shape shared by every notification kind.
//!
//! A kind is a locale-keyed message table plus one function that turns the
//! typed payload into display sections. Everything else (locale fallback,
//! greeting, page layout, subject) is done here once.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::composer::{ComposeError, ComposeResult};
use crate::locale::{self, LocaleTable};

use super::labels::{self, Labels};
use super::page::Page;
use super::registry::{BuiltContent, ContentBuilder};

/// A translated phrase, optionally built around an entity name
#[derive(Clone, Copy)]
pub enum Phrase {
    Text(&'static str),
    /// Languages differ in where the name goes, so the whole phrase is a function
    Named(fn(&str) -> String),
    /// Named phrase with a plain wording for payloads that omit the name
    NamedOr(fn(&str) -> String, &'static str),
}

impl Phrase {
    /// Phrase text, or `None` when it needs a name and none is available.
    /// A blank name counts as missing.
    pub fn try_text(&self, name: Option<&str>) -> Option<String> {
        let name = name.filter(|n| !n.trim().is_empty());
        match self {
            Phrase::Text(text) => Some(text.to_string()),
            Phrase::Named(f) => name.map(f),
            Phrase::NamedOr(f, plain) => Some(name.map_or_else(|| plain.to_string(), f)),
        }
    }
}

/// Per-kind messages for one locale
pub struct Messages {
    pub subject: Phrase,
    pub heading: Phrase,
    pub intro: Phrase,
    /// Call-to-action button label, shown when the payload carries a link
    pub action: Option<&'static str>,
    pub outro: Option<&'static str>,
}

/// A label/value row in the details table
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

/// Display values a kind derives from its payload
#[derive(Debug, Default)]
pub struct Sections {
    /// Recipient name for the greeting
    pub recipient: Option<String>,
    /// Name interpolated into `Phrase::Named` messages
    pub entity: Option<String>,
    pub details: Vec<Detail>,
    /// Extra paragraphs after the details
    pub notes: Vec<String>,
    pub action_url: Option<String>,
}

impl Sections {
    pub fn detail(&mut self, label: &'static str, value: impl Into<String>) {
        self.details.push(Detail {
            label,
            value: value.into(),
        });
    }

    /// Add a row only when `value` is present and not blank
    pub fn optional_detail(&mut self, label: &'static str, value: Option<impl Into<String>>) {
        if let Some(value) = value.map(Into::into) {
            if !value.trim().is_empty() {
                self.detail(label, value);
            }
        }
    }
}

/// What a sections function sees besides the payload
pub struct BuildContext<'a> {
    /// Locale as requested; each lookup resolves it on its own
    pub locale: &'a str,
    pub labels: &'a Labels,
}

impl BuildContext<'_> {
    pub fn date(&self, date: NaiveDate) -> String {
        locale::format_date(date, self.locale)
    }

    /// "start – end", or a single date when the range is one day
    pub fn date_range(&self, start: NaiveDate, end: Option<NaiveDate>) -> String {
        match end {
            Some(end) if end != start => format!("{} – {}", self.date(start), self.date(end)),
            _ => self.date(start),
        }
    }
}

/// Generic builder: message table + sections function, typed payload `P`
pub struct LocalizedBuilder<P> {
    kind: &'static str,
    messages: &'static LocaleTable<Messages>,
    sections: fn(&P, &BuildContext<'_>) -> Sections,
}

impl<P> LocalizedBuilder<P> {
    pub fn new(
        kind: &'static str,
        messages: &'static LocaleTable<Messages>,
        sections: fn(&P, &BuildContext<'_>) -> Sections,
    ) -> Self {
        Self {
            kind,
            messages,
            sections,
        }
    }

    /// Build from an already typed payload
    pub fn build_typed(&self, payload: &P, requested_locale: &str) -> BuiltContent {
        let labels = labels::for_locale(requested_locale);
        let messages = locale::resolve(requested_locale, self.messages);
        let ctx = BuildContext {
            locale: requested_locale,
            labels,
        };

        let sections = (self.sections)(payload, &ctx);
        let entity = sections.entity.as_deref();

        let subject = messages.subject.try_text(entity);
        let heading = messages.heading.try_text(entity);
        let greeting = match sections.recipient.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => (labels.greeting)(name),
            _ => labels.greeting_generic.to_string(),
        };

        let page = Page {
            lang: locale::resolve_code(requested_locale),
            dir: locale::text_direction(requested_locale).as_str(),
            title: subject
                .clone()
                .or_else(|| heading.clone())
                .unwrap_or_default(),
            heading,
            greeting,
            intro: messages.intro.try_text(entity),
            details: sections.details,
            notes: sections.notes,
            action: messages.action.zip(sections.action_url),
            link_fallback: labels.link_fallback,
            outro: messages.outro,
            sign_off: labels.sign_off,
        };

        BuiltContent {
            subject,
            document: page.render(),
        }
    }
}

impl<P> ContentBuilder for LocalizedBuilder<P>
where
    P: DeserializeOwned,
{
    fn kind(&self) -> &'static str {
        self.kind
    }

    fn build(&self, payload: &serde_json::Value, locale: &str) -> ComposeResult<BuiltContent> {
        let payload = P::deserialize(payload).map_err(|e| ComposeError::InvalidPayload {
            kind: self.kind.to_string(),
            reason: e.to_string(),
        })?;

        Ok(self.build_typed(&payload, locale))
    }
}

/// Payload of kinds that carry nothing beyond an optional recipient
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientOnly {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub action_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_try_text_needs_name() {
        let named = Phrase::Named(|name| format!("Hello {name}"));

        assert_eq!(named.try_text(Some("Cup")).as_deref(), Some("Hello Cup"));
        assert!(named.try_text(None).is_none());
        assert!(named.try_text(Some("  ")).is_none());
        assert_eq!(Phrase::Text("Hi").try_text(None).as_deref(), Some("Hi"));
    }

    #[test]
    fn test_phrase_named_or_uses_plain_wording() {
        let phrase = Phrase::NamedOr(|name| format!("Staff of {name}"), "Tournament staff");

        assert_eq!(phrase.try_text(Some("Open Cup")).as_deref(), Some("Staff of Open Cup"));
        assert_eq!(phrase.try_text(None).as_deref(), Some("Tournament staff"));
        assert_eq!(phrase.try_text(Some(" ")).as_deref(), Some("Tournament staff"));
    }

    lazy_static::lazy_static! {
        static ref NAMED_ONLY: LocaleTable<Messages> = LocaleTable::new(Messages {
            subject: Phrase::Named(|t| format!("Update for {t}")),
            heading: Phrase::Named(|t| format!("News from {t}")),
            intro: Phrase::Named(|t| format!("The organizers of {t} wrote to you.")),
            action: None,
            outro: None,
        });
    }

    fn named_sections(entity: &Option<String>, _ctx: &BuildContext<'_>) -> Sections {
        Sections {
            entity: entity.clone(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_entity_omits_named_text() {
        let builder = LocalizedBuilder::new("test-kind", &NAMED_ONLY, named_sections);

        let built = builder.build_typed(&None, "en");
        assert!(built.subject.is_none());
        assert!(!built.document.contains("<h1"));
        assert!(!built.document.contains("The organizers of"));
        assert!(built.document.contains("Hello!"));

        let built = builder.build_typed(&Some("Open Cup".to_string()), "en");
        assert!(built.document.contains("News from Open Cup"));
        assert!(built.document.contains("The organizers of Open Cup wrote to you."));
    }

    #[test]
    fn test_optional_detail_skips_blank() {
        let mut sections = Sections::default();
        sections.optional_detail("Location", Some("Valencia"));
        sections.optional_detail("Club", Some(" "));
        sections.optional_detail("Role", None::<String>);

        assert_eq!(
            sections.details,
            vec![Detail {
                label: "Location",
                value: "Valencia".to_string()
            }]
        );
    }

    #[test]
    fn test_date_range() {
        let labels = labels::for_locale("en");
        let ctx = BuildContext {
            locale: "en",
            labels,
        };
        let start = NaiveDate::from_ymd_opt(2026, 6, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 6, 7).unwrap();

        assert_eq!(ctx.date_range(start, Some(end)), "June 5, 2026 – June 7, 2026");
        assert_eq!(ctx.date_range(start, Some(start)), "June 5, 2026");
        assert_eq!(ctx.date_range(start, None), "June 5, 2026");
    }
}
