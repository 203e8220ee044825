//! Registry of content builders keyed by notification kind

use std::collections::HashMap;

use crate::composer::ComposeResult;

use super::{account, club, contact, registration, staff, tournament};

/// Output of a content builder
#[derive(Debug, Clone)]
pub struct BuiltContent {
    /// Kind-specific subject, `None` when it cannot be formed from the payload
    pub subject: Option<String>,
    /// Complete HTML document
    pub document: String,
}

/// Produces the localized document for one notification kind
pub trait ContentBuilder: Send + Sync {
    /// Notification kind this builder handles (e.g. "password-reset")
    fn kind(&self) -> &'static str;

    /// Build the document for `payload` in `locale`.
    ///
    /// Unknown locales fall back to English. Missing optional payload fields
    /// only drop the corresponding section.
    fn build(&self, payload: &serde_json::Value, locale: &str) -> ComposeResult<BuiltContent>;
}

/// Content builders keyed by kind
#[derive(Default)]
pub struct BuilderRegistry {
    builders: HashMap<&'static str, Box<dyn ContentBuilder>>,
}

impl BuilderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in notification kind
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registration::register(&mut registry);
        tournament::register(&mut registry);
        account::register(&mut registry);
        staff::register(&mut registry);
        club::register(&mut registry);
        contact::register(&mut registry);

        tracing::debug!(kinds = registry.len(), "Content builders registered");
        registry
    }

    /// Register a builder, replacing any builder of the same kind
    pub fn register(&mut self, builder: impl ContentBuilder + 'static) {
        let kind = builder.kind();
        if self.builders.insert(kind, Box::new(builder)).is_some() {
            tracing::warn!(kind = %kind, "Content builder replaced");
        }
    }

    pub fn get(&self, kind: &str) -> Option<&dyn ContentBuilder> {
        self.builders.get(kind).map(|b| b.as_ref())
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.builders.contains_key(kind)
    }

    /// Registered kinds, sorted
    pub fn kinds(&self) -> Vec<&'static str> {
        let mut kinds: Vec<_> = self.builders.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticBuilder(&'static str);

    impl ContentBuilder for StaticBuilder {
        fn kind(&self) -> &'static str {
            "static"
        }

        fn build(&self, _payload: &serde_json::Value, _locale: &str) -> ComposeResult<BuiltContent> {
            Ok(BuiltContent {
                subject: None,
                document: self.0.to_string(),
            })
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = BuilderRegistry::new();
        assert!(registry.is_empty());

        registry.register(StaticBuilder("first"));
        assert!(registry.contains("static"));
        assert!(registry.get("missing").is_none());

        let built = registry
            .get("static")
            .unwrap()
            .build(&serde_json::Value::Null, "en")
            .unwrap();
        assert_eq!(built.document, "first");
    }

    #[test]
    fn test_register_replaces_same_kind() {
        let mut registry = BuilderRegistry::new();
        registry.register(StaticBuilder("first"));
        registry.register(StaticBuilder("second"));

        assert_eq!(registry.len(), 1);
        let built = registry
            .get("static")
            .unwrap()
            .build(&serde_json::Value::Null, "en")
            .unwrap();
        assert_eq!(built.document, "second");
    }

    #[test]
    fn test_defaults_register_thirty_kinds() {
        let registry = BuilderRegistry::with_defaults();
        assert_eq!(registry.len(), 30);

        let kinds = registry.kinds();
        assert!(kinds.contains(&"tournament-registration-received"));
        assert!(kinds.contains(&"password-reset"));
        assert!(kinds.windows(2).all(|w| w[0] < w[1]));
    }
}
