//! Locale-keyed lookup tables with English fallback

use std::collections::HashMap;

use super::DEFAULT_LOCALE;

/// A value per locale code, with a mandatory English entry.
///
/// Lookups for a code the table does not carry return the English entry,
/// so one table may cover fewer locales than another without error.
#[derive(Debug, Clone)]
pub struct LocaleTable<T> {
    default: T,
    entries: HashMap<&'static str, T>,
}

impl<T> LocaleTable<T> {
    /// Create a table with its English entry
    pub fn new(english: T) -> Self {
        Self {
            default: english,
            entries: HashMap::new(),
        }
    }

    /// Add an entry for `code`. Adding `en` replaces the English entry.
    pub fn with(mut self, code: &'static str, value: T) -> Self {
        if code == DEFAULT_LOCALE {
            self.default = value;
        } else {
            self.entries.insert(code, value);
        }
        self
    }

    /// Entry for `requested`, falling back to English
    pub fn resolve(&self, requested: &str) -> &T {
        self.entries.get(requested).unwrap_or(&self.default)
    }

    /// Entry for exactly `code`, without fallback
    pub fn get(&self, code: &str) -> Option<&T> {
        if code == DEFAULT_LOCALE {
            Some(&self.default)
        } else {
            self.entries.get(code)
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Locale codes carried by this table, English included
    pub fn codes(&self) -> Vec<&'static str> {
        let mut codes: Vec<_> = self.entries.keys().copied().collect();
        codes.push(DEFAULT_LOCALE);
        codes.sort_unstable();
        codes
    }
}

/// Resolve `requested` in `table`, falling back to English
pub fn resolve<'a, T>(requested: &str, table: &'a LocaleTable<T>) -> &'a T {
    table.resolve(requested)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greetings() -> LocaleTable<&'static str> {
        LocaleTable::new("Hello").with("ru", "Привет").with("es", "Hola")
    }

    #[test]
    fn test_resolve_known_locale() {
        assert_eq!(*resolve("ru", &greetings()), "Привет");
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_english() {
        let table = greetings();
        assert_eq!(*table.resolve("xx-unknown"), "Hello");
        assert_eq!(*table.resolve(""), "Hello");
        // Codes are matched exactly
        assert_eq!(*table.resolve("RU"), "Hello");
    }

    #[test]
    fn test_with_english_replaces_default() {
        let table = greetings().with("en", "Hi");
        assert_eq!(*table.resolve("en"), "Hi");
        assert_eq!(*table.resolve("fr"), "Hi");
    }

    #[test]
    fn test_get_has_no_fallback() {
        let table = greetings();
        assert_eq!(table.get("es"), Some(&"Hola"));
        assert_eq!(table.get("en"), Some(&"Hello"));
        assert!(table.get("fr").is_none());
        assert!(!table.contains("fr"));
    }

    #[test]
    fn test_codes_include_english() {
        assert_eq!(greetings().codes(), vec!["en", "es", "ru"]);
    }
}
