//! Template types and error definitions

use thiserror::Error;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Invalid template name: {0}")]
    InvalidName(String),

    #[error("Failed to read template {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// A value bound to a placeholder name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateValue {
    Text(String),
    Bool(bool),
    /// Present in the map but undefined. Skipped by substitution.
    Absent,
}

impl TemplateValue {
    /// String form used for substitution, `None` when absent
    pub fn as_text(&self) -> Option<String> {
        match self {
            TemplateValue::Text(s) => Some(s.clone()),
            TemplateValue::Bool(b) => Some(b.to_string()),
            TemplateValue::Absent => None,
        }
    }

    /// Truthiness used by `{{#if name}}` blocks.
    ///
    /// A value is truthy when it is defined, is not `false`, does not read
    /// `"false"` and is not blank.
    pub fn is_truthy(&self) -> bool {
        match self {
            TemplateValue::Absent => false,
            TemplateValue::Bool(b) => *b,
            TemplateValue::Text(s) => s != "false" && !s.trim().is_empty(),
        }
    }
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        TemplateValue::Text(value.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        TemplateValue::Text(value)
    }
}

impl From<bool> for TemplateValue {
    fn from(value: bool) -> Self {
        TemplateValue::Bool(value)
    }
}

impl<T: Into<TemplateValue>> From<Option<T>> for TemplateValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(TemplateValue::Absent)
    }
}

impl From<&serde_json::Value> for TemplateValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => TemplateValue::Absent,
            serde_json::Value::Bool(b) => TemplateValue::Bool(*b),
            serde_json::Value::String(s) => TemplateValue::Text(s.clone()),
            serde_json::Value::Number(n) => TemplateValue::Text(n.to_string()),
            // For arrays and objects, use JSON representation
            other => TemplateValue::Text(other.to_string()),
        }
    }
}

/// Ordered mapping from placeholder name to value.
///
/// Substitution walks the entries in insertion order, so a caller that
/// embeds untrusted text should insert it last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap {
    entries: Vec<(String, TemplateValue)>,
}

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing an existing entry in place
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<TemplateValue>) {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<TemplateValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TemplateValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Whether `name` is truthy; unknown names are not
    pub fn is_truthy(&self, name: &str) -> bool {
        self.get(name).is_some_and(TemplateValue::is_truthy)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TemplateValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for VariableMap
where
    K: Into<String>,
    V: Into<TemplateValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = VariableMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl From<&serde_json::Map<String, serde_json::Value>> for VariableMap {
    fn from(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        object
            .iter()
            .map(|(key, value)| (key.clone(), TemplateValue::from(value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness_rules() {
        assert!(TemplateValue::Bool(true).is_truthy());
        assert!(TemplateValue::from("yes").is_truthy());
        assert!(TemplateValue::from("0").is_truthy());

        assert!(!TemplateValue::Bool(false).is_truthy());
        assert!(!TemplateValue::from("false").is_truthy());
        assert!(!TemplateValue::from("   ").is_truthy());
        assert!(!TemplateValue::from("").is_truthy());
        assert!(!TemplateValue::Absent.is_truthy());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = VariableMap::new().with("a", "1").with("b", "2");
        map.insert("a", "3");

        let keys: Vec<_> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&TemplateValue::from("3")));
    }

    #[test]
    fn test_from_json_object() {
        let value = json!({
            "name": "Ann",
            "vip": true,
            "count": 3,
            "missing": null
        });
        let map = VariableMap::from(value.as_object().unwrap());

        assert_eq!(map.get("name"), Some(&TemplateValue::from("Ann")));
        assert_eq!(map.get("vip"), Some(&TemplateValue::Bool(true)));
        assert_eq!(map.get("count"), Some(&TemplateValue::from("3")));
        assert_eq!(map.get("missing"), Some(&TemplateValue::Absent));
    }

    #[test]
    fn test_option_conversion() {
        let none: Option<&str> = None;
        assert_eq!(TemplateValue::from(none), TemplateValue::Absent);
        assert_eq!(TemplateValue::from(Some("x")), TemplateValue::from("x"));
    }
}
