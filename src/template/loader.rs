//! Template documents loaded from static storage

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;

use crate::config::TemplateConfig;
use crate::metrics::TemplateCacheMetrics;

use super::substitution::render;
use super::types::{TemplateError, TemplateResult, VariableMap};

/// Loads template documents from a directory.
///
/// Documents are immutable for the life of the process, so the cache is
/// filled lazily and never invalidated. A new deployment starts with an
/// empty cache.
pub struct TemplateLoader {
    root: PathBuf,
    cache: Option<DashMap<String, Arc<str>>>,
}

impl TemplateLoader {
    /// Create a caching loader rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: Some(DashMap::new()),
        }
    }

    /// Create a loader that reads from disk on every call
    pub fn without_cache(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: None,
        }
    }

    pub fn from_config(config: &TemplateConfig) -> Self {
        if config.cache {
            Self::new(&config.dir)
        } else {
            Self::without_cache(&config.dir)
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load a template by its path relative to the root
    pub fn load(&self, name: &str) -> TemplateResult<Arc<str>> {
        validate_name(name)?;

        let Some(cache) = &self.cache else {
            return self.read(name);
        };

        if let Some(cached) = cache.get(name) {
            TemplateCacheMetrics::record_hit();
            return Ok(Arc::clone(cached.value()));
        }

        TemplateCacheMetrics::record_miss();
        let text = self.read(name)?;
        // Another request may have loaded it meanwhile; keep the first copy
        let entry = cache.entry(name.to_string()).or_insert(text);
        Ok(Arc::clone(entry.value()))
    }

    /// Load a template and render it with the given variables
    pub fn render(&self, name: &str, variables: &VariableMap) -> TemplateResult<String> {
        let document = self.load(name)?;
        Ok(render(&document, variables))
    }

    /// Number of documents currently cached
    pub fn cached_count(&self) -> usize {
        self.cache.as_ref().map_or(0, DashMap::len)
    }

    fn read(&self, name: &str) -> TemplateResult<Arc<str>> {
        let path = self.root.join(name);

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!(template = %name, path = %path.display(), "Template loaded");
                Ok(Arc::from(text))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(TemplateError::NotFound(name.to_string()))
            }
            Err(e) => Err(TemplateError::Io {
                name: name.to_string(),
                source: e,
            }),
        }
    }
}

/// Names must be relative paths that stay below the template root
fn validate_name(name: &str) -> TemplateResult<()> {
    if name.trim().is_empty() {
        return Err(TemplateError::InvalidName("name must not be empty".to_string()));
    }

    let escapes_root = Path::new(name)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes_root {
        return Err(TemplateError::InvalidName(name.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_template(dir: &Path, name: &str, text: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, text).unwrap();
    }

    #[test]
    fn test_load_and_render() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "email/hello.html", "Hello {{name}}");

        let loader = TemplateLoader::new(dir.path());
        let vars = VariableMap::new().with("name", "Ann");

        assert_eq!(loader.render("email/hello.html", &vars).unwrap(), "Hello Ann");
    }

    #[test]
    fn test_missing_template_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let loader = TemplateLoader::new(dir.path());

        assert!(matches!(
            loader.load("missing.html"),
            Err(TemplateError::NotFound(name)) if name == "missing.html"
        ));
        assert_eq!(loader.cached_count(), 0);
    }

    #[test]
    fn test_cache_serves_first_copy() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "a.html", "first");

        let loader = TemplateLoader::new(dir.path());
        assert_eq!(&*loader.load("a.html").unwrap(), "first");
        assert_eq!(loader.cached_count(), 1);

        // Files are treated as immutable while the process runs
        write_template(dir.path(), "a.html", "second");
        assert_eq!(&*loader.load("a.html").unwrap(), "first");
    }

    #[test]
    fn test_without_cache_reads_every_time() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "a.html", "first");

        let loader = TemplateLoader::without_cache(dir.path());
        assert_eq!(&*loader.load("a.html").unwrap(), "first");

        write_template(dir.path(), "a.html", "second");
        assert_eq!(&*loader.load("a.html").unwrap(), "second");
        assert_eq!(loader.cached_count(), 0);
    }

    #[test]
    fn test_rejects_paths_outside_root() {
        let dir = tempfile::tempdir().unwrap();
        let loader = TemplateLoader::new(dir.path());

        for name in ["../secret.html", "email/../../x", "/etc/passwd", "  "] {
            assert!(
                matches!(loader.load(name), Err(TemplateError::InvalidName(_))),
                "{name} should be rejected"
            );
        }
    }
}
