use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Largest accepted request body, in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

/// Brand and links placed in every envelope
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Public site root, without trailing slash (e.g. https://example.com)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub facebook_url: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    /// Directory template names are resolved against
    #[serde(default = "default_template_dir")]
    pub dir: PathBuf,
    /// Envelope template name, relative to `dir`
    #[serde(default = "default_envelope")]
    pub envelope: String,
    /// Keep loaded documents in memory; disable while editing templates
    #[serde(default = "default_cache")]
    pub cache: bool,
}

/// Keys whose names contain `_`. The `_` environment separator cannot reach
/// them, so SITE_BASE_URL and friends are read explicitly.
const MULTI_WORD_KEYS: &[&str] = &[
    "server.max_body_bytes",
    "site.base_url",
    "site.brand_name",
    "site.logo_url",
    "site.facebook_url",
    "site.instagram_url",
    "site.youtube_url",
];

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_body_bytes() -> usize {
    256 * 1024
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_brand_name() -> String {
    "Tournament Hub".to_string()
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_envelope() -> String {
    "email/envelope.html".to_string()
}

fn default_cache() -> bool {
    true
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("site.base_url", default_base_url())?
            .set_default("site.brand_name", default_brand_name())?
            .set_default("templates.dir", "templates")?
            .set_default("templates.envelope", default_envelope())?
            .set_default("templates.cache", run_mode != "development")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // SERVER_PORT, SITE_BASE_URL, TEMPLATES_CACHE, ...
            .add_source(
                Environment::default()
                    .separator("_")
                    .try_parsing(true)
                    .list_separator(","),
            );

        for key in MULTI_WORD_KEYS {
            let var = key.replace('.', "_").to_uppercase();
            builder = builder.set_override_option(*key, env::var(var).ok())?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl SiteConfig {
    /// Unsubscribe page for a resolved locale code
    pub fn unsubscribe_url(&self, locale: &str) -> String {
        format!("{}/{}/unsubscribe", self.base_url.trim_end_matches('/'), locale)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            brand_name: default_brand_name(),
            logo_url: None,
            facebook_url: None,
            instagram_url: None,
            youtube_url: None,
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dir: default_template_dir(),
            envelope: default_envelope(),
            cache: default_cache(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.templates.envelope, "email/envelope.html");
        assert!(settings.templates.cache);
        assert_eq!(settings.server_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_unsubscribe_url() {
        let site = SiteConfig {
            base_url: "https://example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(site.unsubscribe_url("es"), "https://example.com/es/unsubscribe");
    }
}
