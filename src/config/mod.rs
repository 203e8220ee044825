mod settings;

pub use settings::{ServerConfig, Settings, SiteConfig, TemplateConfig};
