//! Template substitution engine.
//!
//! This module provides:
//! - Variable maps with placeholder values ({{variable}})
//! - Conditional blocks ({{#if variable}} … {{/if}}), nestable
//! - A loader that reads template documents from disk and caches them
//!
//! # Example
//!
//! ```ignore
//! let loader = TemplateLoader::new("templates");
//!
//! let variables = VariableMap::new()
//!     .with("name", "Ann")
//!     .with("paid", false);
//!
//! // "Hello {{name}}{{#if paid}}, thanks for your payment{{/if}}!"
//! let rendered = loader.render("email/greeting.html", &variables)?;
//! ```

mod loader;
mod substitution;
mod types;

pub use loader::TemplateLoader;
pub use substitution::{render, render_json};
pub use types::{TemplateError, TemplateResult, TemplateValue, VariableMap};
