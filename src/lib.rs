// Shared components
pub mod config;
pub mod error;
pub mod metrics;

// Composition engine
pub mod builders;
pub mod composer;
pub mod locale;
pub mod template;

// Application layer
pub mod api;
pub mod server;
