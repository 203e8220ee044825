//! Composition types and error definitions

use serde::Serialize;
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Debug, Error)]
pub enum ComposeError {
    /// No builder is registered for the kind
    #[error("Unknown notification kind: {0}")]
    TemplateNotFound(String),

    /// The payload is missing required fields or has the wrong shape
    #[error("Invalid payload for {kind}: {reason}")]
    InvalidPayload { kind: String, reason: String },

    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl ComposeError {
    /// Short label for metrics and logs
    pub fn reason(&self) -> &'static str {
        match self {
            ComposeError::TemplateNotFound(_) => "unknown_kind",
            ComposeError::InvalidPayload { .. } => "invalid_payload",
            ComposeError::Template(TemplateError::NotFound(_)) => "envelope_missing",
            ComposeError::Template(_) => "template_error",
        }
    }
}

pub type ComposeResult<T> = Result<T, ComposeError>;

/// A finished email, ready to hand to a mail transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedEmail {
    pub subject: String,
    pub html: String,
}
