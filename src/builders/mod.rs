//! Content builders.
//!
//! Each notification kind turns a JSON payload into a complete, localized
//! HTML document. All kinds share one shape ([`LocalizedBuilder`]): a
//! locale-keyed message table plus a function deriving the display sections
//! from the typed payload.

mod account;
mod club;
mod contact;
pub mod labels;
mod localized;
mod page;
pub mod payload;
mod registration;
mod registry;
mod staff;
mod tournament;

pub use labels::Labels;
pub use localized::{
    BuildContext, Detail, LocalizedBuilder, Messages, Phrase, RecipientOnly, Sections,
};
pub use page::escape_html;
pub use registry::{BuilderRegistry, BuiltContent, ContentBuilder};
