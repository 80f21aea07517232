//! Response formatting for the sizing API.
//!
//! - [`envelope`] - The `/calculator` response document
//! - [`format`] - JSON serialization with the configured indentation

pub mod envelope;
pub mod format;

pub use envelope::{Envelope, EnvelopeBody};
pub use format::{JSON_CONTENT_TYPE, json_response};
