//! Status messages returned alongside every calculation.
//!
//! A [`ResponseMessage`] is built fresh for each request from a closed set of
//! [`MessageKind`]s. The text body comes from a [`MessageTemplates`] implementation,
//! so call sites only ever supply a kind and an optional context string.
//!
//! # Message Kinds
//!
//! | Kind | Code | Template |
//! |------|------|----------|
//! | Ok | `OK` | `Calculation completed for {}` |
//! | ErrorParse | `ERRORPARSE` | `Possible Malformed request {}` |
//! | ErrorExecution | `ERROREXEC` | `{}` |

use serde::{Deserialize, Serialize};

/// The kind of a response message.
///
/// Serialized as its short code (`OK`, `ERRORPARSE`, `ERROREXEC`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    /// The request was resolved successfully.
    #[serde(rename = "OK")]
    Ok,
    /// The request body could not be parsed.
    #[serde(rename = "ERRORPARSE")]
    ErrorParse,
    /// The request was parsed but could not be executed.
    #[serde(rename = "ERROREXEC")]
    ErrorExecution,
}

impl MessageKind {
    /// Returns the wire code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            MessageKind::Ok => "OK",
            MessageKind::ErrorParse => "ERRORPARSE",
            MessageKind::ErrorExecution => "ERROREXEC",
        }
    }

    /// Returns the short human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            MessageKind::Ok => "Success",
            MessageKind::ErrorParse => "Parse error",
            MessageKind::ErrorExecution => "Execution error",
        }
    }

    /// Returns true for every kind except [`MessageKind::Ok`].
    pub fn is_error(&self) -> bool {
        !matches!(self, MessageKind::Ok)
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A text template with a context placeholder.
///
/// `with_context` holds a single `{}` that is replaced by the context string;
/// `bare` is used verbatim when no context is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    with_context: &'static str,
    bare: &'static str,
}

impl Template {
    /// Creates a template from its two forms.
    pub const fn new(with_context: &'static str, bare: &'static str) -> Self {
        Self { with_context, bare }
    }

    /// Renders the template, substituting `context` for the first `{}`.
    pub fn render(&self, context: Option<&str>) -> String {
        match context {
            Some(context) => self.with_context.replacen("{}", context, 1),
            None => self.bare.to_string(),
        }
    }
}

/// Produces message text for a given kind and optional context.
pub trait MessageTemplates {
    /// Returns the template used for `kind`.
    fn template(&self, kind: MessageKind) -> Template;

    /// Renders the text for `kind`.
    fn render(&self, kind: MessageKind, context: Option<&str>) -> String {
        self.template(kind).render(context)
    }
}

/// The built-in English templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTemplates;

impl MessageTemplates for DefaultTemplates {
    fn template(&self, kind: MessageKind) -> Template {
        match kind {
            MessageKind::Ok => {
                Template::new("Calculation completed for {}", "Calculation completed")
            }
            MessageKind::ErrorParse => Template::new(
                "Possible Malformed request {}",
                "Possible Malformed request",
            ),
            MessageKind::ErrorExecution => Template::new("{}", "Execution failed"),
        }
    }
}

/// A status record for a single request.
///
/// Serializes as `{"type": <code>, "name": <name>, "text": <text>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
    /// The message kind.
    #[serde(rename = "type")]
    pub kind: MessageKind,

    /// Short name of the kind.
    pub name: String,

    /// Formatted text body.
    pub text: String,
}

impl ResponseMessage {
    /// Creates a message with pre-rendered text.
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            text: text.into(),
        }
    }

    /// Creates a message by rendering `kind` through `templates`.
    pub fn render(
        templates: &dyn MessageTemplates,
        kind: MessageKind,
        context: Option<&str>,
    ) -> Self {
        Self::new(kind, templates.render(kind, context))
    }

    /// Creates a success message using the default templates.
    pub fn ok(context: Option<&str>) -> Self {
        Self::render(&DefaultTemplates, MessageKind::Ok, context)
    }

    /// Creates an execution-error message using the default templates.
    pub fn execution_error(context: &str) -> Self {
        Self::render(&DefaultTemplates, MessageKind::ErrorExecution, Some(context))
    }

    /// Returns true if this message reports success.
    pub fn is_ok(&self) -> bool {
        !self.kind.is_error()
    }
}
