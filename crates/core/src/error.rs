//! Error types for the sizing core.
//!
//! Errors are split by the stage that raises them: [`ValidationError`] for requests
//! rejected before calculation, [`ResolutionError`] for requests that pass validation
//! but cannot be resolved against the catalog. [`CalculatorError`] wraps both.
//!
//! Every error maps onto a [`MessageKind`] and can render itself as a
//! [`ResponseMessage`], so callers report failures inside the normal response envelope.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::message::{MessageKind, MessageTemplates, ResponseMessage};
use crate::request::ConfigurationRequest;

/// The primary error type for sizing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The request was rejected before calculation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request could not be resolved against the catalog.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

/// Errors raised while validating an incoming request (malformed requests).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The request body was empty.
    #[error("Empty request")]
    EmptyRequest,

    /// The request body could not be parsed into a configuration request.
    #[error("Possible Malformed request {body} ({reason})")]
    Unparseable { body: String, reason: String },

    /// The dimension id was the unset sentinel.
    #[error("Possible Malformed request {body}")]
    MissingDimension {
        body: String,
        request: ConfigurationRequest,
    },

    /// The load type id was the unset sentinel.
    #[error("Possible Malformed request {body}")]
    MissingLoadType {
        body: String,
        request: ConfigurationRequest,
    },
}

/// Errors raised while resolving a validated request against the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The dimension id has no catalog entry.
    #[error("Unknown dimension id {id}")]
    UnknownDimension { id: u32 },

    /// The load type id has no catalog entry.
    #[error("Unknown load type id {id}")]
    UnknownLoadType { id: u32 },

    /// A resource family has no base value for the dimension.
    #[error("No base value for dimension {dimension} in family {family}")]
    MissingBaseValue { family: String, dimension: u32 },

    /// The configurator was asked to calculate before being initialized.
    #[error("Configurator has not been initialized with a request")]
    NotInitialized,
}

impl ValidationError {
    /// Returns the message kind used to report this error.
    pub fn message_kind(&self) -> MessageKind {
        match self {
            ValidationError::Unparseable { .. } => MessageKind::ErrorParse,
            _ => MessageKind::ErrorExecution,
        }
    }

    /// Returns the context substituted into the message template.
    pub fn message_context(&self) -> String {
        match self {
            ValidationError::Unparseable { body, reason } => format!("{} ({})", body, reason),
            _ => self.to_string(),
        }
    }

    /// Returns the request as parsed, when parsing succeeded before the rejection.
    pub fn parsed_request(&self) -> Option<ConfigurationRequest> {
        match self {
            ValidationError::MissingDimension { request, .. }
            | ValidationError::MissingLoadType { request, .. } => Some(*request),
            ValidationError::EmptyRequest | ValidationError::Unparseable { .. } => None,
        }
    }
}

impl CalculatorError {
    /// Returns the message kind used to report this error.
    pub fn message_kind(&self) -> MessageKind {
        match self {
            CalculatorError::Validation(e) => e.message_kind(),
            CalculatorError::Resolution(_) => MessageKind::ErrorExecution,
        }
    }

    /// Returns the context substituted into the message template.
    pub fn message_context(&self) -> String {
        match self {
            CalculatorError::Validation(e) => e.message_context(),
            CalculatorError::Resolution(e) => e.to_string(),
        }
    }

    /// Renders this error as a response message.
    pub fn to_message(&self, templates: &dyn MessageTemplates) -> ResponseMessage {
        let context = self.message_context();
        ResponseMessage::render(templates, self.message_kind(), Some(&context))
    }

    /// Returns true if the request never reached the configurator.
    pub fn is_malformed_request(&self) -> bool {
        matches!(self, CalculatorError::Validation(_))
    }
}

/// Result type alias for sizing operations.
pub type CalculatorResult<T> = Result<T, CalculatorError>;
