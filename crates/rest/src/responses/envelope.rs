//! The `/calculator` response envelope.
//!
//! Every calculation, successful or not, is returned as
//!
//! ```json
//! {
//!   "request": {
//!     "message": { "type": "OK", "name": "Success", "text": "..." },
//!     "incoming": { "dimension": { "id": 3 }, "loadtype": { "id": 2 }, "connections": 50 },
//!     "answer": { ... }
//!   }
//! }
//! ```
//!
//! `incoming` is `null` when the body was empty or could not be parsed, and `answer`
//! is `null` whenever `message.type` is not `OK`.

use pxc_core::{Calculation, CalculatorError, ConfigurationRequest, ResolvedAnswer, ResponseMessage};
use serde::Serialize;

/// Top-level response document for a calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    /// The request record.
    pub request: EnvelopeBody,
}

/// The request record: status, echoed input, and the answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvelopeBody {
    /// Status of the calculation.
    pub message: ResponseMessage,

    /// The parsed request, if parsing got that far.
    pub incoming: Option<ConfigurationRequest>,

    /// The resolved configuration on success.
    pub answer: Option<ResolvedAnswer>,
}

impl Envelope {
    /// Wraps a successful calculation.
    pub fn success(incoming: ConfigurationRequest, calculation: Calculation) -> Self {
        Self {
            request: EnvelopeBody {
                message: calculation.message,
                incoming: Some(incoming),
                answer: Some(calculation.answer),
            },
        }
    }

    /// Wraps a failed calculation.
    pub fn failure(incoming: Option<ConfigurationRequest>, message: ResponseMessage) -> Self {
        Self {
            request: EnvelopeBody {
                message,
                incoming,
                answer: None,
            },
        }
    }

    /// Wraps a calculator error using the default message templates.
    pub fn from_error(incoming: Option<ConfigurationRequest>, err: &CalculatorError) -> Self {
        Self::failure(incoming, err.to_message(&pxc_core::DefaultTemplates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pxc_core::{Catalog, ValidationError, calculate};

    #[test]
    fn test_success_envelope_shape() {
        let catalog = Catalog::build();
        let body = br#"{"dimension":{"id":3},"loadtype":{"id":2},"connections":50}"#;
        let calculation = calculate(&catalog, body).unwrap();
        let envelope = Envelope::success(ConfigurationRequest::new(3, 2, 50), calculation);

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["request"]["message"]["type"], "OK");
        assert_eq!(json["request"]["incoming"]["loadtype"]["id"], 2);
        assert_eq!(json["request"]["answer"]["dimension"]["name"], "Medium");
        assert!(envelope.request.answer.is_some());
    }

    #[test]
    fn test_failure_envelope_has_null_answer() {
        let err = CalculatorError::from(ValidationError::EmptyRequest);
        let envelope = Envelope::from_error(None, &err);

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["request"]["message"]["type"], "ERROREXEC");
        assert_eq!(json["request"]["message"]["text"], "Empty request");
        assert!(json["request"]["incoming"].is_null());
        assert!(json["request"]["answer"].is_null());
        assert!(envelope.request.answer.is_none());
    }
}
