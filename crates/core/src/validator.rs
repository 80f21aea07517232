//! Request validation.
//!
//! The validator judges whether a raw request body is complete enough to calculate
//! against. It parses the body, rejects the unset sentinel for either reference, and
//! hands back the parsed request untouched. Whether the ids exist in the catalog is
//! the configurator's concern.

use tracing::debug;

use crate::error::ValidationError;
use crate::request::ConfigurationRequest;

/// Outcome of validating a request body.
pub type ValidationResult = Result<ConfigurationRequest, ValidationError>;

/// Validates a raw request body.
///
/// # Errors
///
/// - [`ValidationError::EmptyRequest`] for a zero-length body
/// - [`ValidationError::Unparseable`] when the body is not a configuration request
/// - [`ValidationError::MissingDimension`] / [`ValidationError::MissingLoadType`] when an
///   id is the unset sentinel; the raw body is echoed back for diagnostics
///
/// # Example
///
/// ```
/// use pxc_core::validator::validate;
///
/// let request = validate(br#"{"dimension":{"id":3},"loadtype":{"id":2},"connections":50}"#).unwrap();
/// assert_eq!(request.connections, 50);
/// assert!(validate(b"").is_err());
/// ```
pub fn validate(body: &[u8]) -> ValidationResult {
    if body.is_empty() {
        return Err(ValidationError::EmptyRequest);
    }

    let raw = String::from_utf8_lossy(body);
    let request: ConfigurationRequest =
        serde_json::from_slice(body).map_err(|e| ValidationError::Unparseable {
            body: raw.to_string(),
            reason: e.to_string(),
        })?;

    check_completeness(&request, &raw)?;

    debug!(
        dimension = request.dimension.id,
        load_type = request.load_type.id,
        connections = request.connections,
        "Request passed validation"
    );

    Ok(request)
}

/// Checks that both references of an already-parsed request are set.
///
/// `raw` is echoed into the error for diagnostics, along with the parsed request.
pub fn check_completeness(
    request: &ConfigurationRequest,
    raw: &str,
) -> Result<(), ValidationError> {
    if request.dimension.is_unset() {
        return Err(ValidationError::MissingDimension {
            body: raw.to_string(),
            request: *request,
        });
    }
    if request.load_type.is_unset() {
        return Err(ValidationError::MissingLoadType {
            body: raw.to_string(),
            request: *request,
        });
    }
    Ok(())
}
