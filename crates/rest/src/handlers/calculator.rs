//! Calculation handler.
//!
//! `GET|POST [base]/calculator` with a JSON body naming a dimension, a load type
//! and a connection count.

use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};
use pxc_core::{CalculatorError, Configurator, validator};
use tracing::{debug, warn};

use crate::error::RestResult;
use crate::responses::{Envelope, json_response};
use crate::state::AppState;

/// Handler for the calculation endpoint.
///
/// Validates the body, resolves it against the shared catalog, and returns the
/// envelope. Calculation failures are reported in `request.message` with a
/// `200 OK` status; only a failure to serialize the envelope itself yields 500.
///
/// # HTTP Request
///
/// `GET [base]/calculator` or `POST [base]/calculator`
///
/// # Response
///
/// - `200 OK` - Envelope with `message.type` `OK`, `ERRORPARSE` or `ERROREXEC`
/// - `500 Internal Server Error` - The envelope could not be serialized
///
/// # Example
///
/// ```http
/// POST /calculator HTTP/1.1
/// Content-Type: application/json
///
/// {"dimension":{"id":3},"loadtype":{"id":2},"connections":50}
/// ```
pub async fn calculator_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> RestResult<Response> {
    debug!(body_len = body.len(), "Processing calculation request");

    let envelope = calculate(&state, &body);
    json_response(StatusCode::OK, &envelope, state.pretty_json())
}

fn calculate(state: &AppState, body: &[u8]) -> Envelope {
    let request = match validator::validate(body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Rejected calculation request");
            let incoming = e.parsed_request();
            return Envelope::from_error(incoming, &CalculatorError::from(e));
        }
    };

    let mut configurator = Configurator::new();
    configurator.init(request, state.catalog());

    match configurator.process_request() {
        Ok(calculation) => {
            debug!(text = %calculation.message.text, "Calculation completed");
            Envelope::success(request, calculation)
        }
        Err(e) => {
            warn!(error = %e, "Calculation failed");
            Envelope::from_error(Some(request), &e)
        }
    }
}
