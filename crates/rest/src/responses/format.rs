//! JSON response building.
//!
//! All endpoints answer with `application/json`. Output is indented when
//! `pretty_json` is enabled, compact otherwise.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::RestResult;

/// The content type of every JSON response.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Serializes `content` into a JSON response with the given status.
///
/// # Errors
///
/// Returns [`RestError::InternalError`](crate::RestError::InternalError) if the
/// value cannot be serialized.
pub fn json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    content: &T,
    pretty: bool,
) -> RestResult<Response> {
    let body = if pretty {
        serde_json::to_vec_pretty(content)?
    } else {
        serde_json::to_vec(content)?
    };

    Ok((
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        )],
        body,
    )
        .into_response())
}
