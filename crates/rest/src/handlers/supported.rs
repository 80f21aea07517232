//! Catalog listing handlers.
//!
//! `GET [base]/supported` returns every family; `GET [base]/supported/{family}`
//! returns one. The listing is the catalog itself, so any dimension and load type
//! id found in it can be sent back to `/calculator`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::responses::json_response;
use crate::state::AppState;

/// Handler for the full catalog listing.
///
/// # HTTP Request
///
/// `GET [base]/supported`
///
/// # Response
///
/// - `200 OK` - Object keyed by family name, each with `kind`, `description`,
///   optional `unit`, and `entries` keyed by id
pub async fn supported_handler(State(state): State<AppState>) -> RestResult<Response> {
    debug!(families = state.catalog().len(), "Listing supported catalog");

    json_response(StatusCode::OK, state.catalog().list_all(), state.pretty_json())
}

/// Handler for a single family listing.
///
/// # HTTP Request
///
/// `GET [base]/supported/{family}`
///
/// # Response
///
/// - `200 OK` - The family
/// - `404 Not Found` - No family with that name
pub async fn supported_family_handler(
    State(state): State<AppState>,
    Path(family): Path<String>,
) -> RestResult<Response> {
    debug!(family = %family, "Listing supported family");

    let found = state
        .catalog()
        .family(&family)
        .ok_or_else(|| RestError::NotFound {
            what: format!("Unknown family '{}'", family),
        })?;

    json_response(StatusCode::OK, found, state.pretty_json())
}
