//! HTTP request handlers.
//!
//! Controllers parse path and body parameters, convert DTOs into validated params,
//! invoke one service operation, and wrap the result in the response envelope. Each
//! handler attaches its operation message to failures through
//! [`ResultExt::context`](crate::server::error::ResultExt::context).

pub mod health;
pub mod user;

use axum::{extract::rejection::JsonRejection, Json};

use crate::server::error::validation::{Constraint, ValidationError};

/// Unwraps a JSON body extraction, reporting malformed bodies as a validation failure
/// on field `body`.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ValidationError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        ValidationError::new("body", Constraint::InvalidType, rejection.body_text())
    })
}
