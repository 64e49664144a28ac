//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into the failure envelope. `AppError` is the closed set of
//! failure kinds every layer returns; controllers attach an operation-specific message
//! with [`ResultExt::context`] before the error is rendered.

pub mod config;
pub mod store;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDetailDto, ErrorDto},
    server::error::{config::ConfigError, store::StoreError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// a deterministic mapping onto HTTP status codes:
///
/// - `Validation` → 400 Bad Request
/// - `NotFound` → 404 Not Found
/// - `Conflict` → 409 Conflict
/// - everything else → 500 Internal Server Error
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Request payload failed validation.
    ///
    /// The response names the failing field and constraint.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Repository error other than a uniqueness violation.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    StoreErr(StoreError),

    /// Hashing or verifying a password failed.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Socket or other I/O error, typically while binding the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource already exists.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Uniqueness violations reported by the store become `Conflict`.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey(detail) => {
                tracing::debug!("Duplicate key rejected: {}", detail);
                AppError::Conflict("User already exists".to_string())
            }
            other => AppError::StoreErr(other),
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::from(err).into()
    }
}

impl AppError {
    /// HTTP status code this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ValidationErr(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Attaches the envelope message describing which operation failed.
    pub fn with_message(self, message: &'static str) -> ApiError {
        ApiError {
            message,
            source: self,
        }
    }

    /// Builds the `error` object of the failure envelope.
    ///
    /// Server-side failures are logged in full while the client only receives a
    /// generic description to avoid leaking implementation details.
    fn detail(&self) -> ErrorDetailDto {
        let status = self.status();

        let (field, constraint) = match self {
            Self::ValidationErr(err) => (
                Some(err.field.clone()),
                Some(err.constraint.as_str().to_string()),
            ),
            _ => (None, None),
        };

        let description = if status.is_server_error() {
            tracing::error!("{}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        ErrorDetailDto {
            code: status.as_u16(),
            description,
            field,
            constraint,
        }
    }
}

/// An `AppError` paired with the message of the operation that failed.
#[derive(Debug)]
pub struct ApiError {
    pub message: &'static str,
    pub source: AppError,
}

/// Renders the failure envelope `{success: false, message, error: {code, description}}`.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.source.status();

        (
            status,
            Json(ErrorDto {
                success: false,
                message: self.message.to_string(),
                error: self.source.detail(),
            }),
        )
            .into_response()
    }
}

/// Attaches an operation message to any error convertible into `AppError`.
pub trait ResultExt<T> {
    fn context(self, message: &'static str) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn context(self, message: &'static str) -> Result<T, ApiError> {
        self.map_err(|err| err.into().with_message(message))
    }
}
