//! Field rules applied to incoming payloads.
//!
//! Each helper checks one constraint and returns the cleaned value or a
//! [`ValidationError`] naming the field. Payload conversions in `server::model` chain
//! these with `?` so the first failing field, in declaration order, is reported.

use std::sync::LazyLock;

use regex::Regex;

use crate::server::error::validation::{Constraint, ValidationError};

/// `local@domain.tld` with no whitespace and a dot in the domain.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Unwraps a value that must be present.
pub fn required<T>(value: Option<T>, field: &str, message: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::new(field, Constraint::Required, message))
}

/// Trims a string and rejects it when missing or empty.
pub fn non_empty(
    value: Option<String>,
    field: &str,
    message: &str,
) -> Result<String, ValidationError> {
    let value = required(value, field, message)?;
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::new(field, Constraint::Required, message));
    }

    Ok(trimmed.to_string())
}

/// Rejects strings shorter than `min` characters.
pub fn min_length(
    value: Option<String>,
    min: usize,
    field: &str,
    message: &str,
) -> Result<String, ValidationError> {
    let value = required(value, field, message)?;

    if value.chars().count() < min {
        return Err(ValidationError::new(field, Constraint::TooSmall, message));
    }

    Ok(value)
}

/// Rejects integers below `min`.
pub fn at_least(
    value: Option<i64>,
    min: i64,
    field: &str,
    message: &str,
) -> Result<i64, ValidationError> {
    let value = required(value, field, message)?;

    if value < min {
        return Err(ValidationError::new(field, Constraint::TooSmall, message));
    }

    Ok(value)
}

/// Rejects numbers below `min`, as well as non-finite values.
pub fn at_least_f64(
    value: Option<f64>,
    min: f64,
    field: &str,
    message: &str,
) -> Result<f64, ValidationError> {
    let value = required(value, field, message)?;

    if !value.is_finite() || value < min {
        return Err(ValidationError::new(field, Constraint::TooSmall, message));
    }

    Ok(value)
}

/// Trims an email address and checks its shape.
pub fn email(value: Option<String>, field: &str, message: &str) -> Result<String, ValidationError> {
    let value = required(value, field, message)?;
    let trimmed = value.trim();

    if !EMAIL_PATTERN.is_match(trimmed) {
        return Err(ValidationError::new(field, Constraint::InvalidString, message));
    }

    Ok(trimmed.to_string())
}
