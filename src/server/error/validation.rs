use thiserror::Error;

/// Kind of rule a payload field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Field is missing or empty.
    Required,
    /// Number or string length is below the allowed minimum.
    TooSmall,
    /// String does not have the expected format.
    InvalidString,
    /// Value has the wrong JSON type or could not be parsed.
    InvalidType,
}

impl Constraint {
    pub fn as_str(self) -> &'static str {
        match self {
            Constraint::Required => "required",
            Constraint::TooSmall => "too_small",
            Constraint::InvalidString => "invalid_string",
            Constraint::InvalidType => "invalid_type",
        }
    }
}

/// First failing field of a rejected payload.
///
/// Results in a 400 Bad Request whose error body names the field and constraint.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Dotted path of the field, e.g. `fullName.firstName` or `orders[1].price`
    pub field: String,
    pub constraint: Constraint,
    /// Human readable explanation returned to the client
    pub message: String,
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        constraint: Constraint,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            constraint,
            message: message.into(),
        }
    }
}
