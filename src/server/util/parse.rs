use crate::server::error::validation::{Constraint, ValidationError};

/// Parses the `:userId` path segment into a numeric user ID.
///
/// # Arguments
/// - `value` - Raw path segment
///
/// # Returns
/// - `Ok(i64)` - Successfully parsed user ID
/// - `Err(ValidationError)` - Segment is not an integer, reported on field `userId`
pub fn parse_user_id(value: &str) -> Result<i64, ValidationError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::new("userId", Constraint::InvalidType, "Invalid user id"))
}
