use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

/// MongoDB server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Failures raised by user repositories.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Driver or server error from MongoDB.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    Database(mongodb::error::Error),

    /// A value could not be converted into BSON for an update document.
    #[error(transparent)]
    Serialization(#[from] mongodb::bson::ser::Error),

    /// A write would break the uniqueness of `userId` or `username`.
    ///
    /// Results in 409 Conflict.
    #[error("Duplicate value for unique field: {0}")]
    DuplicateKey(String),
}

/// Unique index violations are surfaced as `DuplicateKey`, everything else as `Database`.
impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_duplicate_key(&err) {
            StoreError::DuplicateKey(err.to_string())
        } else {
            StoreError::Database(err)
        }
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
