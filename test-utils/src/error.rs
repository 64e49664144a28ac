use thiserror::Error;

/// Errors raised while setting up or tearing down a test database.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the test server, seeding documents, or dropping the database failed.
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),
}
