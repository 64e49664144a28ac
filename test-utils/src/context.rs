use mongodb::{Client, Database};

use crate::error::TestError;

/// Test context holding a throwaway MongoDB database.
///
/// Every context gets its own uniquely named database, so tests can run in parallel
/// against one server without seeing each other's documents. Call [`teardown`] at the
/// end of the test to drop it.
///
/// [`teardown`]: TestContext::teardown
pub struct TestContext {
    /// Database the test reads and writes.
    pub db: Database,
}

impl TestContext {
    /// Connects to `url` and selects the database `name`.
    ///
    /// Nothing is created on the server until the first write.
    ///
    /// # Arguments
    /// - `url` - MongoDB connection string
    /// - `name` - Database name, unique per test
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context bound to the named database
    /// - `Err(TestError::Database)` - Connection string could not be parsed
    pub async fn connect(url: &str, name: &str) -> Result<Self, TestError> {
        let client = Client::with_uri_str(url).await?;

        Ok(Self {
            db: client.database(name),
        })
    }

    /// Inserts user documents into the users collection.
    ///
    /// # Returns
    /// - `Ok(())` - All documents inserted
    /// - `Err(TestError::Database)` - Insert failed, e.g. duplicate keys among the seeds
    pub async fn with_users(&self, users: Vec<entity::user::Model>) -> Result<(), TestError> {
        if users.is_empty() {
            return Ok(());
        }

        self.db
            .collection::<entity::user::Model>(entity::user::COLLECTION)
            .insert_many(users)
            .await?;

        Ok(())
    }

    /// Drops the test database.
    pub async fn teardown(self) -> Result<(), TestError> {
        self.db.drop().await?;
        Ok(())
    }
}
