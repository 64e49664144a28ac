use crate::{context::TestContext, error::TestError, factory::helpers::next_id};

/// Environment variable naming the MongoDB server used by database-backed tests.
pub const TEST_URL_VAR: &str = "MONGODB_TEST_URL";

/// Builder for creating test contexts backed by a real MongoDB server.
///
/// Database-backed tests only run when `MONGODB_TEST_URL` is set; otherwise `build()`
/// returns `Ok(None)` and the caller skips the database half of the test.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, factory};
///
/// if let Some(test) = TestBuilder::new()
///     .with_user(factory::user::create_user())
///     .build()
///     .await?
/// {
///     let repo = MongoUserRepository::new(&test.db);
///     // Perform repository operations...
///     test.teardown().await?;
/// }
/// ```
pub struct TestBuilder {
    /// Documents inserted into the users collection during `build()`.
    users: Vec<entity::user::Model>,
}

impl TestBuilder {
    /// Creates a new test builder with no seed documents.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with an empty users collection
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Adds one user document to seed.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_user(mut self, user: entity::user::Model) -> Self {
        self.users.push(user);
        self
    }

    /// Adds several user documents to seed, in order.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_users(mut self, users: Vec<entity::user::Model>) -> Self {
        self.users.extend(users);
        self
    }

    /// Connects to the test server, creates a fresh database, and seeds it.
    ///
    /// # Returns
    /// - `Ok(Some(TestContext))` - Seeded database ready for use
    /// - `Ok(None)` - `MONGODB_TEST_URL` is not set
    /// - `Err(TestError::Database)` - Failed to connect or seed
    pub async fn build(self) -> Result<Option<TestContext>, TestError> {
        let Ok(url) = std::env::var(TEST_URL_VAR) else {
            return Ok(None);
        };

        let name = format!("user_orders_test_{}_{}", std::process::id(), next_id());
        let context = TestContext::connect(&url, &name).await?;
        context.with_users(self.users).await?;

        Ok(Some(context))
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
