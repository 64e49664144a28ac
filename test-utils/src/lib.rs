//! User Orders Test Utils
//!
//! Provides shared testing utilities for the user-orders service. The crate offers a
//! builder for throwaway MongoDB databases, factories for building stored user documents
//! with unique identifiers, and fixtures producing JSON request payloads.
//!
//! # Overview
//!
//! - **TestBuilder**: Seeds a fresh database on the server named by `MONGODB_TEST_URL`,
//!   or yields `None` when the variable is unset so database tests are skipped
//! - **TestContext**: Handle to the seeded database, dropped again by `teardown()`
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for `entity::user::Model` and `entity::order::Model` values
//! - **fixture**: JSON bodies for the HTTP endpoints
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let user = factory::user::UserFactory::new()
//!         .order(factory::order::create_order(10.0, 2))
//!         .build();
//!
//!     let Some(test) = TestBuilder::new().with_user(user).build().await? else {
//!         return Ok(());
//!     };
//!     // Perform database operations on test.db...
//!     test.teardown().await
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
