//! User repository abstraction.
//!
//! This module defines the `UserRepository` trait the service layer depends on. The
//! production implementation is [`MongoUserRepository`](super::mongo::MongoUserRepository);
//! [`MemoryUserRepository`](super::memory::MemoryUserRepository) keeps documents in
//! process and backs the test suite. Implementations convert between entity documents
//! and domain models at this boundary.

use async_trait::async_trait;

use crate::server::{
    error::store::StoreError,
    model::user::{Order, User, UserChanges, UserSummary},
};

/// Persistence operations on the users collection.
///
/// Every method addresses a user by its numeric `user_id`. Methods returning `Option`
/// yield `None` when no user matches.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by their numeric ID.
    ///
    /// Serves as the existence check performed before every mutation.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(StoreError)` - Database error during query
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<User>, StoreError>;

    /// Inserts a new user document.
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user
    /// - `Err(StoreError::DuplicateKey)` - `userId` or `username` already taken
    /// - `Err(StoreError)` - Database error during insert
    async fn insert(&self, user: User) -> Result<User, StoreError>;

    /// Lists every user projected to the public summary fields.
    async fn get_all_summaries(&self) -> Result<Vec<UserSummary>, StoreError>;

    /// Applies a partial update and returns the user as stored afterwards.
    ///
    /// An empty change set leaves the document untouched.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(StoreError::DuplicateKey)` - Change collides with another user's `userId`
    ///   or `username`
    async fn update(
        &self,
        user_id: i64,
        changes: UserChanges,
    ) -> Result<Option<User>, StoreError>;

    /// Removes the user document.
    ///
    /// # Returns
    /// - `Ok(true)` - A document was deleted
    /// - `Ok(false)` - No user with that ID
    async fn delete(&self, user_id: i64) -> Result<bool, StoreError>;

    /// Appends one order to the user's order list.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User with the order appended
    /// - `Ok(None)` - No user with that ID
    async fn push_order(&self, user_id: i64, order: Order) -> Result<Option<User>, StoreError>;

    /// Fetches only the order list of a user.
    ///
    /// # Returns
    /// - `Ok(Some(orders))` - The user's orders, possibly empty
    /// - `Ok(None)` - No user with that ID
    async fn get_orders(&self, user_id: i64) -> Result<Option<Vec<Order>>, StoreError>;

    /// Sums `price * quantity` over the user's orders.
    ///
    /// # Returns
    /// - `Ok(Some(total))` - The user has at least one order
    /// - `Ok(None)` - No user with that ID, or the user has no orders
    async fn total_order_price(&self, user_id: i64) -> Result<Option<f64>, StoreError>;
}
