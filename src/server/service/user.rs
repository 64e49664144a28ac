//! User service for business logic.
//!
//! This module provides the `UserService` for managing users and their embedded orders.
//! It performs the existence checks that precede every write, hashes passwords on the
//! create and update paths, and translates missing documents into `NotFound` errors while
//! working with domain models rather than DTOs.

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, Order, UpdateUserParams, User, UserChanges, UserSummary},
    service::password::PasswordService,
};

const USER_NOT_FOUND: &str = "User not found!";
const USER_EXISTS: &str = "User already exists";
const NO_ORDERS: &str = "No orders found for this user";

fn user_not_found() -> AppError {
    AppError::NotFound(USER_NOT_FOUND.to_string())
}

/// Service providing business logic for users and their orders.
///
/// Holds references to the injected repository and the password service so it can be
/// constructed per request from `AppState`.
pub struct UserService<'a> {
    pub repo: &'a dyn UserRepository,
    pub password: &'a PasswordService,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `repo` - Repository holding user documents
    /// - `password` - Service used to hash submitted passwords
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(repo: &'a dyn UserRepository, password: &'a PasswordService) -> Self {
        Self { repo, password }
    }

    /// Creates a new user.
    ///
    /// Rejects a `userId` that is already taken, hashes the password, and inserts the
    /// document. A `username` collision is reported by the store's unique index and also
    /// surfaces as a conflict.
    ///
    /// # Arguments
    /// - `params` - Validated user fields with the plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user
    /// - `Err(AppError::Conflict)` - `userId` or `username` already exists
    /// - `Err(AppError::StoreErr)` - Database error during lookup or insert
    pub async fn create_user(&self, params: CreateUserParams) -> Result<User, AppError> {
        if self.repo.find_by_user_id(params.user_id).await?.is_some() {
            return Err(AppError::Conflict(USER_EXISTS.to_string()));
        }

        let password_hash = self.password.hash(params.password.clone()).await?;
        let user = self.repo.insert(params.into_user(password_hash)).await?;

        tracing::info!("Created user {}", user.user_id);

        Ok(user)
    }

    /// Lists all users as summaries without credentials or internal ids.
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, AppError> {
        let users = self.repo.get_all_summaries().await?;
        Ok(users)
    }

    /// Retrieves a single user.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_user(&self, user_id: i64) -> Result<User, AppError> {
        self.repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Applies a partial update to a user.
    ///
    /// Only fields present in `params` change. Moving the user to a `userId` held by
    /// someone else is a conflict. The password is re-hashed only when it differs from
    /// the stored one: a submitted value equal to the stored hash, or one that verifies
    /// against it, leaves the hash untouched.
    ///
    /// # Arguments
    /// - `user_id` - Current numeric ID of the user
    /// - `params` - Validated fields to change
    ///
    /// # Returns
    /// - `Ok(User)` - User as stored after the update
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::Conflict)` - New `userId` or `username` already taken
    /// - `Err(AppError::StoreErr)` - Database error during lookup or update
    pub async fn update_user(
        &self,
        user_id: i64,
        params: UpdateUserParams,
    ) -> Result<User, AppError> {
        let existing = self
            .repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(user_not_found)?;

        if let Some(new_id) = params.user_id.filter(|id| *id != user_id) {
            if self.repo.find_by_user_id(new_id).await?.is_some() {
                return Err(AppError::Conflict(USER_EXISTS.to_string()));
            }
        }

        let password_hash = match params.password.clone() {
            Some(password) if self.password_changed(&password, &existing).await => {
                Some(self.password.hash(password).await?)
            }
            _ => None,
        };

        let changes = UserChanges::from_params(params, password_hash);
        if changes.is_empty() {
            return Ok(existing);
        }

        self.repo
            .update(user_id, changes)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Whether `submitted` differs from the password behind the stored hash.
    ///
    /// A stored hash that cannot be parsed is treated as changed so the new value gets
    /// a proper hash.
    async fn password_changed(&self, submitted: &str, existing: &User) -> bool {
        if submitted == existing.password_hash {
            return false;
        }

        match self
            .password
            .verify(submitted.to_string(), existing.password_hash.clone())
            .await
        {
            Ok(matches) => !matches,
            Err(e) => {
                tracing::warn!(
                    "Stored password hash of user {} is unreadable, re-hashing: {}",
                    existing.user_id,
                    e
                );
                true
            }
        }
    }

    /// Permanently removes a user.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn delete_user(&self, user_id: i64) -> Result<(), AppError> {
        if !self.repo.delete(user_id).await? {
            return Err(user_not_found());
        }

        tracing::info!("Deleted user {}", user_id);

        Ok(())
    }

    /// Appends an order to a user.
    ///
    /// # Returns
    /// - `Ok(User)` - User with the order appended
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn add_order(&self, user_id: i64, order: Order) -> Result<User, AppError> {
        self.repo
            .push_order(user_id, order)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Retrieves only the orders of a user.
    ///
    /// # Returns
    /// - `Ok(Vec<Order>)` - Orders in insertion order, possibly empty
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn list_orders(&self, user_id: i64) -> Result<Vec<Order>, AppError> {
        self.repo
            .get_orders(user_id)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Computes `Σ(price × quantity)` over a user's orders.
    ///
    /// # Returns
    /// - `Ok(f64)` - Total of all orders
    /// - `Err(AppError::NotFound)` - No user with that ID, or the user has no orders
    pub async fn total_order_price(&self, user_id: i64) -> Result<f64, AppError> {
        if self.repo.find_by_user_id(user_id).await?.is_none() {
            return Err(user_not_found());
        }

        self.repo
            .total_order_price(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NO_ORDERS.to_string()))
    }
}
