//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed by
//! the handlers. The state is initialized once during startup and then cloned for each
//! request through Axum's state extraction.

use std::sync::Arc;

use crate::server::{data::user::UserRepository, service::password::PasswordService};

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: the repository sits behind an `Arc` and the password
/// service only carries its Argon2 parameters.
#[derive(Clone)]
pub struct AppState {
    /// Repository over the users collection.
    ///
    /// MongoDB in production; tests inject the in-memory implementation.
    pub users: Arc<dyn UserRepository>,

    /// Service hashing passwords with the configured work factor.
    pub password_service: PasswordService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `users` - User repository implementation
    /// - `password_service` - Password hashing service
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(users: Arc<dyn UserRepository>, password_service: PasswordService) -> Self {
        Self {
            users,
            password_service,
        }
    }
}
