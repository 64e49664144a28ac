//! User factory for creating test user documents.
//!
//! This module provides factory methods for creating user documents with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;

/// Placeholder stored in the `password` field of factory-built users.
///
/// Not a real PHC hash; tests that verify passwords should create users through the
/// service instead.
pub const DEFAULT_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$factory$hash";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new()
///     .user_id(42)
///     .username("jane")
///     .is_active(false)
///     .build();
/// ```
pub struct UserFactory {
    user_id: i64,
    username: String,
    password: String,
    first_name: String,
    last_name: String,
    age: i64,
    email: String,
    is_active: bool,
    hobbies: Vec<String>,
    orders: Vec<entity::order::Model>,
}

impl UserFactory {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented
    /// - username: `"user_{id}"`
    /// - email: `"user_{id}@example.com"`
    /// - full name `"Test User"`, age `30`, active, one hobby, no orders
    pub fn new() -> Self {
        let id = next_id();
        Self {
            user_id: id,
            username: format!("user_{}", id),
            password: DEFAULT_PASSWORD_HASH.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            age: 30,
            email: format!("user_{}@example.com", id),
            is_active: true,
            hobbies: vec!["reading".to_string()],
            orders: Vec::new(),
        }
    }

    /// Sets the numeric user ID.
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password(mut self, password_hash: impl Into<String>) -> Self {
        self.password = password_hash.into();
        self
    }

    pub fn full_name(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn age(mut self, age: i64) -> Self {
        self.age = age;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn hobbies(mut self, hobbies: Vec<String>) -> Self {
        self.hobbies = hobbies;
        self
    }

    /// Appends one order.
    pub fn order(mut self, order: entity::order::Model) -> Self {
        self.orders.push(order);
        self
    }

    /// Replaces the order list.
    pub fn orders(mut self, orders: Vec<entity::order::Model>) -> Self {
        self.orders = orders;
        self
    }

    /// Builds the user document without an `_id`.
    pub fn build(self) -> entity::user::Model {
        entity::user::Model {
            id: None,
            user_id: self.user_id,
            username: self.username,
            password: self.password,
            full_name: entity::user::FullName {
                first_name: self.first_name,
                last_name: self.last_name,
            },
            age: self.age,
            email: self.email,
            is_active: self.is_active,
            hobbies: self.hobbies,
            address: entity::user::Address {
                street: "123 Main St".to_string(),
                city: "Anytown".to_string(),
                country: "USA".to_string(),
            },
            orders: self.orders,
        }
    }
}

impl Default for UserFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new().build()`.
pub fn create_user() -> entity::user::Model {
    UserFactory::new().build()
}
