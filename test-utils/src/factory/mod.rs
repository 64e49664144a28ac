//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating stored user documents with sensible
//! defaults, reducing boilerplate in tests. Each factory-built user gets a unique
//! `userId` and `username` so documents can be seeded together without colliding.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let user = factory::user::create_user();
//!
//! // Customize
//! let user = factory::user::UserFactory::new()
//!     .user_id(7)
//!     .age(40)
//!     .orders(vec![factory::order::create_order(10.0, 2)])
//!     .build();
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user documents
//! - `order` - Create embedded order documents
//! - `helpers` - Unique id generation

pub mod helpers;
pub mod order;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use order::create_order;
pub use user::create_user;
