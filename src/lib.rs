//! REST backend for users with embedded orders, stored in MongoDB.
//!
//! - `model` holds the JSON request and response DTOs
//! - `server` holds controllers, services, repositories, and startup

pub mod model;
pub mod server;
