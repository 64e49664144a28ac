//! Request and response DTOs exchanged with HTTP clients.
//!
//! These types define the JSON wire format. Server-side domain models convert into
//! them at the controller boundary.

pub mod api;
pub mod user;
