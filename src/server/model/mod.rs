//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! users, their orders, and validated operation parameters. Domain models are converted
//! from entity documents at the repository boundary and transformed to DTOs at the
//! controller boundary.

pub mod user;
