//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services implement the rules
//! around users and their orders (existence checks, conflicts, password hashing) while
//! working with domain models rather than DTOs or entity documents.

pub mod password;
pub mod user;
