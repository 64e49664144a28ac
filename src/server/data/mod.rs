//! Database repository layer.
//!
//! This module contains the `UserRepository` trait and its implementations. Repositories
//! use entity documents internally and return domain models to keep the data layer
//! separate from business logic. All queries, inserts, updates, and deletes on the users
//! collection go through these repositories.

pub mod memory;
pub mod mongo;
pub mod user;

#[cfg(test)]
mod test;
