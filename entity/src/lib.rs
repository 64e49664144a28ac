//! Document shapes stored in MongoDB.
//!
//! Each module describes one stored document (or embedded sub-document) as a serde
//! struct whose field names match the camelCase keys persisted in the collection.
//! The server converts these into domain models at the repository boundary.

pub mod order;
pub mod user;
