//! Test fixtures providing request payloads.
//!
//! Fixtures return `serde_json::Value` bodies exactly as a client would send them, so
//! HTTP tests exercise the real deserialization and validation path.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let body = fixture::user::create_payload(1);
//! let order = fixture::user::order_payload("Book", 10.0, 2);
//! ```

pub mod user;
