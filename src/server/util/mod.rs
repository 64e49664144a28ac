//! Small helpers shared by controllers.

pub mod parse;
