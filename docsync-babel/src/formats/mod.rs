//! Format implementations
//!
//! This module contains all format implementations that convert between
//! the document tree and its text representations.

pub mod json;
pub mod markdown;

pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
