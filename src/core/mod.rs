//! Core types - pure abstractions shared across the codebase.

mod driver;

pub use driver::{BuildMode, MODE_ENV};
