//! Command-line interface module.
//!
//! The binary stands in for the host pipeline: it reads each page's render
//! state from JSON, runs the hooks, and writes the result back.

mod apply;
mod args;
mod check;
mod page;

pub use apply::{ApplySummary, apply_pages};
pub use args::{ApplyArgs, Cli, Commands, ModeArgs};
pub use check::check_config;
pub use page::{Page, PageError, PageReport};
