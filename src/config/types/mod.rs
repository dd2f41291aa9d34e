//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration errors and diagnostics         |
//! | `field`  | Dotted field paths                           |
//! | `status` | Presence of user-written fields              |

mod error;
mod field;
mod status;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use status::ConfigPresence;
