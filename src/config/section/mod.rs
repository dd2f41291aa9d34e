//! Configuration section definitions.
//!
//! Each module corresponds to a section in `nojs.toml`:
//!
//! | Module | TOML Section | Purpose                                   |
//! |--------|--------------|-------------------------------------------|
//! | `head` | `[head]`     | Head / end-of-body stripping              |
//! | `root` | `[root]`     | Root element children                     |

mod head;
mod root;

pub use head::HeadOptions;
pub use root::RootOptions;
