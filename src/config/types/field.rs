//! Type-safe config field path.

use owo_colors::{OwoColorize, Stream};
use std::fmt;

/// Dotted path of a config field, as written in `nojs.toml`.
///
/// Displays as a highlighted `` `head.no_script` ``.
///
/// ```ignore
/// diag.deprecated(HeadOptions::FIELDS.remove_react_helmet_attrs, HeadOptions::FIELDS.remove_head_data_attrs);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(
            f,
            "{}",
            quoted.if_supports_color(Stream::Stderr, |s| s.bright_blue())
        )
    }
}
