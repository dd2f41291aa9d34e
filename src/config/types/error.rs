//! Configuration error types.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "head.no_script")
    pub field: FieldPath,
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{} {}",
            "[".if_supports_color(Stream::Stderr, |s| s.dimmed()),
            self.field
                .as_str()
                .if_supports_color(Stream::Stderr, |s| s.cyan()),
            "]".if_supports_color(Stream::Stderr, |s| s.dimmed()),
            self.message
        )?;
        if let Some(hint) = &self.hint {
            let label = "hint:".if_supports_color(Stream::Stderr, |s| s.yellow());
            write!(f, "\n  {label} {hint}")?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Warnings collected while checking a loaded config.
///
/// Nothing in `nojs.toml` is fatal once it parses: every option is an
/// independent boolean. Diagnostics only point at deprecated or
/// contradictory settings.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.warnings
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Report a deprecated field and the one replacing it.
    pub fn deprecated(&mut self, field: FieldPath, replacement: FieldPath) {
        self.warn_with_hint(
            field,
            "field is deprecated and will be removed in a future version",
            format!("use {replacement} instead"),
        );
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        crate::log!("warning"; "config:");
        for warning in &self.warnings {
            eprintln!("{warning}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("nojs.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("nojs.toml"));
    }

    #[test]
    fn test_deprecated_carries_replacement() {
        owo_colors::set_override(false);
        let mut diag = ConfigDiagnostics::new();
        diag.deprecated(FieldPath::new("head.old"), FieldPath::new("head.new"));

        assert_eq!(diag.warnings().len(), 1);
        let shown = diag.warnings()[0].to_string();
        assert!(shown.contains("[head.old]"));
        assert!(shown.contains("use `head.new` instead"));
    }
}
