//! Configuration management for `nojs.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── head       # [head]
//! │   └── root       # [root]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── status     # ConfigPresence
//! └── mod.rs         # NojsConfig (this file)
//! ```
//!
//! A missing config file is not an error: every option has a default.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{HeadOptions, RootOptions};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigPresence, FieldPath};

use crate::{debug, log};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the working directory.
pub const CONFIG_FILE: &str = "nojs.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing nojs.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NojsConfig {
    /// Path of the file this config was read from (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Head and end-of-body stripping
    pub head: HeadOptions,

    /// Root element rewriting
    pub root: RootOptions,
}

impl NojsConfig {
    /// Resolve and load the configuration.
    ///
    /// With an explicit path, that file must exist. Otherwise `nojs.toml`
    /// is searched upward from `cwd`, falling back to defaults.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => cwd.join(path),
            None => match find_config_file(cwd, Path::new(CONFIG_FILE)) {
                Some(path) => path,
                None => {
                    debug!("config"; "no {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
            },
        };

        debug!("config"; "loading {}", path.display());
        Self::from_path(&path)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        let presence = ConfigPresence::from_toml(&content)?;
        config.validate(&presence).print_warnings();

        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Collect diagnostics for every section.
    pub fn validate(&self, presence: &ConfigPresence) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.head.validate(presence, &mut diag);
        diag
    }

    /// Render the effective options as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> NojsConfig {
    let (parsed, ignored) = NojsConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
