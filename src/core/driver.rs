//! Build mode: the production gate for every transform.

/// Environment variable consulted once at startup.
pub const MODE_ENV: &str = "NODE_ENV";

/// Value of [`MODE_ENV`] that selects production.
const PRODUCTION_VALUE: &str = "production";

/// Mode the host build runs in.
///
/// Evaluated once per process and passed into every entry point.
/// Transforms only run in production; development builds pass markup
/// through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildMode {
    pub production: bool,
}

impl BuildMode {
    /// Production mode: normalization runs.
    pub const PRODUCTION: Self = Self { production: true };

    /// Development mode: everything is a no-op.
    pub const DEVELOPMENT: Self = Self { production: false };

    /// Read [`MODE_ENV`] from the process environment.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(MODE_ENV).ok().as_deref())
    }

    /// Decide the mode from a raw environment value.
    ///
    /// Only the exact string `production` counts.
    pub fn from_value(value: Option<&str>) -> Self {
        Self {
            production: value == Some(PRODUCTION_VALUE),
        }
    }

    #[inline]
    pub const fn is_production(&self) -> bool {
        self.production
    }

    pub const fn label(&self) -> &'static str {
        if self.production { "production" } else { "development" }
    }
}
