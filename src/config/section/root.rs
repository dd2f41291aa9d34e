//! `[root]` section configuration.
//!
//! ```toml
//! [root]
//! remove_gatsby_announcer = false   # Drop the route-change announcer node
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootOptions {
    /// Remove the `gatsby-announcer` live region from the root element.
    #[serde(alias = "removeGatsbyAnnouncer")]
    pub remove_gatsby_announcer: bool,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_default_off() {
        assert!(!test_parse_config("").root.remove_gatsby_announcer);
    }

    #[test]
    fn test_camel_alias() {
        let config = test_parse_config("[root]\nremoveGatsbyAnnouncer = true");
        assert!(config.root.remove_gatsby_announcer);
    }
}
