//! `[head]` section configuration.
//!
//! Controls what the pre-render pass strips from the page's head and
//! end-of-body lists.
//!
//! # Example
//!
//! ```toml
//! [head]
//! no_script = true                  # Drop script preloads and bootstrap scripts
//! remove_generator_tag = true       # Drop <meta name="generator">
//! remove_head_data_attrs = true     # Drop data-gatsby-head / data-react-helmet
//! no_inline_styles = false          # <style data-href> -> <link rel="stylesheet">
//! ```
//!
//! Every key also accepts its camelCase spelling (`noScript`, ...).

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, ConfigPresence, FieldPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadOptions {
    /// Strip script preloads from head and executable scripts from end of body.
    #[serde(alias = "noScript")]
    pub no_script: bool,

    /// Strip `<meta name="generator">`.
    #[serde(alias = "removeGeneratorTag")]
    pub remove_generator_tag: bool,

    /// Deprecated alias of `remove_head_data_attrs`.
    #[serde(alias = "removeReactHelmetAttrs")]
    pub remove_react_helmet_attrs: bool,

    /// Strip `data-gatsby-head` and `data-react-helmet` from head nodes.
    #[serde(alias = "removeHeadDataAttrs")]
    pub remove_head_data_attrs: bool,

    /// Replace inline `<style data-href>` with a stylesheet link.
    #[serde(alias = "noInlineStyles")]
    pub no_inline_styles: bool,
}

impl Default for HeadOptions {
    fn default() -> Self {
        Self {
            no_script: true,
            remove_generator_tag: true,
            remove_react_helmet_attrs: false,
            remove_head_data_attrs: true,
            no_inline_styles: false,
        }
    }
}

/// Field paths of [`HeadOptions`].
pub struct HeadOptionsFields {
    pub remove_react_helmet_attrs: FieldPath,
    pub remove_head_data_attrs: FieldPath,
}

impl HeadOptions {
    pub const FIELDS: HeadOptionsFields = HeadOptionsFields {
        remove_react_helmet_attrs: FieldPath::new("head.remove_react_helmet_attrs"),
        remove_head_data_attrs: FieldPath::new("head.remove_head_data_attrs"),
    };

    /// Whether instrumentation attributes are stripped.
    ///
    /// Either flag turns it on; the deprecated alias cannot switch it off.
    #[inline]
    pub const fn strips_data_attrs(&self) -> bool {
        self.remove_head_data_attrs || self.remove_react_helmet_attrs
    }

    /// Report deprecated or contradictory settings.
    pub fn validate(&self, presence: &ConfigPresence, diag: &mut ConfigDiagnostics) {
        let fields = &Self::FIELDS;

        if !presence.contains_any(&[
            "head.remove_react_helmet_attrs",
            "head.removeReactHelmetAttrs",
        ]) {
            return;
        }
        diag.deprecated(fields.remove_react_helmet_attrs, fields.remove_head_data_attrs);

        if self.remove_react_helmet_attrs && !self.remove_head_data_attrs {
            diag.warn_with_hint(
                fields.remove_head_data_attrs,
                "is off, but attributes are still stripped by the deprecated alias",
                "set `remove_react_helmet_attrs = false` to keep them",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn diagnose(content: &str) -> ConfigDiagnostics {
        let config = test_parse_config(content);
        let presence = ConfigPresence::from_toml(content).unwrap();
        let mut diag = ConfigDiagnostics::new();
        config.head.validate(&presence, &mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.head.no_script);
        assert!(config.head.remove_generator_tag);
        assert!(!config.head.remove_react_helmet_attrs);
        assert!(config.head.remove_head_data_attrs);
        assert!(!config.head.no_inline_styles);
    }

    #[test]
    fn test_snake_and_camel_keys() {
        let config = test_parse_config("[head]\nno_script = false\nnoInlineStyles = true");
        assert!(!config.head.no_script);
        assert!(config.head.no_inline_styles);
    }

    #[test]
    fn test_strips_data_attrs_is_or() {
        let mut options = HeadOptions {
            remove_head_data_attrs: false,
            ..HeadOptions::default()
        };
        assert!(!options.strips_data_attrs());

        options.remove_react_helmet_attrs = true;
        assert!(options.strips_data_attrs());

        options.remove_head_data_attrs = true;
        options.remove_react_helmet_attrs = false;
        assert!(options.strips_data_attrs());
    }

    #[test]
    fn test_no_diagnostics_without_alias() {
        assert!(diagnose("[head]\nremove_head_data_attrs = false").is_empty());
    }

    #[test]
    fn test_alias_is_deprecated() {
        let diag = diagnose("[head]\nremoveReactHelmetAttrs = false");
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(
            diag.warnings()[0].field,
            HeadOptions::FIELDS.remove_react_helmet_attrs
        );
    }

    #[test]
    fn test_alias_overrides_disabled_flag() {
        let diag = diagnose("[head]\nremove_react_helmet_attrs = true\nremove_head_data_attrs = false");
        assert_eq!(diag.warnings().len(), 2);
        assert_eq!(diag.warnings()[1].field, HeadOptions::FIELDS.remove_head_data_attrs);
    }
}
