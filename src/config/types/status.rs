//! Which config fields the user actually wrote.

use rustc_hash::FxHashSet;

/// Tracks which TOML paths were explicitly present in user config.
///
/// Paths are dot-separated (e.g. `head.no_script`), spelled exactly as in
/// the file, so aliased keys show up under their alias.
#[derive(Debug, Clone, Default)]
pub struct ConfigPresence {
    paths: FxHashSet<String>,
}

impl ConfigPresence {
    /// Build presence set from raw TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let value: toml::Value = toml::from_str(content)?;
        let mut presence = Self::default();
        presence.collect_value("", &value);
        Ok(presence)
    }

    /// Check whether a field or section path was explicitly present.
    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        !path.is_empty() && self.paths.contains(path)
    }

    /// Check whether any of several spellings of a path was present.
    pub fn contains_any(&self, paths: &[&str]) -> bool {
        paths.iter().any(|path| self.contains(path))
    }

    fn collect_value(&mut self, prefix: &str, value: &toml::Value) {
        if !prefix.is_empty() {
            self.paths.insert(prefix.to_string());
        }
        if let toml::Value::Table(table) = value {
            for (key, child) in table {
                let next = if prefix.is_empty() {
                    key.to_string()
                } else {
                    format!("{prefix}.{key}")
                };
                self.collect_value(&next, child);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigPresence;

    #[test]
    fn collect_field_and_section_paths() {
        let toml = r#"
[head]
no_script = false

[root]
removeGatsbyAnnouncer = true
"#;
        let presence = ConfigPresence::from_toml(toml).unwrap();
        assert!(presence.contains("head"));
        assert!(presence.contains("head.no_script"));
        assert!(presence.contains("root.removeGatsbyAnnouncer"));
        assert!(!presence.contains("root.remove_gatsby_announcer"));
        assert!(presence.contains_any(&["root.remove_gatsby_announcer", "root.removeGatsbyAnnouncer"]));
    }

    #[test]
    fn empty_path_is_never_present() {
        let presence = ConfigPresence::from_toml("").unwrap();
        assert!(!presence.contains(""));
        assert!(!presence.contains("head"));
    }
}
