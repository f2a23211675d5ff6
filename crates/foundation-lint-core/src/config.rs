//! Engine configuration.
//!
//! The engine consumes exactly two pieces of configuration: the absolute
//! project root and an optional override list of library-source roots.
//! There are no per-rule options; every detector is a fixed check.
//! Configuration is parsed from a TOML string — reading the file is the
//! host's concern.

use serde::Deserialize;
use std::path::PathBuf;

use crate::scope::DEFAULT_LIBRARY_ROOTS;

/// Engine-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Absolute project root all analyzed paths are resolved against.
    #[serde(default = "default_root")]
    pub project_root: PathBuf,

    /// Library-source roots relative to the project root. Empty means the
    /// fixed default pair.
    #[serde(default)]
    pub library_roots: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            project_root: default_root(),
            library_roots: Vec::new(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

/// Errors when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to parse TOML.
    #[error("invalid config: {message}")]
    Parse {
        /// Parse error detail.
        message: String,
    },
    /// Config is structurally invalid.
    #[error("config validation: {0}")]
    Validation(String),
}

impl EngineConfig {
    /// Creates a config rooted at the given path, with default library roots.
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            library_roots: Vec::new(),
        }
    }

    /// Replaces the library-source root list.
    #[must_use]
    pub fn with_library_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.library_roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        /// Wrapper to handle the `[engine]` section in the TOML.
        #[derive(Deserialize, Default)]
        struct RawConfig {
            #[serde(default)]
            engine: EngineSection,
        }

        #[derive(Deserialize, Default)]
        struct EngineSection {
            #[serde(default = "default_root")]
            project_root: PathBuf,
            #[serde(default)]
            library_roots: Vec<String>,
        }

        let raw: RawConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;

        Ok(Self {
            project_root: raw.engine.project_root,
            library_roots: raw.engine.library_roots,
        })
    }

    /// The effective library-source roots: the override list, or the
    /// fixed default pair.
    #[must_use]
    pub fn effective_library_roots(&self) -> Vec<String> {
        if self.library_roots.is_empty() {
            DEFAULT_LIBRARY_ROOTS.iter().map(|s| (*s).to_string()).collect()
        } else {
            self.library_roots.clone()
        }
    }

    /// Validates config consistency.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for root in &self.library_roots {
            if root.is_empty() {
                return Err(ConfigError::Validation(
                    "library_roots: empty entry".to_string(),
                ));
            }
            if root.starts_with('/') || root.contains(':') {
                return Err(ConfigError::Validation(format!(
                    "library_roots: '{root}' must be relative to the project root"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let config = EngineConfig::parse("").expect("parse failed");
        assert_eq!(config.project_root, PathBuf::from("."));
        assert!(config.library_roots.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[engine]
project_root = "/repo"
library_roots = ["design/foundation", "design/icons"]
"#;
        let config = EngineConfig::parse(toml).expect("parse failed");
        assert_eq!(config.project_root, PathBuf::from("/repo"));
        assert_eq!(config.library_roots.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn effective_roots_default_to_fixed_pair() {
        let config = EngineConfig::new("/repo");
        assert_eq!(
            config.effective_library_roots(),
            vec![
                "packages/foundation".to_string(),
                "packages/foundation-icons".to_string()
            ]
        );
    }

    #[test]
    fn effective_roots_use_override_when_present() {
        let config = EngineConfig::new("/repo").with_library_roots(["design/foundation"]);
        assert_eq!(
            config.effective_library_roots(),
            vec!["design/foundation".to_string()]
        );
    }

    #[test]
    fn validate_rejects_absolute_override() {
        let config = EngineConfig::new("/repo").with_library_roots(["/abs/path"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_override() {
        let config = EngineConfig::new("/repo").with_library_roots([""]);
        assert!(config.validate().is_err());
    }
}
