//! Configuration file handling for ratio-placeholder.
//!
//! Loads configuration from `<config dir>/ratio-placeholder/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::catalog::CatalogPolicy;
use crate::components::{Rounding, DEFAULT_COMPONENT_BOUND};
use crate::ratio::AspectRatio;

/// Configuration file structure for ratio-placeholder.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub components: ComponentsConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct CatalogConfig {
    #[serde(default)]
    pub policy: CatalogPolicy,
    /// Extra landscape entries appended to the built-in list.
    #[serde(default)]
    pub extra: Vec<AspectRatio>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ComponentsConfig {
    #[serde(default = "default_bound")]
    pub bound: f64,
    #[serde(default)]
    pub rounding: Rounding,
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            bound: default_bound(),
            rounding: Rounding::default(),
        }
    }
}

fn default_bound() -> f64 {
    DEFAULT_COMPONENT_BOUND
}

/// Contents written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# ratio-placeholder configuration

[catalog]
# Catalog policy: "mirrored" (landscape + portrait, ratio-value matching)
# or "fixed" (single list, absolute-dimension matching)
policy = "mirrored"
# Additional ratios, appended after the built-in ones
# extra = [{ width = 32, height = 9 }]

[components]
# Longer axis of the encoder component grid
bound = 9
# Rounding for component counts: round, floor, ceil
rounding = "round"
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ratio-placeholder").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ratio-placeholder/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.catalog.policy, CatalogPolicy::Mirrored);
        assert_eq!(config.components.bound, 9.0);
        assert_eq!(config.components.rounding, Rounding::Round);
    }

    #[test]
    fn test_default_config_file_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_custom_values() {
        let config = Config::parse(
            r#"
[catalog]
policy = "fixed"
extra = [{ width = 32, height = 9 }]

[components]
bound = 6
rounding = "ceil"
"#,
        )
        .unwrap();
        assert_eq!(config.catalog.policy, CatalogPolicy::Fixed);
        assert_eq!(
            config.catalog.extra,
            vec![AspectRatio::new(32.0, 9.0).unwrap()]
        );
        assert_eq!(config.components.bound, 6.0);
        assert_eq!(config.components.rounding, Rounding::Ceil);
    }

    #[test]
    fn test_invalid_extra_rejected() {
        let result = Config::parse(
            r#"
[catalog]
extra = [{ width = 0, height = 9 }]
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(Config::parse("[catalog]\npolicy = \"spiral\"\n").is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[components]\nbound = \"nine\"\n").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_default_path_file_name() {
        let path = default_path();
        assert!(path.ends_with("ratio-placeholder/config.toml"));
    }
}
