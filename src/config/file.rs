//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/hios-catalog/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! dir = "~/sites/hios/projects"
//!
//! [catalog]
//! status = "prototype"
//! sorted = true
//! images_prefix = "/images"
//! downloads_prefix = "/downloads"
//!
//! [loading]
//! threads = 4
//! verbose = true
//!
//! [routes]
//! locales = ["en", "es", "de", "it"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{locale::Locale, project::ProjectStatus};

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default catalog root directory
    pub dir: Option<PathBuf>,

    /// Record building options
    #[serde(default)]
    pub catalog: FileCatalogConfig,

    /// Loading options
    #[serde(default)]
    pub loading: FileLoadingConfig,

    /// Route generation options
    #[serde(default)]
    pub routes: FileRoutesConfig,
}

/// Record building options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileCatalogConfig {
    /// Status tag assigned to every record
    pub status: Option<ProjectStatus>,

    /// Whether to order slugs, images and files by name
    pub sorted: Option<bool>,

    /// URL prefix of gallery images
    pub images_prefix: Option<String>,

    /// URL prefix of downloadable files
    pub downloads_prefix: Option<String>,
}

/// Loading options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileLoadingConfig {
    /// Number of threads used to load records
    pub threads: Option<usize>,

    /// Whether to report load errors
    pub verbose: Option<bool>,
}

/// Route generation options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileRoutesConfig {
    /// Locales to generate page routes for
    pub locales: Option<Vec<Locale>>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/hios-catalog/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hios-catalog").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed (see [`FileConfig::load_from`]).
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        Self::load_from(&path)
    }

    /// Load configuration from an explicit path.
    ///
    /// A missing file yields the default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.dir.is_none());
        assert!(config.catalog.status.is_none());
        assert!(config.catalog.sorted.is_none());
        assert!(config.catalog.images_prefix.is_none());
        assert!(config.catalog.downloads_prefix.is_none());
        assert!(config.loading.threads.is_none());
        assert!(config.loading.verbose.is_none());
        assert!(config.routes.locales.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
dir = "~/sites/hios/projects"

[catalog]
status = "wip"
sorted = false
images_prefix = "/static/img"
downloads_prefix = "/static/dl"

[loading]
threads = 4
verbose = true

[routes]
locales = ["en", "de"]
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.dir, Some(PathBuf::from("~/sites/hios/projects")));
        assert_eq!(config.catalog.status, Some(ProjectStatus::Wip));
        assert_eq!(config.catalog.sorted, Some(false));
        assert_eq!(config.catalog.images_prefix.as_deref(), Some("/static/img"));
        assert_eq!(config.catalog.downloads_prefix.as_deref(), Some("/static/dl"));
        assert_eq!(config.loading.threads, Some(4));
        assert_eq!(config.loading.verbose, Some(true));
        assert_eq!(config.routes.locales, Some(vec![Locale::En, Locale::De]));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[catalog]
status = "concept"
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert!(config.dir.is_none());
        assert_eq!(config.catalog.status, Some(ProjectStatus::Concept));
        assert!(config.catalog.sorted.is_none());
        assert!(config.loading.threads.is_none());
        assert!(config.routes.locales.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();

        assert!(config.dir.is_none());
        assert!(config.catalog.status.is_none());
    }

    #[test]
    fn test_malformed_config_errors() {
        let toml_content = r#"
[loading]
threads = "not_a_number"
"#;
        assert!(toml::from_str::<FileConfig>(toml_content).is_err());
    }

    #[test]
    fn test_unknown_status_errors() {
        let toml_content = r#"
[catalog]
status = "shipped"
"#;
        assert!(toml::from_str::<FileConfig>(toml_content).is_err());
    }

    #[test]
    fn test_unknown_locale_errors() {
        let toml_content = r#"
[routes]
locales = ["fr"]
"#;
        assert!(toml::from_str::<FileConfig>(toml_content).is_err());
    }

    #[test]
    fn test_unknown_field_errors() {
        assert!(toml::from_str::<FileConfig>("theme = \"dark\"").is_err());
    }

    #[test]
    fn test_config_path_returns_expected_suffix() {
        if let Some(p) = FileConfig::config_path() {
            assert!(p.ends_with("hios-catalog/config.toml"));
        }
    }

    #[test]
    fn test_load_from_missing_file_returns_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = FileConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert!(config.dir.is_none());
    }

    #[test]
    fn test_load_from_reports_path_on_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[loading\nthreads = 2").unwrap();

        let err = FileConfig::load_from(&path).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
        assert!(err.contains("config.toml"));
    }

    #[test]
    fn test_expand_tilde_with_home() {
        let expanded = expand_tilde(&PathBuf::from("~/Projects"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("Projects"));
        }
    }

    #[test]
    fn test_expand_tilde_absolute_path_unchanged() {
        let path = PathBuf::from("/absolute/path");
        assert_eq!(expand_tilde(&path), path);
    }

    #[test]
    fn test_expand_tilde_relative_path_unchanged() {
        let path = PathBuf::from("relative/path");
        assert_eq!(expand_tilde(&path), path);
    }
}
