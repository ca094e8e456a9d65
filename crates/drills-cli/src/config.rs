//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `DRILLS_PYRAMID__MARKER`, `DRILLS_OUTPUT__NO_COLOR`
//! 3. Config file (`--config`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, Source};
use serde::{Deserialize, Serialize};
use tracing::debug;

use drills_core::domain::DEFAULT_MARKER;

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "DRILLS";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Pyramid drawing settings.
    pub pyramid: PyramidConfig,
    /// Diagnostic output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PyramidConfig {
    /// Exactly one printable character.
    pub marker: String,
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then `DRILLS_*`
    /// environment variables.
    ///
    /// A file passed via `--config` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Self::config_path()).required(false),
        };
        Self::load_from(file, env_source(ENV_PREFIX))
    }

    fn load_from<F, E>(file: F, env: E) -> CliResult<Self>
    where
        F: Source + Send + Sync + 'static,
        E: Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to read configuration: {e}"),
                source: Some(Box::new(e)),
            })?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| CliError::ConfigError {
                message: format!("Invalid configuration: {e}"),
                source: Some(Box::new(e)),
            })?;

        config.marker()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// The configured pyramid marker as a single character.
    pub fn marker(&self) -> CliResult<char> {
        parse_marker(&self.pyramid.marker).ok_or_else(|| CliError::ConfigError {
            message: format!(
                "pyramid.marker must be a single printable character, got {:?}",
                self.pyramid.marker
            ),
            source: None,
        })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.drills.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "drills", "drills")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".drills.toml"))
    }
}

fn env_source(prefix: &str) -> Environment {
    Environment::with_prefix(prefix)
        .prefix_separator("_")
        .separator("__")
}

/// `Some` for exactly one character that is neither whitespace nor a control
/// character.
pub fn parse_marker(raw: &str) -> Option<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_printable_marker(c) => Some(c),
        _ => None,
    }
}

pub fn is_printable_marker(c: char) -> bool {
    !c.is_whitespace() && !c.is_control()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    /// Loads `contents` as a TOML file, with an env source nothing will match.
    fn load_toml(contents: &str) -> CliResult<AppConfig> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        AppConfig::load_from(
            File::from(file.path()).required(true),
            env_source("DRILLS_TEST_UNUSED"),
        )
    }

    #[test]
    fn default_marker_is_hash() {
        assert_eq!(AppConfig::default().marker().unwrap(), '#');
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(load_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn file_overrides_marker() {
        let cfg = load_toml("[pyramid]\nmarker = \"*\"\n").unwrap();
        assert_eq!(cfg.marker().unwrap(), '*');
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_sets_no_color() {
        let cfg = load_toml("[output]\nno_color = true\n").unwrap();
        assert!(cfg.output.no_color);
    }

    #[test]
    fn multi_char_marker_is_config_error() {
        let err = load_toml("[pyramid]\nmarker = \"##\"\n").unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn missing_explicit_file_is_config_error() {
        let err = AppConfig::load(Some(Path::new("/definitely/not/here/drills.toml"))).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn parse_marker_rules() {
        assert_eq!(parse_marker("#"), Some('#'));
        assert_eq!(parse_marker("█"), Some('█'));
        assert_eq!(parse_marker(""), None);
        assert_eq!(parse_marker(" "), None);
        assert_eq!(parse_marker("\t"), None);
        assert_eq!(parse_marker("ab"), None);
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
