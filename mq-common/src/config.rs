//! Configuration loading and config file resolution
//!
//! The wizard service reads a small bootstrap TOML file. Every field has a
//! built-in default, so a missing file is not an error unless one was
//! explicitly requested.
//!
//! # Config File Priority
//!
//! 1. Command-line argument (`--config`)
//! 2. Environment variable (`MUSEQUILL_CONFIG`)
//! 3. Platform config file (`~/.config/musequill/config.toml`, then
//!    `/etc/musequill/config.toml` on Linux)
//! 4. Built-in defaults

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "MUSEQUILL_CONFIG";

/// Bootstrap configuration for the wizard service
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Interface to bind the HTTP listener to
    pub bind_address: String,

    /// HTTP server port
    ///
    /// Default: 5730
    pub port: u16,

    /// Logging configuration (optional)
    pub logging: LoggingConfig,

    /// Free-text resolution behavior exposed by the API
    pub resolution: ResolutionConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    ///
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
}

/// Resolution settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Attach a "did you mean" suggestion to unknown-value errors
    pub suggestions: bool,

    /// Minimum normalized Levenshtein similarity for a suggestion (0.0-1.0]
    pub suggestion_threshold: f64,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 5730,
            logging: LoggingConfig::default(),
            resolution: ResolutionConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            suggestions: true,
            suggestion_threshold: 0.85,
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl WizardConfig {
    /// Load configuration following the priority order above
    ///
    /// An explicitly requested file (CLI or environment) must exist. The
    /// platform config file is only read when present.
    pub fn load(cli_arg: Option<&Path>) -> Result<Self> {
        let explicit = cli_arg.is_some() || std::env::var_os(CONFIG_ENV_VAR).is_some();

        match resolve_config_path(cli_arg, CONFIG_ENV_VAR) {
            Some(path) if path.exists() => {
                info!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            Some(path) if explicit => Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            ))),
            _ => {
                debug!("No config file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and validate a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML content
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: WizardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the service cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(Error::Config("port must be non-zero".to_string()));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::Config(format!(
                "Unknown log level '{}'. Expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        let threshold = self.resolution.suggestion_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(Error::Config(format!(
                "suggestion_threshold must be in (0.0, 1.0], got {}",
                threshold
            )));
        }

        Ok(())
    }

    /// `host:port` string for the listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Config file resolution:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. Platform config file, if one exists
pub fn resolve_config_path(cli_arg: Option<&Path>, env_var_name: &str) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3: Platform config file
    platform_config_file()
}

/// First existing platform config file
fn platform_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("musequill").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/musequill/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = WizardConfig::default();
        assert_eq!(config.port, 5730);
        assert_eq!(config.logging.level, "info");
        assert!(config.resolution.suggestions);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = WizardConfig::from_toml_str("port = 6000\n[logging]\nlevel = \"debug\"\n")
            .expect("valid config");

        assert_eq!(config.port, 6000);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.resolution.suggestion_threshold, 0.85);
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let result = WizardConfig::from_toml_str("[logging]\nlevel = \"loud\"\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        let result = WizardConfig::from_toml_str("[resolution]\nsuggestion_threshold = 1.5\n");
        assert!(matches!(result, Err(Error::Config(_))));

        let result = WizardConfig::from_toml_str("[resolution]\nsuggestion_threshold = 0.0\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result = WizardConfig::from_toml_str("port = \"not a number\"");
        assert!(matches!(result, Err(Error::TomlParse(_))));
    }

    #[test]
    #[serial]
    fn test_cli_path_beats_env_var() {
        let cli_file = write_config("port = 7001\n");
        let env_file = write_config("port = 7002\n");
        std::env::set_var(CONFIG_ENV_VAR, env_file.path());

        let config = WizardConfig::load(Some(cli_file.path())).expect("load");
        std::env::remove_var(CONFIG_ENV_VAR);

        assert_eq!(config.port, 7001);
    }

    #[test]
    #[serial]
    fn test_env_var_used_without_cli_arg() {
        let env_file = write_config("port = 7003\n");
        std::env::set_var(CONFIG_ENV_VAR, env_file.path());

        let config = WizardConfig::load(None).expect("load");
        std::env::remove_var(CONFIG_ENV_VAR);

        assert_eq!(config.port, 7003);
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_an_error() {
        std::env::remove_var(CONFIG_ENV_VAR);
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.toml");

        let result = WizardConfig::load(Some(&missing));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_listen_addr() {
        let config = WizardConfig {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            ..WizardConfig::default()
        };
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }
}
