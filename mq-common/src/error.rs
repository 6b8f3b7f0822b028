//! Common error types for Musequill

use thiserror::Error;

/// Common result type for Musequill operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Musequill crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file exists but is not valid TOML for the expected schema
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
