//! # Musequill Common Library
//!
//! Shared code for the Musequill crates:
//! - Configuration loading and config file resolution
//! - Common error type

pub mod config;
pub mod error;

pub use config::{LoggingConfig, ResolutionConfig, WizardConfig};
pub use error::{Error, Result};
