//! GestureKit Settings Crate
//!
//! Handles recognizer configuration: defaults, validation, and JSON/TOML files.

pub mod config;
pub mod error;

pub use config::{Config, PathSettings, RecognizerSettings, CONFIG_FILE_NAME};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
