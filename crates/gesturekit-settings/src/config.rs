//! Configuration for GestureKit
//!
//! Provides configuration file handling and validation for the recognizer.
//! Supports JSON and TOML file formats, stored by default in the platform
//! configuration directory.
//!
//! Configuration is organized into two sections:
//! - Recognizer settings (sample count, normalization scale, scoring policy)
//! - Path settings (scaling threshold, resampling tolerance)

use gesturekit_core::{Path, DEFAULT_EPSILON, DEFAULT_UNIFORM_SCALE_MIN_RATIO, MAX_TOLERANCE};
use gesturekit_recognizer::{DistancePolicy, MultiRecognizer, Normalizer};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::path::{Path as FsPath, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult, SettingsResult};

/// File name used inside the platform configuration directory
pub const CONFIG_FILE_NAME: &str = "gesturekit.toml";

/// Recognizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizerSettings {
    /// Number of points every stroke is resampled to
    pub sample_size: usize,
    /// Side of the square every stroke is scaled into
    pub scale_size: u32,
    /// How per-example distances collapse into a class distance
    #[serde(default)]
    pub policy: DistancePolicy,
}

impl Default for RecognizerSettings {
    fn default() -> Self {
        Self {
            sample_size: 64,
            scale_size: 100,
            policy: DistancePolicy::default(),
        }
    }
}

/// Path settings applied to captured strokes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSettings {
    /// Extent ratio below which scaling keeps the aspect ratio, in (0, 1)
    pub uniform_scale_min_ratio: f32,
    /// Almost-equals width used while resampling, in `(0, MAX_TOLERANCE]`
    pub tolerance: f32,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            uniform_scale_min_ratio: DEFAULT_UNIFORM_SCALE_MIN_RATIO,
            tolerance: DEFAULT_EPSILON,
        }
    }
}

/// Complete GestureKit configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub recognizer: RecognizerSettings,
    #[serde(default)]
    pub path: PathSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &FsPath) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `<config dir>/gesturekit/gesturekit.toml`
    pub fn default_config_path() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("gesturekit").join(CONFIG_FILE_NAME))
            .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &FsPath) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &FsPath) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.recognizer.sample_size <= 1 {
            return Err(out_of_range(
                "recognizer.sample_size",
                self.recognizer.sample_size,
            ));
        }

        if self.recognizer.scale_size == 0 {
            return Err(out_of_range(
                "recognizer.scale_size",
                self.recognizer.scale_size,
            ));
        }

        let ratio = self.path.uniform_scale_min_ratio;
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(out_of_range("path.uniform_scale_min_ratio", ratio));
        }

        let tolerance = self.path.tolerance;
        if !(tolerance > 0.0 && tolerance <= MAX_TOLERANCE) {
            return Err(out_of_range("path.tolerance", tolerance));
        }

        Ok(())
    }

    /// Normalizer described by the recognizer section
    pub fn normalizer(&self) -> SettingsResult<Normalizer> {
        self.validate()?;
        let normalizer = Normalizer::new(self.recognizer.sample_size, self.recognizer.scale_size)
            .map_err(gesturekit_core::Error::from)?;
        Ok(normalizer)
    }

    /// Build an empty multi-example recognizer from these settings
    pub fn build_recognizer<const N: usize, K>(&self) -> SettingsResult<MultiRecognizer<N, K>>
    where
        K: Ord + Clone + Debug,
    {
        Ok(MultiRecognizer::with_normalizer(self.normalizer()?))
    }

    /// Apply the path section to a freshly captured stroke
    pub fn configure_path<const N: usize>(&self, path: Path<N>) -> Path<N> {
        path.with_uniform_scale_min_ratio(self.path.uniform_scale_min_ratio)
            .with_tolerance(self.path.tolerance)
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
