//! # GestureKit
//!
//! A unistroke gesture recognizer in the style of the $1 recognizer:
//! - Strokes of N-dimensional points, resampled, scaled and centered
//! - Nearest-neighbor matching against labeled templates
//! - JSON/TOML configuration of every normalization parameter
//!
//! ## Architecture
//!
//! GestureKit is organized as a workspace with multiple crates:
//!
//! 1. **gesturekit-core** - Points, paths, tolerance comparison, errors
//! 2. **gesturekit-recognizer** - Normalizer, single/multi-example recognizers
//! 3. **gesturekit-settings** - Configuration files and validation
//! 4. **gesturekit** - Stroke capture and the demo binary

pub mod capture;
pub mod types;

pub use gesturekit_core::{
    almost_equals, almost_equals_default, Error, GeometryError, Path, Point, RecognizerError,
    Result, DEFAULT_EPSILON, DEFAULT_UNIFORM_SCALE_MIN_RATIO,
};

pub use gesturekit_recognizer::{
    DistancePolicy, Match, MultiRecognizer, Normalizer, Recognizer, SharedRecognizer,
};

pub use gesturekit_settings::{Config, ConfigError, SettingsError};

pub use capture::{read_stroke, record_stroke, CaptureError, PointSource};
pub use types::Shape;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr, leaving stdout to results
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
