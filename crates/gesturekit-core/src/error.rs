//! Error handling for GestureKit
//!
//! Provides error types for both layers of the recognizer:
//! - Geometry errors (point access, path preconditions)
//! - Recognizer errors (construction, empty template state)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents precondition violations on points and paths.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Coordinate index outside `0..dimensions`
    #[error("Coordinate index {index} out of range for {dimensions}-dimensional point")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The point's dimensionality.
        dimensions: usize,
    },

    /// Operation needs at least one point but the path is empty
    #[error("Cannot compute {operation} of an empty path")]
    EmptyPath {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// Path has too few points for the requested operation
    #[error("{operation} requires at least {required} points, path has {actual}")]
    TooFewPoints {
        /// The operation that was attempted.
        operation: &'static str,
        /// The minimum number of points.
        required: usize,
        /// The number of points in the path.
        actual: usize,
    },

    /// Resample target count must exceed one
    #[error("Resample target must be greater than 1, got {requested}")]
    InvalidSampleCount {
        /// The requested point count.
        requested: usize,
    },

    /// Path has zero arc length or zero extent, so it cannot be resampled or scaled
    #[error("Degenerate path: {reason}")]
    DegeneratePath {
        /// Why the path is degenerate.
        reason: String,
    },

    /// Pointwise distance between paths of different sizes
    #[error("Path length mismatch: {left} points vs {right} points")]
    LengthMismatch {
        /// Point count of the first path.
        left: usize,
        /// Point count of the second path.
        right: usize,
    },
}

/// Recognizer error type
///
/// Represents construction errors and queries against an empty template set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecognizerError {
    /// Recognition was attempted before any template was registered
    #[error("No templates registered")]
    NoTemplates,

    /// A label exists but holds no example paths
    #[error("Template class {label} has no examples")]
    EmptyTemplateClass {
        /// Debug rendering of the label.
        label: String,
    },

    /// Sample size must be greater than 1
    #[error("Invalid sample size {sample_size}: must be greater than 1")]
    InvalidSampleSize {
        /// The rejected sample size.
        sample_size: usize,
    },

    /// Scale size must be positive
    #[error("Invalid scale size {scale_size}: must be greater than 0")]
    InvalidScaleSize {
        /// The rejected scale size.
        scale_size: u32,
    },
}

/// Main error type for GestureKit
///
/// A unified error type that can represent any error from the core and the
/// recognizer. This is the primary error type used in public APIs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Recognizer error
    #[error(transparent)]
    Recognizer(#[from] RecognizerError),
}

impl Error {
    /// Check if this is a geometry precondition error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this error means the recognizer has no data to answer with
    pub fn is_empty_state(&self) -> bool {
        matches!(
            self,
            Error::Recognizer(RecognizerError::NoTemplates)
                | Error::Recognizer(RecognizerError::EmptyTemplateClass { .. })
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
