//! # GestureKit Core
//!
//! Geometry for the GestureKit stroke recognizer.
//! Provides fixed-dimension points, strokes with the normalization steps
//! used before template matching, tolerance-based float comparison,
//! and the error types shared by every GestureKit crate.

pub mod error;
pub mod path;
pub mod point;
pub mod tolerance;
pub mod types;

pub use error::{Error, GeometryError, RecognizerError, Result};
pub use path::{Path, DEFAULT_UNIFORM_SCALE_MIN_RATIO, MAX_TOLERANCE};
pub use point::Point;
pub use tolerance::{almost_equals, almost_equals_default, DEFAULT_EPSILON};
pub use types::{thread_safe_rw, ThreadSafeRw};
