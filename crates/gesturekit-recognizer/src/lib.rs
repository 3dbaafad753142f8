//! # GestureKit Recognizer
//!
//! Nearest-neighbor stroke classification in the style of the $1 unistroke
//! recognizer. Templates and queries are normalized by the same
//! [`Normalizer`] (resample, scale, center) and compared with the mean
//! pointwise distance from `gesturekit-core`.
//!
//! - [`Recognizer`] keeps one template per label.
//! - [`MultiRecognizer`] keeps any number of examples per label and scores
//!   them with a [`DistancePolicy`].
//! - [`SharedRecognizer`] puts a [`MultiRecognizer`] behind a read-write lock.

pub mod matching;
pub mod multi;
pub mod normalizer;
pub mod recognizer;
pub mod shared;

pub use matching::{DistancePolicy, Match};
pub use multi::MultiRecognizer;
pub use normalizer::Normalizer;
pub use recognizer::Recognizer;
pub use shared::SharedRecognizer;
