//! The normalization pipeline shared by templates and queries.

use gesturekit_core::{GeometryError, Path, Point, RecognizerError};
use tracing::trace;

/// Resample → scale → center pipeline with fixed parameters.
///
/// Every stored template and every query goes through the same instance, so
/// all compared paths have `sample_size` points, a bounding region of side
/// `scale_size`, and their centroid on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    sample_size: usize,
    scale_size: u32,
}

impl Normalizer {
    /// Creates a pipeline; `sample_size` must exceed 1 and `scale_size` must be positive.
    pub fn new(sample_size: usize, scale_size: u32) -> Result<Self, RecognizerError> {
        if sample_size <= 1 {
            return Err(RecognizerError::InvalidSampleSize { sample_size });
        }
        if scale_size == 0 {
            return Err(RecognizerError::InvalidScaleSize { scale_size });
        }
        Ok(Self {
            sample_size,
            scale_size,
        })
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn scale_size(&self) -> u32 {
        self.scale_size
    }

    /// Runs `path` through resampling, scaling and centroid translation.
    ///
    /// Fails with [`GeometryError::DegeneratePath`] when any coordinate of the
    /// result is not finite, for example after overflow on huge inputs.
    pub fn normalize<const N: usize>(&self, path: &Path<N>) -> Result<Path<N>, GeometryError> {
        trace!(
            "Normalizing {}-point path to {} samples at scale {}",
            path.len(),
            self.sample_size,
            self.scale_size
        );
        let normalized = path
            .resample(self.sample_size)?
            .scale(self.scale_size as f32)?
            .translate_centroid_to(&Point::origin())?;
        if !normalized.is_finite() {
            return Err(GeometryError::DegeneratePath {
                reason: "normalized coordinates are not finite".to_string(),
            });
        }
        Ok(normalized)
    }

    /// Half the diagonal of the `scale_size` square, the reference distance for scoring.
    pub fn half_diagonal(&self) -> f32 {
        let size = self.scale_size as f32;
        0.5 * (2.0 * size * size).sqrt()
    }

    /// Maps an average pointwise distance to a score.
    ///
    /// A perfect match scores 1. The score is not clamped and goes negative
    /// once the distance exceeds [`Normalizer::half_diagonal`].
    pub fn score(&self, distance: f32) -> f32 {
        1.0 - distance / self.half_diagonal()
    }
}
