//! Strokes as ordered point sequences.
//!
//! A [`Path`] is the raw material of recognition: callers append captured
//! samples with [`Path::add_point`], and the normalization steps
//! ([`Path::resample`], [`Path::scale`], [`Path::translate_centroid_to`])
//! each return a new path. The geometric configuration of a path (the
//! uniform scaling threshold and the comparison tolerance) is carried over to
//! every path derived from it.

use serde::{Deserialize, Serialize};
use std::ops::Index;
use tracing::trace;

use crate::error::GeometryError;
use crate::point::Point;
use crate::tolerance::{almost_equals, DEFAULT_EPSILON};

/// Default extent ratio below which [`Path::scale`] keeps the aspect ratio.
pub const DEFAULT_UNIFORM_SCALE_MIN_RATIO: f32 = 0.25;

/// Largest snapping tolerance accepted by configuration.
pub const MAX_TOLERANCE: f32 = 1e-3;

fn default_uniform_scale_min_ratio() -> f32 {
    DEFAULT_UNIFORM_SCALE_MIN_RATIO
}

fn default_tolerance() -> f32 {
    DEFAULT_EPSILON
}

/// One stroke: an ordered sequence of `N`-dimensional points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path<const N: usize> {
    points: Vec<Point<N>>,
    /// Smallest-to-largest extent ratio under which scaling stays uniform
    #[serde(default = "default_uniform_scale_min_ratio")]
    uniform_scale_min_ratio: f32,
    /// Width of the almost-equals test used while resampling
    #[serde(default = "default_tolerance")]
    tolerance: f32,
}

impl<const N: usize> Default for Path<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Path<N> {
    /// Creates an empty path with default configuration.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            uniform_scale_min_ratio: DEFAULT_UNIFORM_SCALE_MIN_RATIO,
            tolerance: DEFAULT_EPSILON,
        }
    }

    /// Creates a path from existing points with default configuration.
    pub fn from_points(points: Vec<Point<N>>) -> Self {
        Self {
            points,
            ..Self::new()
        }
    }

    /// Sets the extent ratio that switches [`Path::scale`] to uniform scaling.
    ///
    /// Meaningful values lie in `(0, 1)` and are not checked here; callers
    /// validate them (see `Config::validate` in `gesturekit-settings`). A ratio
    /// at or below 0 scales per dimension unless an extent is zero, and a ratio
    /// above 1 always scales uniformly.
    pub fn with_uniform_scale_min_ratio(mut self, ratio: f32) -> Self {
        self.uniform_scale_min_ratio = ratio;
        self
    }

    /// Sets the almost-equals width used by [`Path::resample`].
    ///
    /// Configuration caps it at [`MAX_TOLERANCE`]. Resampling additionally
    /// narrows it to below half the sample interval, so two targets never
    /// snap to the same vertex.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn uniform_scale_min_ratio(&self) -> f32 {
        self.uniform_scale_min_ratio
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Appends a sample to the end of the stroke.
    pub fn add_point(&mut self, point: Point<N>) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point<N>] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&Point<N>> {
        self.points.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point<N>> {
        self.points.iter()
    }

    /// True when every coordinate of every point is finite.
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(Point::is_finite)
    }

    /// Builds a path from `points` that keeps this path's configuration.
    fn derive(&self, points: Vec<Point<N>>) -> Self {
        Self {
            points,
            uniform_scale_min_ratio: self.uniform_scale_min_ratio,
            tolerance: self.tolerance,
        }
    }

    /// Total polyline length; zero for paths with fewer than two points.
    pub fn length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }

    /// Resamples the stroke to exactly `n` points evenly spaced by arc length.
    ///
    /// Target `k` sits at arc length `k * length / (n - 1)`. Each target is
    /// located on the raw polyline from a cumulative length table, so rounding
    /// does not build up from one target to the next. A target within
    /// `tolerance` of a raw vertex snaps to that vertex, and the last point is
    /// always the last raw sample.
    pub fn resample(&self, n: usize) -> Result<Path<N>, GeometryError> {
        if self.points.len() < 2 {
            return Err(GeometryError::TooFewPoints {
                operation: "resample",
                required: 2,
                actual: self.points.len(),
            });
        }
        if n <= 1 {
            return Err(GeometryError::InvalidSampleCount { requested: n });
        }

        let mut cumulative = Vec::with_capacity(self.points.len());
        let mut walked = 0.0f32;
        cumulative.push(walked);
        for pair in self.points.windows(2) {
            walked += pair[0].distance_to(&pair[1]);
            cumulative.push(walked);
        }

        if !walked.is_finite() {
            return Err(GeometryError::DegeneratePath {
                reason: format!("arc length {} is not finite", walked),
            });
        }

        let interval = walked / (n - 1) as f32;
        if !(interval > 0.0) {
            return Err(GeometryError::DegeneratePath {
                reason: format!("arc length {} cannot be split into {} intervals", walked, n - 1),
            });
        }

        let tolerance = self.tolerance.min(interval * 0.5);
        let last_segment = self.points.len() - 2;
        let mut resampled = Vec::with_capacity(n);
        resampled.push(self.points[0]);

        let mut segment = 0;
        for k in 1..n - 1 {
            let target = interval * k as f32;
            while segment < last_segment
                && cumulative[segment + 1] < target
                && !almost_equals(cumulative[segment + 1], target, tolerance)
            {
                segment += 1;
            }

            let start = cumulative[segment];
            let end = cumulative[segment + 1];
            let point = if almost_equals(end, target, tolerance) || end <= start {
                self.points[segment + 1]
            } else {
                let t = ((target - start) / (end - start)).clamp(0.0, 1.0);
                self.points[segment].lerp(&self.points[segment + 1], t)
            };
            resampled.push(point);
        }

        resampled.push(self.points[self.points.len() - 1]);
        trace!(
            "Resampled {} points to {} (interval {})",
            self.points.len(),
            resampled.len(),
            interval
        );
        Ok(self.derive(resampled))
    }

    /// Coordinate-wise mean of all points.
    pub fn centroid(&self) -> Result<Point<N>, GeometryError> {
        if self.points.is_empty() {
            return Err(GeometryError::EmptyPath {
                operation: "centroid",
            });
        }

        let mut sum = [0.0f32; N];
        for point in &self.points {
            for (s, c) in sum.iter_mut().zip(point.coords().iter()) {
                *s += c;
            }
        }
        let count = self.points.len() as f32;
        for s in sum.iter_mut() {
            *s /= count;
        }
        Ok(Point::new(sum))
    }

    /// Coordinate-wise `(min, max)` corners of the points.
    pub fn bounding_box(&self) -> Result<(Point<N>, Point<N>), GeometryError> {
        let first = self.points.first().ok_or(GeometryError::EmptyPath {
            operation: "bounding box",
        })?;

        let mut min = *first.coords();
        let mut max = *first.coords();
        for point in &self.points[1..] {
            for (d, &c) in point.coords().iter().enumerate() {
                min[d] = min[d].min(c);
                max[d] = max[d].max(c);
            }
        }
        Ok((Point::new(min), Point::new(max)))
    }

    /// Rescales the stroke so that its bounding box extents become `target_size`.
    ///
    /// Thin strokes, whose smallest extent is below `uniform_scale_min_ratio`
    /// of the largest, are divided by the largest extent in every dimension.
    /// All other strokes
    /// are scaled per dimension into a square (cube) of side `target_size`.
    pub fn scale(&self, target_size: f32) -> Result<Path<N>, GeometryError> {
        let (min, max) = self.bounding_box()?;
        let extents: [f32; N] = std::array::from_fn(|d| max[d] - min[d]);

        let max_length = extents.iter().copied().fold(0.0f32, f32::max);
        let min_length = extents.iter().copied().fold(f32::INFINITY, f32::min);
        if !(max_length > 0.0) {
            return Err(GeometryError::DegeneratePath {
                reason: "bounding box has zero extent in every dimension".to_string(),
            });
        }

        let uniform =
            min_length <= 0.0 || min_length / max_length < self.uniform_scale_min_ratio;
        trace!(
            "Scaling to {} ({}, extents {:?})",
            target_size,
            if uniform { "uniform" } else { "per-dimension" },
            extents
        );

        let scaled = self
            .points
            .iter()
            .map(|point| {
                let coords: [f32; N] = std::array::from_fn(|d| {
                    let extent = if uniform { max_length } else { extents[d] };
                    point[d] * target_size / extent
                });
                Point::new(coords)
            })
            .collect();
        Ok(self.derive(scaled))
    }

    /// Shifts every point so that the centroid lands on `target`.
    pub fn translate_centroid_to(&self, target: &Point<N>) -> Result<Path<N>, GeometryError> {
        let offset = *target - self.centroid()?;
        Ok(self.derive(self.points.iter().map(|p| *p + offset).collect()))
    }

    /// Mean index-aligned point distance to `other`, see [`distance`].
    pub fn distance_to(&self, other: &Path<N>) -> Result<f32, GeometryError> {
        distance(self, other)
    }
}

/// Average distance between points at equal indices of `a` and `b`.
///
/// Both paths must have the same, non-zero number of points. This is a
/// pointwise metric, so it is only meaningful between normalized paths.
pub fn distance<const N: usize>(a: &Path<N>, b: &Path<N>) -> Result<f32, GeometryError> {
    if a.len() != b.len() {
        return Err(GeometryError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(GeometryError::EmptyPath {
            operation: "distance",
        });
    }

    let total: f32 = a
        .iter()
        .zip(b.iter())
        .map(|(p, q)| p.distance_to(q))
        .sum();
    Ok(total / a.len() as f32)
}

impl<const N: usize> Index<usize> for Path<N> {
    type Output = Point<N>;

    fn index(&self, index: usize) -> &Point<N> {
        &self.points[index]
    }
}

impl<const N: usize> FromIterator<Point<N>> for Path<N> {
    fn from_iter<I: IntoIterator<Item = Point<N>>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

impl<const N: usize> From<Vec<Point<N>>> for Path<N> {
    fn from(points: Vec<Point<N>>) -> Self {
        Self::from_points(points)
    }
}

impl<'a, const N: usize> IntoIterator for &'a Path<N> {
    type Item = &'a Point<N>;
    type IntoIter = std::slice::Iter<'a, Point<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
