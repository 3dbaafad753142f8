//! Fixed-dimension points.
//!
//! A [`Point`] holds exactly `N` single precision coordinates, where `N` is a
//! const generic. Points of different dimensionality are different types, so
//! mixed-arity comparisons are rejected at compile time.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};

use crate::error::GeometryError;

/// A point with `N` real-valued coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const N: usize> {
    coords: [f32; N],
}

impl<const N: usize> Point<N> {
    /// Creates a point from its coordinates.
    pub const fn new(coords: [f32; N]) -> Self {
        Self { coords }
    }

    /// The point with every coordinate at zero.
    pub const fn origin() -> Self {
        Self { coords: [0.0; N] }
    }

    /// Number of coordinates, always `N`.
    pub const fn dimensions(&self) -> usize {
        N
    }

    pub fn coords(&self) -> &[f32; N] {
        &self.coords
    }

    /// Bounds-checked coordinate read.
    pub fn get(&self, index: usize) -> Result<f32, GeometryError> {
        self.coords
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                dimensions: N,
            })
    }

    /// Bounds-checked coordinate write.
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), GeometryError> {
        let slot = self
            .coords
            .get_mut(index)
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                dimensions: N,
            })?;
        *slot = value;
        Ok(())
    }

    /// True when no coordinate is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point<N>) -> f32 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| {
                let diff = a - b;
                diff * diff
            })
            .sum::<f32>()
            .sqrt()
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &Point<N>, t: f32) -> Point<N> {
        let mut coords = self.coords;
        for (c, o) in coords.iter_mut().zip(other.coords.iter()) {
            *c += (o - *c) * t;
        }
        Point::new(coords)
    }
}

/// Euclidean distance between two points of the same dimensionality.
pub fn distance<const N: usize>(a: &Point<N>, b: &Point<N>) -> f32 {
    a.distance_to(b)
}

impl<const N: usize> Default for Point<N> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<const N: usize> From<[f32; N]> for Point<N> {
    fn from(coords: [f32; N]) -> Self {
        Self::new(coords)
    }
}

impl<const N: usize> Index<usize> for Point<N> {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.coords[index]
    }
}

impl<const N: usize> IndexMut<usize> for Point<N> {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.coords[index]
    }
}

impl<const N: usize> Add for Point<N> {
    type Output = Point<N>;

    fn add(mut self, rhs: Point<N>) -> Point<N> {
        for (c, r) in self.coords.iter_mut().zip(rhs.coords.iter()) {
            *c += r;
        }
        self
    }
}

impl<const N: usize> Sub for Point<N> {
    type Output = Point<N>;

    fn sub(mut self, rhs: Point<N>) -> Point<N> {
        for (c, r) in self.coords.iter_mut().zip(rhs.coords.iter()) {
            *c -= r;
        }
        self
    }
}

impl<const N: usize> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

// serde only derives fixed-size arrays up to 32 elements, so go through a sequence.
impl<const N: usize> Serialize for Point<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.coords.as_slice().serialize(serializer)
    }
}

impl<'de, const N: usize> Deserialize<'de> for Point<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<f32>::deserialize(deserializer)?;
        let len = values.len();
        let coords: [f32; N] = values
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &format!("{} coordinates", N).as_str()))?;
        Ok(Self::new(coords))
    }
}
