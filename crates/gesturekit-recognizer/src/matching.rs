//! Recognition results and scoring policies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the distances to a label's examples collapse into one class distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistancePolicy {
    /// Distance to the closest single example
    #[default]
    MinDistance,
    /// Mean distance over all examples of the label
    MinAvgDistance,
}

impl fmt::Display for DistancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinDistance => write!(f, "min_distance"),
            Self::MinAvgDistance => write!(f, "min_avg_distance"),
        }
    }
}

impl FromStr for DistancePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "min_distance" | "min" | "nearest" => Ok(Self::MinDistance),
            "min_avg_distance" | "avg" | "average" => Ok(Self::MinAvgDistance),
            _ => Err(format!("Unknown distance policy: {}", s)),
        }
    }
}

/// A classified stroke: the winning label, its distance and score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match<K> {
    pub label: K,
    /// Average pointwise distance to the label under the active policy
    pub distance: f32,
    /// `1 - distance / half_diagonal`; 1 is a perfect match, not clamped
    pub score: f32,
}

impl<K: fmt::Debug> fmt::Display for Match<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({:.3})", self.label, self.score)
    }
}

/// Index of the first minimum; later equal distances do not replace it.
/// NaN distances never win.
pub(crate) fn first_minimum<K>(candidates: &[(K, f32)]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, (_, distance)) in candidates.iter().enumerate() {
        if distance.is_nan() {
            continue;
        }
        match best {
            Some((_, best_distance)) if *distance >= best_distance => {}
            _ => best = Some((index, *distance)),
        }
    }
    best.map(|(index, _)| index)
}
