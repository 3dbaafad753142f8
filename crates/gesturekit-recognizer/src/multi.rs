//! Multi-example recognizer: any number of normalized paths per label.

use std::collections::BTreeMap;
use std::fmt::Debug;

use gesturekit_core::{Path, RecognizerError, Result};
use tracing::{debug, trace};

use crate::matching::{first_minimum, DistancePolicy, Match};
use crate::normalizer::Normalizer;

/// Nearest-neighbor classifier that accumulates examples per label.
///
/// Every call to [`MultiRecognizer::add_template`] appends another example;
/// duplicates are kept. A class can also be declared up front with
/// [`MultiRecognizer::declare_class`] before it has any examples.
#[derive(Debug, Clone)]
pub struct MultiRecognizer<const N: usize, K> {
    normalizer: Normalizer,
    templates: BTreeMap<K, Vec<Path<N>>>,
}

impl<const N: usize, K> MultiRecognizer<N, K>
where
    K: Ord + Clone + Debug,
{
    pub fn new(sample_size: usize, scale_size: u32) -> Result<Self> {
        Ok(Self::with_normalizer(Normalizer::new(
            sample_size,
            scale_size,
        )?))
    }

    pub fn with_normalizer(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            templates: BTreeMap::new(),
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn sample_size(&self) -> usize {
        self.normalizer.sample_size()
    }

    pub fn scale_size(&self) -> u32 {
        self.normalizer.scale_size()
    }

    /// Number of labels, including declared classes without examples.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Total number of stored examples across all labels.
    pub fn example_count(&self) -> usize {
        self.templates.values().map(Vec::len).sum()
    }

    pub fn labels(&self) -> impl Iterator<Item = &K> {
        self.templates.keys()
    }

    /// Normalized examples for `label`, in insertion order.
    pub fn examples(&self, label: &K) -> Option<&[Path<N>]> {
        self.templates.get(label).map(Vec::as_slice)
    }

    /// Registers `label` with no examples if it is not known yet.
    pub fn declare_class(&mut self, label: K) {
        self.templates.entry(label).or_default();
    }

    /// Normalizes `path` and appends it to the examples of `label`.
    pub fn add_template(&mut self, label: K, path: &Path<N>) -> Result<()> {
        let normalized = self.normalizer.normalize(path)?;
        let examples = self.templates.entry(label.clone()).or_default();
        examples.push(normalized);
        debug!(
            "Registered example {} for {:?} from {} raw points",
            examples.len(),
            label,
            path.len()
        );
        Ok(())
    }

    /// Drops every example of `label` together with the label itself.
    pub fn remove_class(&mut self, label: &K) -> Option<Vec<Path<N>>> {
        self.templates.remove(label)
    }

    pub fn clear(&mut self) {
        self.templates.clear();
    }

    /// Label owning the single closest example.
    pub fn recognize_min_distance(&self, path: &Path<N>) -> Result<Match<K>> {
        self.recognize_with(path, DistancePolicy::MinDistance)
    }

    /// Label whose examples are closest on average.
    pub fn recognize_min_avg_distance(&self, path: &Path<N>) -> Result<Match<K>> {
        self.recognize_with(path, DistancePolicy::MinAvgDistance)
    }

    /// Classifies `path` under `policy`; the first label in key order wins ties.
    pub fn recognize_with(&self, path: &Path<N>, policy: DistancePolicy) -> Result<Match<K>> {
        let candidates = self.class_distances(path, policy)?;
        let best = first_minimum(&candidates).ok_or(RecognizerError::NoTemplates)?;
        let (label, distance) = &candidates[best];
        let result = Match {
            label: (*label).clone(),
            distance: *distance,
            score: self.normalizer.score(*distance),
        };
        debug!("Recognized {} using {}", result, policy);
        Ok(result)
    }

    /// Every label that has examples, scored under `policy`, best first.
    ///
    /// At most `limit` matches are returned. Equal distances keep key order.
    pub fn rank(&self, path: &Path<N>, policy: DistancePolicy, limit: usize) -> Result<Vec<Match<K>>> {
        let mut candidates = self.class_distances(path, policy)?;
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
        Ok(candidates
            .into_iter()
            .take(limit)
            .map(|(label, distance)| Match {
                label: label.clone(),
                distance,
                score: self.normalizer.score(distance),
            })
            .collect())
    }

    /// Per-label distances in key order.
    ///
    /// Under [`DistancePolicy::MinDistance`] labels without examples are
    /// skipped; under [`DistancePolicy::MinAvgDistance`] they are an error
    /// since their mean is undefined.
    fn class_distances(&self, path: &Path<N>, policy: DistancePolicy) -> Result<Vec<(&K, f32)>> {
        if self.example_count() == 0 {
            return Err(RecognizerError::NoTemplates.into());
        }

        let query = self.normalizer.normalize(path)?;
        let mut candidates = Vec::with_capacity(self.templates.len());
        for (label, examples) in &self.templates {
            if examples.is_empty() {
                match policy {
                    DistancePolicy::MinDistance => continue,
                    DistancePolicy::MinAvgDistance => {
                        return Err(RecognizerError::EmptyTemplateClass {
                            label: format!("{:?}", label),
                        }
                        .into())
                    }
                }
            }

            let mut min = f32::INFINITY;
            let mut sum = 0.0f32;
            for example in examples {
                let distance = example.distance_to(&query)?;
                min = min.min(distance);
                sum += distance;
            }
            let distance = match policy {
                DistancePolicy::MinDistance => min,
                DistancePolicy::MinAvgDistance => sum / examples.len() as f32,
            };
            trace!(
                "{:?}: {} over {} examples = {}",
                label,
                policy,
                examples.len(),
                distance
            );
            candidates.push((label, distance));
        }
        Ok(candidates)
    }
}
