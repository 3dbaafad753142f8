//! Single-template recognizer: one normalized path per label.

use std::collections::BTreeMap;
use std::fmt::Debug;

use gesturekit_core::{Path, RecognizerError, Result};
use tracing::{debug, trace};

use crate::matching::{first_minimum, Match};
use crate::normalizer::Normalizer;

/// Nearest-neighbor classifier holding exactly one template per label.
///
/// Registering a label twice replaces its template. Labels are kept in key
/// order, which is also the tie-break order when two labels are equally
/// close to a query.
#[derive(Debug, Clone)]
pub struct Recognizer<const N: usize, K> {
    normalizer: Normalizer,
    templates: BTreeMap<K, Path<N>>,
}

impl<const N: usize, K> Recognizer<N, K>
where
    K: Ord + Clone + Debug,
{
    /// Creates an empty recognizer; both sizes are fixed for its lifetime.
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

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &K> {
        self.templates.keys()
    }

    /// The stored, already normalized template for `label`.
    pub fn template(&self, label: &K) -> Option<&Path<N>> {
        self.templates.get(label)
    }

    /// Normalizes `path` and stores it under `label`, replacing any previous template.
    pub fn add_template(&mut self, label: K, path: &Path<N>) -> Result<()> {
        let normalized = self.normalizer.normalize(path)?;
        debug!("Registered template {:?} from {} raw points", label, path.len());
        self.templates.insert(label, normalized);
        Ok(())
    }

    pub fn remove_template(&mut self, label: &K) -> Option<Path<N>> {
        self.templates.remove(label)
    }

    /// Classifies `path` as the label whose template is closest.
    pub fn recognize(&self, path: &Path<N>) -> Result<Match<K>> {
        if self.templates.is_empty() {
            return Err(RecognizerError::NoTemplates.into());
        }

        let query = self.normalizer.normalize(path)?;
        let mut candidates = Vec::with_capacity(self.templates.len());
        for (label, template) in &self.templates {
            let distance = template.distance_to(&query)?;
            trace!("{:?}: distance {}", label, distance);
            candidates.push((label, distance));
        }

        let best = first_minimum(&candidates).ok_or(RecognizerError::NoTemplates)?;
        let (label, distance) = candidates[best];
        let result = Match {
            label: label.clone(),
            distance,
            score: self.normalizer.score(distance),
        };
        debug!("Recognized {}", result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesturekit_core::{Error, Point};

    fn polyline(points: &[[f32; 2]]) -> Path<2> {
        points.iter().copied().map(Point::new).collect()
    }

    fn vee() -> Path<2> {
        polyline(&[[0.0, 0.0], [5.0, 10.0], [10.0, 0.0]])
    }

    fn caret() -> Path<2> {
        polyline(&[[0.0, 10.0], [5.0, 0.0], [10.0, 10.0]])
    }

    #[test]
    fn test_empty_recognizer_fails() {
        let recognizer: Recognizer<2, &str> = Recognizer::new(32, 100).unwrap();
        assert_eq!(
            recognizer.recognize(&vee()),
            Err(Error::Recognizer(RecognizerError::NoTemplates))
        );
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(Recognizer::<2, u8>::new(0, 100).is_err());
        assert!(Recognizer::<2, u8>::new(32, 0).is_err());
    }

    #[test]
    fn test_recognize_exact_template() {
        let mut recognizer = Recognizer::new(32, 100).unwrap();
        recognizer.add_template("vee", &vee()).unwrap();
        recognizer.add_template("caret", &caret()).unwrap();
        assert_eq!(recognizer.len(), 2);

        let result = recognizer.recognize(&vee()).unwrap();
        assert_eq!(result.label, "vee");
        assert!(result.distance.abs() < 1e-3);
        assert!((result.score - 1.0).abs() < 1e-4);

        let result = recognizer.recognize(&caret()).unwrap();
        assert_eq!(result.label, "caret");
    }

    #[test]
    fn test_add_template_overwrites() {
        let mut recognizer = Recognizer::new(32, 100).unwrap();
        recognizer.add_template(1u8, &vee()).unwrap();
        recognizer.add_template(1u8, &caret()).unwrap();
        assert_eq!(recognizer.len(), 1);

        let stored = recognizer.template(&1).unwrap();
        let expected = recognizer.normalizer().normalize(&caret()).unwrap();
        assert_eq!(stored, &expected);
    }

    #[test]
    fn test_tie_goes_to_first_label() {
        let mut recognizer = Recognizer::new(32, 100).unwrap();
        recognizer.add_template("b", &vee()).unwrap();
        recognizer.add_template("a", &vee()).unwrap();
        assert_eq!(recognizer.recognize(&vee()).unwrap().label, "a");
    }

    #[test]
    fn test_non_finite_strokes_are_rejected() {
        let mut recognizer = Recognizer::new(32, 100).unwrap();
        let overflowed = polyline(&[[0.0, 0.0], [f32::INFINITY, 5.0], [10.0, 10.0]]);
        assert!(recognizer.add_template("zzz", &overflowed).is_err());
        assert!(recognizer.is_empty());

        recognizer.add_template("vee", &vee()).unwrap();
        assert!(recognizer.recognize(&overflowed).unwrap_err().is_geometry_error());
        assert_eq!(recognizer.recognize(&vee()).unwrap().label, "vee");
    }

    #[test]
    fn test_invalid_query_and_template() {
        let mut recognizer = Recognizer::new(32, 100).unwrap();
        let dot = polyline(&[[1.0, 1.0]]);
        assert!(recognizer.add_template("dot", &dot).is_err());
        assert!(recognizer.is_empty());

        recognizer.add_template("vee", &vee()).unwrap();
        let err = recognizer.recognize(&dot).unwrap_err();
        assert!(err.is_geometry_error());
    }
}
