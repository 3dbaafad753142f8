//! Thread-safe handle around a [`MultiRecognizer`].
//!
//! Recognition only reads the template map, so any number of threads can
//! classify at once under the read lock. Registering a template takes the
//! write lock and waits for in-flight recognitions to finish.

use std::fmt::Debug;

use gesturekit_core::{thread_safe_rw, Path, Result, ThreadSafeRw};

use crate::matching::{DistancePolicy, Match};
use crate::multi::MultiRecognizer;

/// Cloneable, lock-protected recognizer shared across threads.
#[derive(Debug)]
pub struct SharedRecognizer<const N: usize, K> {
    inner: ThreadSafeRw<MultiRecognizer<N, K>>,
}

impl<const N: usize, K> Clone for SharedRecognizer<N, K> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<const N: usize, K> SharedRecognizer<N, K>
where
    K: Ord + Clone + Debug,
{
    pub fn new(recognizer: MultiRecognizer<N, K>) -> Self {
        Self {
            inner: thread_safe_rw(recognizer),
        }
    }

    pub fn add_template(&self, label: K, path: &Path<N>) -> Result<()> {
        self.inner.write().add_template(label, path)
    }

    pub fn recognize_with(&self, path: &Path<N>, policy: DistancePolicy) -> Result<Match<K>> {
        self.inner.read().recognize_with(path, policy)
    }

    pub fn recognize_min_distance(&self, path: &Path<N>) -> Result<Match<K>> {
        self.recognize_with(path, DistancePolicy::MinDistance)
    }

    pub fn recognize_min_avg_distance(&self, path: &Path<N>) -> Result<Match<K>> {
        self.recognize_with(path, DistancePolicy::MinAvgDistance)
    }

    pub fn example_count(&self) -> usize {
        self.inner.read().example_count()
    }

    /// Runs `f` with read access to the underlying recognizer.
    pub fn with_recognizer<R>(&self, f: impl FnOnce(&MultiRecognizer<N, K>) -> R) -> R {
        f(&self.inner.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesturekit_core::Point;
    use std::thread;

    fn stroke(offset: f32) -> Path<2> {
        vec![
            Point::new([0.0, 0.0]),
            Point::new([10.0, offset]),
            Point::new([10.0, 10.0]),
        ]
        .into()
    }

    #[test]
    fn test_concurrent_recognition() {
        let shared = SharedRecognizer::new(MultiRecognizer::new(32, 100).unwrap());
        shared.add_template("corner", &stroke(0.0)).unwrap();
        shared.add_template("slant", &stroke(8.0)).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || shared.recognize_min_distance(&stroke(0.5)).unwrap().label)
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "corner");
        }
    }

    #[test]
    fn test_clones_see_new_templates() {
        let shared = SharedRecognizer::new(MultiRecognizer::new(16, 100).unwrap());
        let writer = shared.clone();
        thread::spawn(move || writer.add_template(7u32, &stroke(0.0)).unwrap())
            .join()
            .unwrap();
        assert_eq!(shared.example_count(), 1);
        assert_eq!(shared.with_recognizer(|r| r.len()), 1);
    }
}
