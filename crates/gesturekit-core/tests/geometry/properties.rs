use gesturekit_core::path::distance as path_distance;
use gesturekit_core::point::distance;
use gesturekit_core::{Path, Point};
use proptest::prelude::*;

fn point2() -> impl Strategy<Value = Point<2>> {
    (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new([x, y]))
}

fn stroke() -> impl Strategy<Value = Path<2>> {
    prop::collection::vec(point2(), 2..40).prop_map(Path::from_points)
}

proptest! {
    #[test]
    fn point_distance_is_a_metric(a in point2(), b in point2()) {
        let ab = distance(&a, &b);
        prop_assert!(ab >= 0.0);
        prop_assert_eq!(ab, distance(&b, &a));
        prop_assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn resample_always_yields_requested_count(path in stroke(), n in 2usize..300) {
        prop_assume!(path.length() > 1e-2);
        let resampled = path.resample(n).unwrap();
        prop_assert_eq!(resampled.len(), n);
        prop_assert_eq!(resampled[0], path[0]);
        prop_assert_eq!(resampled[n - 1], path[path.len() - 1]);
    }

    #[test]
    fn translate_centroid_lands_on_target(path in stroke(), target in point2()) {
        let moved = path.translate_centroid_to(&target).unwrap();
        let centroid = moved.centroid().unwrap();
        prop_assert!(distance(&centroid, &target) < 0.05);
    }

    #[test]
    fn path_distance_to_itself_is_zero(path in stroke()) {
        prop_assert_eq!(path_distance(&path, &path).unwrap(), 0.0);
    }
}
