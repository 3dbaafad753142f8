use gesturekit_core::{GeometryError, Path, Point};

fn circle(samples: usize, radius: f32, cx: f32, cy: f32) -> Path<2> {
    (0..=samples)
        .map(|i| {
            let angle = i as f32 / samples as f32 * std::f32::consts::TAU;
            Point::new([cx + radius * angle.cos(), cy + radius * angle.sin()])
        })
        .collect()
}

fn normalize(path: &Path<2>) -> Path<2> {
    path.resample(64)
        .and_then(|p| p.scale(100.0))
        .and_then(|p| p.translate_centroid_to(&Point::origin()))
        .unwrap()
}

#[test]
fn test_normalized_path_has_fixed_shape() {
    let normalized = normalize(&circle(200, 3.0, 40.0, -7.0));
    assert_eq!(normalized.len(), 64);

    let centroid = normalized.centroid().unwrap();
    assert!(centroid[0].abs() < 1e-3 && centroid[1].abs() < 1e-3);

    let (min, max) = normalized.bounding_box().unwrap();
    assert!((max[0] - min[0] - 100.0).abs() < 0.5);
    assert!((max[1] - min[1] - 100.0).abs() < 0.5);
}

#[test]
fn test_independent_normalization_is_identical() {
    let raw = circle(90, 12.0, 5.0, 5.0);
    let a = normalize(&raw);
    let b = normalize(&raw.clone());
    assert_eq!(a.distance_to(&b), Ok(0.0));
}

#[test]
fn test_normalization_removes_position_and_size() {
    let small = normalize(&circle(150, 1.0, 0.0, 0.0));
    let large = normalize(&circle(150, 50.0, 300.0, 200.0));
    assert!(small.distance_to(&large).unwrap() < 0.5);
}

#[test]
fn test_normalization_removes_sampling_density() {
    let sparse = normalize(&circle(40, 10.0, 0.0, 0.0));
    let dense = normalize(&circle(400, 10.0, 0.0, 0.0));
    assert!(sparse.distance_to(&dense).unwrap() < 2.0);
}

#[test]
fn test_unnormalized_paths_report_mismatch() {
    let a = circle(10, 1.0, 0.0, 0.0);
    let b = circle(20, 1.0, 0.0, 0.0);
    assert!(matches!(
        a.distance_to(&b),
        Err(GeometryError::LengthMismatch { left: 11, right: 21 })
    ));
}
