use gesturekit_core::{Error, RecognizerError};
use gesturekit_recognizer::{DistancePolicy, MultiRecognizer, Recognizer};

use super::shapes::*;

fn trained() -> MultiRecognizer<2, Shape> {
    let mut recognizer = MultiRecognizer::new(64, 100).unwrap();
    recognizer
        .add_template(Shape::Circle, &circle(0.0, 0.0, 50.0, 120, 0.0))
        .unwrap();
    recognizer.add_template(Shape::Square, &square()).unwrap();
    recognizer.add_template(Shape::Triangle, &triangle()).unwrap();
    recognizer.add_template(Shape::X, &x()).unwrap();
    recognizer
}

#[test]
fn test_circle_query_is_recognized() {
    let recognizer = trained();
    let query = circle(400.0, 250.0, 30.0, 47, 1.5);
    let result = recognizer.recognize_min_distance(&query).unwrap();
    assert_eq!(result.label, Shape::Circle);
    assert!(result.score > 0.9, "score {}", result.score);
}

#[test]
fn test_each_template_recognizes_itself() {
    let recognizer = trained();
    for (shape, path) in [
        (Shape::Square, square()),
        (Shape::Triangle, triangle()),
        (Shape::X, x()),
    ] {
        let result = recognizer.recognize_min_distance(&path).unwrap();
        assert_eq!(result.label, shape);
        assert!((result.score - 1.0).abs() < 1e-4);
    }
}

#[test]
fn test_close_circle_scores_higher_than_rough_square() {
    let recognizer = trained();
    let circle_match = recognizer
        .recognize_min_distance(&circle(-20.0, 80.0, 12.0, 64, 0.2))
        .unwrap();
    let square_match = recognizer.recognize_min_distance(&rough_square()).unwrap();

    assert_eq!(circle_match.label, Shape::Circle);
    assert_eq!(square_match.label, Shape::Square);
    assert!(circle_match.score > square_match.score);
    assert!((1.0 - circle_match.score) < (1.0 - square_match.score));
}

#[test]
fn test_policies_agree_with_one_example_per_label() {
    let recognizer = trained();
    let query = rough_square();
    let min = recognizer.recognize_min_distance(&query).unwrap();
    let avg = recognizer.recognize_min_avg_distance(&query).unwrap();
    assert_eq!(min.label, avg.label);
    assert_eq!(min.distance, avg.distance);

    let ranked_min = recognizer.rank(&query, DistancePolicy::MinDistance, 4).unwrap();
    let ranked_avg = recognizer.rank(&query, DistancePolicy::MinAvgDistance, 4).unwrap();
    assert_eq!(ranked_min, ranked_avg);
}

#[test]
fn test_extra_examples_refine_average() {
    let mut recognizer = trained();
    recognizer
        .add_template(Shape::Square, &rough_square())
        .unwrap();
    let result = recognizer.recognize_min_avg_distance(&square()).unwrap();
    assert_eq!(result.label, Shape::Square);
    assert!(result.score < 1.0);

    let result = recognizer.recognize_min_distance(&square()).unwrap();
    assert!((result.score - 1.0).abs() < 1e-4);
}

#[test]
fn test_single_template_recognizer_matches_multi() {
    let mut single = Recognizer::new(64, 100).unwrap();
    single
        .add_template(Shape::Circle, &circle(0.0, 0.0, 50.0, 120, 0.0))
        .unwrap();
    single.add_template(Shape::Square, &square()).unwrap();
    single.add_template(Shape::Triangle, &triangle()).unwrap();
    single.add_template(Shape::X, &x()).unwrap();

    let query = rough_square();
    let a = single.recognize(&query).unwrap();
    let b = trained().recognize_min_distance(&query).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_no_templates_is_an_error() {
    let recognizer: MultiRecognizer<2, Shape> = MultiRecognizer::new(64, 100).unwrap();
    let err = recognizer.recognize_min_distance(&square()).unwrap_err();
    assert_eq!(err, Error::Recognizer(RecognizerError::NoTemplates));
    assert!(err.is_empty_state());
}
