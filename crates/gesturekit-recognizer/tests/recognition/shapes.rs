//! Hand-authored unistroke shapes in screen coordinates.

use gesturekit_core::{Path, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    X,
}

pub fn polyline(points: &[[f32; 2]]) -> Path<2> {
    points.iter().copied().map(Point::new).collect()
}

/// Counter-clockwise loop starting at the rightmost point.
pub fn circle(cx: f32, cy: f32, radius: f32, samples: usize, wobble: f32) -> Path<2> {
    (0..=samples)
        .map(|i| {
            let angle = i as f32 / samples as f32 * std::f32::consts::TAU;
            let r = radius + wobble * (5.0 * angle).sin();
            Point::new([cx + r * angle.cos(), cy + r * angle.sin()])
        })
        .collect()
}

pub fn square() -> Path<2> {
    polyline(&[
        [0.0, 0.0],
        [100.0, 0.0],
        [100.0, 100.0],
        [0.0, 100.0],
        [0.0, 0.0],
    ])
}

pub fn triangle() -> Path<2> {
    polyline(&[[50.0, 0.0], [100.0, 100.0], [0.0, 100.0], [50.0, 0.0]])
}

pub fn x() -> Path<2> {
    polyline(&[[0.0, 0.0], [100.0, 100.0], [100.0, 0.0], [0.0, 100.0]])
}

/// A sloppy square: skewed corners, same drawing order.
pub fn rough_square() -> Path<2> {
    polyline(&[
        [210.0, 305.0],
        [318.0, 298.0],
        [311.0, 410.0],
        [204.0, 396.0],
        [212.0, 300.0],
    ])
}
