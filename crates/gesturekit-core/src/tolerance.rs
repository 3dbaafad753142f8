//! Tolerance-based floating point comparison.

/// Default comparison width, the `f32` machine epsilon.
pub const DEFAULT_EPSILON: f32 = f32::EPSILON;

/// Returns true when `a` and `b` differ by strictly less than `epsilon`.
pub fn almost_equals(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// [`almost_equals`] with [`DEFAULT_EPSILON`].
pub fn almost_equals_default(a: f32, b: f32) -> bool {
    almost_equals(a, b, DEFAULT_EPSILON)
}
