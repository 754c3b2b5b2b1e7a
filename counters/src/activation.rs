/// Counts a rectified-linear activation: one compare-select per element.
pub fn relu(numel: usize) -> f64 {
    numel as f64
}

/// Counts a sigmoid: negate, exponentiate and divide per element.
pub fn sigmoid(numel: usize) -> f64 {
    3.0 * numel as f64
}

/// Counts a hyperbolic tangent, five operations per element.
pub fn tanh(numel: usize) -> f64 {
    5.0 * numel as f64
}
