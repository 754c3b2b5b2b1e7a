/// Counts a dense projection: one multiply per input feature per output
/// element.
///
/// The bias addition is deliberately left out; it is negligible next to the
/// multiply-accumulate term.
///
/// # Arguments
/// * `in_features` - Input feature count.
/// * `output_elements` - Element count of the output tensor.
///
/// # Returns
/// `in_features * output_elements`.
pub fn linear(in_features: usize, output_elements: usize) -> f64 {
    in_features as f64 * output_elements as f64
}
