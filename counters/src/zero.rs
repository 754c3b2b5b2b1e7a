/// Cost of layers that perform no counted arithmetic, such as identity,
/// reshaping, dropout at inference or max pooling.
pub fn zero_ops() -> f64 {
    0.0
}
