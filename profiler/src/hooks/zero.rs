use ndarray::ArrayViewD;

use crate::{CostModel, Layer, Result};

/// Prices layers with no meaningful numeric cost: identity, reshaping,
/// dropout at inference, max pooling.
pub struct ZeroOpHook;

impl CostModel for ZeroOpHook {
    fn count(
        &self,
        _layer: &Layer,
        _inputs: &[ArrayViewD<f32>],
        _outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        Ok(counters::zero_ops())
    }
}
