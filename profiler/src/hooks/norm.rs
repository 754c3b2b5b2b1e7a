use ndarray::ArrayViewD;

use crate::{CostModel, Layer, Result};

/// Prices batch, layer, group and instance normalization uniformly.
///
/// The counted formula models the inference-time affine-normalize path, so a
/// training-mode layer contributes nothing.
pub struct NormHook;

impl CostModel for NormHook {
    fn count(
        &self,
        layer: &Layer,
        inputs: &[ArrayViewD<f32>],
        _outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        let input = super::first_input("norm", inputs)?;
        if layer.training() {
            return Ok(0.0);
        }
        Ok(counters::norm(input.len()))
    }
}
