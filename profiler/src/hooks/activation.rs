use ndarray::ArrayViewD;

use crate::{CostModel, Layer, Result};

/// Prices a rectified-linear activation: one operation per input element,
/// counted in any mode.
pub struct ReluHook;

impl CostModel for ReluHook {
    fn count(
        &self,
        _layer: &Layer,
        inputs: &[ArrayViewD<f32>],
        _outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        let input = super::first_input("relu", inputs)?;
        Ok(counters::relu(input.len()))
    }
}

/// Prices the parametric rectified-linear variant. Like normalization, the
/// counted formula models the inference path, so a training-mode layer
/// contributes nothing.
pub struct PReluHook;

impl CostModel for PReluHook {
    fn count(
        &self,
        layer: &Layer,
        inputs: &[ArrayViewD<f32>],
        _outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        let input = super::first_input("prelu", inputs)?;
        if layer.training() {
            return Ok(0.0);
        }
        Ok(counters::relu(input.len()))
    }
}

pub struct SigmoidHook;

impl CostModel for SigmoidHook {
    fn count(
        &self,
        _layer: &Layer,
        inputs: &[ArrayViewD<f32>],
        _outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        let input = super::first_input("sigmoid", inputs)?;
        Ok(counters::sigmoid(input.len()))
    }
}

pub struct TanhHook;

impl CostModel for TanhHook {
    fn count(
        &self,
        _layer: &Layer,
        inputs: &[ArrayViewD<f32>],
        _outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        let input = super::first_input("tanh", inputs)?;
        Ok(counters::tanh(input.len()))
    }
}
