use ndarray::ArrayViewD;

use crate::{CostModel, Layer, Result};

/// Prices an average pooling: one averaging operation per output element.
pub struct AvgPoolHook;

impl CostModel for AvgPoolHook {
    fn count(
        &self,
        _layer: &Layer,
        _inputs: &[ArrayViewD<f32>],
        outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        let output = super::first_output("avgpool", outputs)?;
        Ok(counters::avgpool(output.len()))
    }
}

/// Prices an adaptive average pooling.
///
/// The kernel is not configured on the layer; it is inferred from the ratio
/// of input to output spatial extent (all dimensions after batch and
/// channels).
pub struct AdaptiveAvgPoolHook;

impl CostModel for AdaptiveAvgPoolHook {
    fn count(
        &self,
        _layer: &Layer,
        inputs: &[ArrayViewD<f32>],
        outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        let input = super::first_input("adaptive avgpool", inputs)?;
        let output = super::first_output("adaptive avgpool", outputs)?;

        let input_spatial = input.shape().get(2..).unwrap_or(&[]);
        let output_spatial = output.shape().get(2..).unwrap_or(&[]);
        let kernel = counters::adaptive_kernel(input_spatial, output_spatial);

        Ok(counters::adaptive_avgpool(kernel, output.len()))
    }
}
