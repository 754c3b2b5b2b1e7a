use ndarray::ArrayViewD;

use crate::{CostModel, Layer, LayerConfig, ProfileError, Result};

/// Prices a parallel filterbank encoder: one 1-D convolution per channel
/// plus the cost of stacking the per-channel results.
pub struct FilterbankEncodeHook;

impl CostModel for FilterbankEncodeHook {
    fn count(
        &self,
        layer: &Layer,
        inputs: &[ArrayViewD<f32>],
        outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        let LayerConfig::FilterbankEncoder(spec) = layer.config() else {
            return Err(ProfileError::ConfigMismatch { model: "filterbank encoder" });
        };
        let input = super::first_input("filterbank encoder", inputs)?;
        let output = super::first_output("filterbank encoder", outputs)?;

        let kernel_size: usize = spec.kernel.iter().product();
        let channels = channel_dim(input);

        Ok(counters::filterbank_encode(kernel_size, output.len(), channels))
    }
}

/// Prices a parallel filterbank decoder: the same per-channel convolution,
/// sized by the multi-channel input, without a stacking term.
pub struct FilterbankDecodeHook;

impl CostModel for FilterbankDecodeHook {
    fn count(
        &self,
        layer: &Layer,
        inputs: &[ArrayViewD<f32>],
        _outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        let LayerConfig::FilterbankDecoder(spec) = layer.config() else {
            return Err(ProfileError::ConfigMismatch { model: "filterbank decoder" });
        };
        let input = super::first_input("filterbank decoder", inputs)?;

        let kernel_size: usize = spec.kernel.iter().product();
        let channels = channel_dim(input);

        Ok(counters::filterbank_decode(kernel_size, input.len(), channels))
    }
}

fn channel_dim(tensor: &ArrayViewD<f32>) -> usize {
    tensor.shape().get(1).copied().unwrap_or(0)
}
