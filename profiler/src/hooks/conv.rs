use ndarray::ArrayViewD;

use crate::{CostModel, Layer, LayerConfig, ProfileError, Result};

/// Prices a grouped N-dimensional convolution.
///
/// Reads the kernel's spatial dimensions from the weight tensor (everything
/// after the two channel dimensions), bias presence and channel accounting
/// from the configuration, and the element count of the primary output.
pub struct ConvHook;

impl CostModel for ConvHook {
    fn count(
        &self,
        layer: &Layer,
        _inputs: &[ArrayViewD<f32>],
        outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        let LayerConfig::Conv(spec) = layer.config() else {
            return Err(ProfileError::ConfigMismatch { model: "conv" });
        };
        let weight = layer
            .params()
            .first()
            .ok_or(ProfileError::MissingParams { model: "conv" })?;
        let output = super::first_output("conv", outputs)?;

        let kernel_size = spatial_numel(weight.shape());
        let bias_ops = spec.bias as usize;

        Ok(counters::conv(
            bias_ops,
            kernel_size,
            output.len(),
            spec.in_channels,
            spec.groups,
        ))
    }
}

/// Alternate convolution pricing that folds channel accounting into the full
/// weight element count: output batch-spatial positions times kernel plus
/// bias elements. Register it over [`ConvHook`] for dispatch contexts that
/// want this accounting.
pub struct FoldedConvHook;

impl CostModel for FoldedConvHook {
    fn count(
        &self,
        layer: &Layer,
        _inputs: &[ArrayViewD<f32>],
        outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        let LayerConfig::Conv(spec) = layer.config() else {
            return Err(ProfileError::ConfigMismatch { model: "folded conv" });
        };
        let weight = layer
            .params()
            .first()
            .ok_or(ProfileError::MissingParams { model: "folded conv" })?;
        let output = super::first_output("folded conv", outputs)?;

        let bias_size = if spec.bias {
            layer.params().get(1).map(|b| b.len()).unwrap_or(0)
        } else {
            0
        };

        // Batch and spatial extent, channel dimension excluded.
        let shape = output.shape();
        let batch = shape.first().copied().unwrap_or(1);
        let spatial = spatial_numel(shape);

        Ok(counters::conv_folded(bias_size, weight.len(), batch * spatial))
    }
}

/// Product of the dimensions after the leading two (out/in channels for a
/// weight, batch/channels for an activation). A lower-rank shape counts as a
/// single position.
fn spatial_numel(shape: &[usize]) -> usize {
    shape.get(2..).map(|dims| dims.iter().product()).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConvSpec;
    use ndarray::ArrayD;

    fn layer(bias: bool) -> Layer {
        let mut params = vec![ArrayD::zeros(vec![16, 3, 3, 3])];
        if bias {
            params.push(ArrayD::zeros(vec![16]));
        }
        Layer::new(LayerConfig::Conv(ConvSpec {
            in_channels: 3,
            groups: 1,
            bias,
        }))
        .with_params(params)
    }

    #[test]
    fn conv_reads_kernel_from_weight_shape() {
        let layer = layer(false);
        let y = ArrayD::<f32>::zeros(vec![16]);

        let ops = ConvHook.count(&layer, &[], &[y.view()]).unwrap();
        assert_eq!(ops, 432.0);
    }

    #[test]
    fn conv_bias_adds_one_op_per_output() {
        let layer = layer(true);
        let y = ArrayD::<f32>::zeros(vec![16]);

        let ops = ConvHook.count(&layer, &[], &[y.view()]).unwrap();
        assert_eq!(ops, 448.0);
    }

    #[test]
    fn conv_without_weight_errors() {
        let layer = Layer::new(LayerConfig::Conv(ConvSpec {
            in_channels: 3,
            groups: 1,
            bias: false,
        }));
        let y = ArrayD::<f32>::zeros(vec![16]);

        assert!(ConvHook.count(&layer, &[], &[y.view()]).is_err());
    }

    #[test]
    fn folded_conv_prices_batch_and_spatial_positions() {
        let layer = layer(true);
        // 2 batches, 16 channels, 4x4 spatial: 32 counted positions.
        let y = ArrayD::<f32>::zeros(vec![2, 16, 4, 4]);

        let ops = FoldedConvHook.count(&layer, &[], &[y.view()]).unwrap();
        // weight 16*3*3*3 = 432 elements, bias 16.
        assert_eq!(ops, (2 * 16 * (432 + 16)) as f64);
    }

    #[test]
    fn mismatched_config_is_rejected() {
        let layer = Layer::new(LayerConfig::Relu);
        let y = ArrayD::<f32>::zeros(vec![16]);

        assert!(ConvHook.count(&layer, &[], &[y.view()]).is_err());
        assert!(FoldedConvHook.count(&layer, &[], &[y.view()]).is_err());
    }
}
