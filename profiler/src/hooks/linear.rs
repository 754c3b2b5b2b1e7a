use ndarray::ArrayViewD;

use crate::{CostModel, Layer, LayerConfig, ProfileError, Result};

/// Prices a dense layer: the configured input feature count against the
/// output element count. The bias addition follows the formula's documented
/// omission.
pub struct LinearHook;

impl CostModel for LinearHook {
    fn count(
        &self,
        layer: &Layer,
        _inputs: &[ArrayViewD<f32>],
        outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        let LayerConfig::Linear(spec) = layer.config() else {
            return Err(ProfileError::ConfigMismatch { model: "linear" });
        };
        let output = super::first_output("linear", outputs)?;

        Ok(counters::linear(spec.in_features, output.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinearSpec;
    use ndarray::ArrayD;

    #[test]
    fn in_features_times_output_elements() {
        let layer = Layer::new(LayerConfig::Linear(LinearSpec { in_features: 128 }));
        let y = ArrayD::<f32>::zeros(vec![4, 10]);

        assert_eq!(LinearHook.count(&layer, &[], &[y.view()]).unwrap(), 5120.0);
    }
}
