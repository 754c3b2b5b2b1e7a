use ndarray::ArrayViewD;

use crate::{CostModel, Layer, LayerConfig, ProfileError, Result};

/// Prices a softmax from the configured axis.
///
/// The feature count is the input's extent along the resolved axis; the
/// batch size is the remaining element count, however the leading dimensions
/// are grouped.
pub struct SoftmaxHook;

impl CostModel for SoftmaxHook {
    fn count(
        &self,
        layer: &Layer,
        inputs: &[ArrayViewD<f32>],
        _outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        let LayerConfig::Softmax(spec) = layer.config() else {
            return Err(ProfileError::ConfigMismatch { model: "softmax" });
        };
        let input = super::first_input("softmax", inputs)?;

        let ndim = input.ndim() as isize;
        let axis = if spec.axis < 0 { spec.axis + ndim } else { spec.axis };
        if axis < 0 || axis >= ndim {
            return Err(ProfileError::AxisOutOfBounds {
                axis: spec.axis,
                ndim: input.ndim(),
            });
        }

        let features = input.shape()[axis as usize];
        if features == 0 {
            return Ok(0.0);
        }
        let batch = input.len() / features;

        Ok(counters::softmax(batch, features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SoftmaxSpec;
    use ndarray::ArrayD;

    fn softmax_layer(axis: isize) -> Layer {
        Layer::new(LayerConfig::Softmax(SoftmaxSpec { axis }))
    }

    #[test]
    fn derives_batch_from_total_elements() {
        // 1000 elements, 10 features: batch 100, cost 100 * (10 + 9 + 10).
        let x = ArrayD::<f32>::zeros(vec![100, 10]);
        let ops = SoftmaxHook.count(&softmax_layer(1), &[x.view()], &[]).unwrap();
        assert_eq!(ops, 2900.0);
    }

    #[test]
    fn invariant_to_leading_dimension_grouping() {
        let flat = ArrayD::<f32>::zeros(vec![100, 10]);
        let grouped = ArrayD::<f32>::zeros(vec![4, 25, 10]);

        let a = SoftmaxHook.count(&softmax_layer(-1), &[flat.view()], &[]).unwrap();
        let b = SoftmaxHook.count(&softmax_layer(-1), &[grouped.view()], &[]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn negative_axis_resolves_from_the_back() {
        let x = ArrayD::<f32>::zeros(vec![2, 3, 5]);
        let back = SoftmaxHook.count(&softmax_layer(-1), &[x.view()], &[]).unwrap();
        let explicit = SoftmaxHook.count(&softmax_layer(2), &[x.view()], &[]).unwrap();
        assert_eq!(back, explicit);
    }

    #[test]
    fn out_of_bounds_axis_errors() {
        let x = ArrayD::<f32>::zeros(vec![2, 3]);
        assert!(SoftmaxHook.count(&softmax_layer(2), &[x.view()], &[]).is_err());
        assert!(SoftmaxHook.count(&softmax_layer(-3), &[x.view()], &[]).is_err());
    }

    #[test]
    fn empty_axis_counts_zero() {
        let x = ArrayD::<f32>::zeros(vec![4, 0]);
        assert_eq!(SoftmaxHook.count(&softmax_layer(1), &[x.view()], &[]).unwrap(), 0.0);
    }
}
