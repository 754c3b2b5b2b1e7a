use ndarray::ArrayViewD;

use crate::{CostModel, Layer, LayerConfig, ProfileError, Result};

/// Prices a linear-attention layer from the three leading inputs taken as
/// query, key and value.
pub struct LinearAttentionHook;

impl CostModel for LinearAttentionHook {
    fn count(
        &self,
        _layer: &Layer,
        inputs: &[ArrayViewD<f32>],
        _outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        let [q, k, v] = query_key_value("linear attention", inputs)?;
        let v_dim = v.shape().last().copied().unwrap_or(0);

        Ok(counters::linear_attention(q.len(), k.len(), v_dim))
    }
}

/// Prices a standard multi-head attention layer.
///
/// The three leading inputs are query, key and value; the first output is
/// the attended result. The configured layout flag decides which query
/// dimensions play the batch and sequence roles.
pub struct MultiheadAttentionHook;

impl CostModel for MultiheadAttentionHook {
    fn count(
        &self,
        layer: &Layer,
        inputs: &[ArrayViewD<f32>],
        outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        let LayerConfig::MultiheadAttention(spec) = layer.config() else {
            return Err(ProfileError::ConfigMismatch { model: "multihead attention" });
        };
        let [q, k, v] = query_key_value("multihead attention", inputs)?;
        let output = super::first_output("multihead attention", outputs)?;

        let q_dim = q.shape().last().copied().unwrap_or(0);
        let k_dim = k.shape().last().copied().unwrap_or(0);
        let v_dim = v.shape().last().copied().unwrap_or(0);

        let (batch, seq) = if spec.batch_first {
            (dim(q, 0), dim(q, 1))
        } else {
            (dim(q, 1), dim(q, 0))
        };

        Ok(counters::scaled_dot_attention(
            (q.len(), q_dim),
            (k.len(), k_dim),
            (v.len(), v_dim),
            spec.num_heads,
            batch,
            seq,
            output.len(),
        ))
    }
}

fn query_key_value<'a, 'v>(
    model: &'static str,
    inputs: &'a [ArrayViewD<'v, f32>],
) -> Result<[&'a ArrayViewD<'v, f32>; 3]> {
    match inputs {
        [q, k, v, ..] => Ok([q, k, v]),
        _ => Err(ProfileError::MissingInput {
            model,
            expected: 3,
            got: inputs.len(),
        }),
    }
}

fn dim(tensor: &ArrayViewD<f32>, axis: usize) -> usize {
    tensor.shape().get(axis).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttentionSpec;
    use ndarray::ArrayD;

    const SEQ: usize = 4;
    const BATCH: usize = 2;
    const EMBED: usize = 8;
    const HEADS: usize = 2;

    #[test]
    fn linear_attention_reads_raw_sizes() {
        let layer = Layer::new(LayerConfig::LinearAttention);
        let q = ArrayD::<f32>::zeros(vec![SEQ, BATCH, EMBED]);
        let k = ArrayD::<f32>::zeros(vec![SEQ, BATCH, EMBED]);
        let v = ArrayD::<f32>::zeros(vec![SEQ, BATCH, EMBED]);

        let ops = LinearAttentionHook
            .count(&layer, &[q.view(), k.view(), v.view()], &[])
            .unwrap();
        assert_eq!(ops, counters::linear_attention(64, 64, EMBED));
    }

    #[test]
    fn sequence_first_layout_decomposition() {
        let layer = Layer::new(LayerConfig::MultiheadAttention(AttentionSpec::new(HEADS)));
        let q = ArrayD::<f32>::zeros(vec![SEQ, BATCH, EMBED]);
        let k = ArrayD::<f32>::zeros(vec![SEQ, BATCH, EMBED]);
        let v = ArrayD::<f32>::zeros(vec![SEQ, BATCH, EMBED]);
        let y = ArrayD::<f32>::zeros(vec![SEQ, BATCH, EMBED]);

        let ops = MultiheadAttentionHook
            .count(&layer, &[q.view(), k.view(), v.view()], &[y.view()])
            .unwrap();
        let expected = counters::scaled_dot_attention(
            (64, EMBED),
            (64, EMBED),
            (64, EMBED),
            HEADS,
            BATCH,
            SEQ,
            64,
        );
        assert_eq!(ops, expected);
    }

    #[test]
    fn batch_first_layout_swaps_the_roles() {
        let layer = Layer::new(LayerConfig::MultiheadAttention(
            AttentionSpec::new(HEADS).with_batch_first(),
        ));
        let q = ArrayD::<f32>::zeros(vec![BATCH, SEQ, EMBED]);
        let k = ArrayD::<f32>::zeros(vec![BATCH, SEQ, EMBED]);
        let v = ArrayD::<f32>::zeros(vec![BATCH, SEQ, EMBED]);
        let y = ArrayD::<f32>::zeros(vec![BATCH, SEQ, EMBED]);

        let ops = MultiheadAttentionHook
            .count(&layer, &[q.view(), k.view(), v.view()], &[y.view()])
            .unwrap();
        let expected = counters::scaled_dot_attention(
            (64, EMBED),
            (64, EMBED),
            (64, EMBED),
            HEADS,
            BATCH,
            SEQ,
            64,
        );
        assert_eq!(ops, expected);
    }

    #[test]
    fn both_layouts_agree_on_equivalent_tensors() {
        let seq_first = Layer::new(LayerConfig::MultiheadAttention(AttentionSpec::new(HEADS)));
        let batch_first = Layer::new(LayerConfig::MultiheadAttention(
            AttentionSpec::new(HEADS).with_batch_first(),
        ));

        let sf = ArrayD::<f32>::zeros(vec![SEQ, BATCH, EMBED]);
        let bf = ArrayD::<f32>::zeros(vec![BATCH, SEQ, EMBED]);

        let a = MultiheadAttentionHook
            .count(&seq_first, &[sf.view(), sf.view(), sf.view()], &[sf.view()])
            .unwrap();
        let b = MultiheadAttentionHook
            .count(&batch_first, &[bf.view(), bf.view(), bf.view()], &[bf.view()])
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fewer_than_three_inputs_errors() {
        let layer = Layer::new(LayerConfig::LinearAttention);
        let q = ArrayD::<f32>::zeros(vec![SEQ, BATCH, EMBED]);

        assert!(LinearAttentionHook
            .count(&layer, &[q.view(), q.view()], &[])
            .is_err());
    }
}
