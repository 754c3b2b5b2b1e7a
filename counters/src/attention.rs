use crate::dense::linear;
use crate::softmax::softmax;

/// Counts a linear-attention layer from its raw tensor sizes.
///
/// The kernelized feature maps and the key-value aggregation are priced
/// directly from element counts; the generic dense formula does not apply
/// because no full similarity matrix is formed.
///
/// # Arguments
/// * `q_numel` - Element count of the query tensor.
/// * `k_numel` - Element count of the key tensor.
/// * `v_dim` - Feature dimension of the value tensor.
pub fn linear_attention(q_numel: usize, k_numel: usize, v_dim: usize) -> f64 {
    let aggregate = (k_numel * v_dim) as f64;
    let feature_maps = (k_numel + q_numel * 2) as f64;
    let output = (q_numel * v_dim * 2) as f64;

    aggregate + feature_maps + output
}

/// Counts a standard scaled-dot-product attention layer.
///
/// Prices the three input projections, the query-key similarity (a doubled
/// projection cost), and the softmax plus value-weighted sum. The caller
/// supplies the batch/sequence decomposition because it depends on the
/// layer's tensor layout.
///
/// # Arguments
/// * `q`, `k`, `v` - `(element count, feature dimension)` of each input.
/// * `heads` - Attention head count.
/// * `batch` - Batch extent of the query under the layer's layout.
/// * `seq` - Sequence extent of the query under the layer's layout.
/// * `output_size` - Element count of the attended output.
pub fn scaled_dot_attention(
    q: (usize, usize),
    k: (usize, usize),
    v: (usize, usize),
    heads: usize,
    batch: usize,
    seq: usize,
    output_size: usize,
) -> f64 {
    let projections = linear(q.0, q.1) + linear(k.0, k.1) + linear(v.0, v.1);
    let similarity = linear(q.0, q.1) * 2.0;
    let attend = softmax(batch * heads, seq) + (output_size * seq) as f64;

    projections + similarity + attend
}
