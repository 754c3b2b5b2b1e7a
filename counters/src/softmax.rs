/// Counts a softmax over an axis of length `features`, applied `batch` times.
///
/// Each application exponentiates every feature, sums them with
/// `features - 1` additions, then divides every feature by the sum. Batch
/// size and axis length enter separately because the per-element cost depends
/// on the axis length, not the raw element count.
///
/// # Arguments
/// * `batch` - Number of independent softmax applications.
/// * `features` - Length of the normalized axis.
///
/// # Returns
/// `batch * (features + (features - 1) + features)`.
pub fn softmax(batch: usize, features: usize) -> f64 {
    if features == 0 {
        return 0.0;
    }

    let total_exp = features;
    let total_add = features - 1;
    let total_div = features;
    (batch * (total_exp + total_add + total_div)) as f64
}
