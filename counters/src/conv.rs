/// Counts the operations of one grouped N-dimensional convolution.
///
/// Every output element accumulates over `in_channels / groups` input
/// channels times the kernel's spatial extent, plus the bias addition when
/// present.
///
/// # Arguments
/// * `bias_ops` - Operations the bias adds per output element (0 or 1).
/// * `kernel_size` - Product of the kernel's spatial dimensions.
/// * `output_size` - Element count of the output tensor.
/// * `in_channels` - Input channel count.
/// * `groups` - Convolution group count.
///
/// # Returns
/// `output_size * (in_channels / groups * kernel_size + bias_ops)`.
pub fn conv(
    bias_ops: usize,
    kernel_size: usize,
    output_size: usize,
    in_channels: usize,
    groups: usize,
) -> f64 {
    if groups == 0 {
        return 0.0;
    }

    let kernel_ops = in_channels as f64 / groups as f64 * kernel_size as f64;
    output_size as f64 * (kernel_ops + bias_ops as f64)
}

/// Counts a convolution whose channel accounting is already folded into the
/// kernel element count.
///
/// # Arguments
/// * `bias_size` - Element count of the bias tensor, 0 when absent.
/// * `kernel_size` - Element count of the full weight tensor.
/// * `output_size` - Output element count excluding the channel dimension.
///
/// # Returns
/// `output_size * (kernel_size + bias_size)`.
pub fn conv_folded(bias_size: usize, kernel_size: usize, output_size: usize) -> f64 {
    output_size as f64 * (kernel_size + bias_size) as f64
}
