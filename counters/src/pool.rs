/// Counts an average pooling: one averaging operation per output element.
pub fn avgpool(output_size: usize) -> f64 {
    output_size as f64
}

/// Infers the kernel volume of an adaptive pooling from its spatial shapes.
///
/// Adaptive pooling does not configure a kernel; it is implicit in the ratio
/// of input to output extent. Each spatial dimension contributes the floor of
/// `input / output`, and the volume is the product across dimensions. An
/// output larger than the input along some axis floors to a zero factor; the
/// shapes are otherwise trusted.
///
/// # Arguments
/// * `input_spatial` - Input spatial dimensions (batch and channel excluded).
/// * `output_spatial` - Output spatial dimensions.
///
/// # Returns
/// The inferred kernel volume.
pub fn adaptive_kernel(input_spatial: &[usize], output_spatial: &[usize]) -> f64 {
    input_spatial
        .iter()
        .zip(output_spatial)
        .map(|(&input, &output)| {
            if output == 0 {
                0.0
            } else {
                (input as f64 / output as f64).floor()
            }
        })
        .product()
}

/// Counts an adaptive average pooling: the inferred kernel's additions plus
/// one divide, per output element.
pub fn adaptive_avgpool(kernel_volume: f64, output_size: usize) -> f64 {
    (kernel_volume + 1.0) * output_size as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_op_per_output_element() {
        assert_eq!(avgpool(100), 100.0);
        assert_eq!(avgpool(0), 0.0);
    }

    #[test]
    fn equal_shapes_infer_unit_kernel() {
        assert_eq!(adaptive_kernel(&[7, 7], &[7, 7]), 1.0);
        assert_eq!(adaptive_kernel(&[32], &[32]), 1.0);
    }

    #[test]
    fn kernel_volume_is_the_product_of_floored_ratios() {
        assert_eq!(adaptive_kernel(&[8, 8], &[2, 2]), 16.0);
        assert_eq!(adaptive_kernel(&[7, 9], &[2, 2]), 12.0);
    }

    #[test]
    fn oversized_output_floors_to_zero_volume() {
        assert_eq!(adaptive_kernel(&[4, 4], &[8, 8]), 0.0);
        assert_eq!(adaptive_kernel(&[4], &[0]), 0.0);
    }

    #[test]
    fn adaptive_cost_adds_one_divide_per_window() {
        assert_eq!(adaptive_avgpool(16.0, 49), 17.0 * 49.0);
        assert_eq!(adaptive_avgpool(1.0, 100), 200.0);
        assert_eq!(adaptive_avgpool(16.0, 0), 0.0);
    }
}
