//! One cost-model implementation per operator family.
//!
//! Each hook extracts the shape and configuration values its formula needs
//! from the live layer and the captured tensors, then defers the arithmetic
//! to `counters`.

mod activation;
mod attention;
mod conv;
mod filterbank;
mod linear;
mod norm;
mod pool;
mod softmax;
mod upsample;
mod zero;

pub use activation::{PReluHook, ReluHook, SigmoidHook, TanhHook};
pub use attention::{LinearAttentionHook, MultiheadAttentionHook};
pub use conv::{ConvHook, FoldedConvHook};
pub use filterbank::{FilterbankDecodeHook, FilterbankEncodeHook};
pub use linear::LinearHook;
pub use norm::NormHook;
pub use pool::{AdaptiveAvgPoolHook, AvgPoolHook};
pub use softmax::SoftmaxHook;
pub use upsample::UpsampleHook;
pub use zero::ZeroOpHook;

use ndarray::ArrayViewD;

use crate::{ProfileError, Result};

/// Yields the first captured input; auxiliary inputs are ignored by every
/// hook that calls this.
fn first_input<'a, 'v>(
    model: &'static str,
    inputs: &'a [ArrayViewD<'v, f32>],
) -> Result<&'a ArrayViewD<'v, f32>> {
    inputs.first().ok_or(ProfileError::MissingInput {
        model,
        expected: 1,
        got: 0,
    })
}

/// Yields the layer's primary output tensor.
fn first_output<'a, 'v>(
    model: &'static str,
    outputs: &'a [ArrayViewD<'v, f32>],
) -> Result<&'a ArrayViewD<'v, f32>> {
    outputs.first().ok_or(ProfileError::MissingOutput { model })
}
