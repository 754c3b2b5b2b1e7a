mod activation;
mod attention;
mod conv;
mod dense;
mod filterbank;
mod norm;
mod params;
mod pool;
mod softmax;
mod upsample;
mod zero;

pub use activation::{relu, sigmoid, tanh};
pub use attention::{linear_attention, scaled_dot_attention};
pub use conv::{conv, conv_folded};
pub use dense::linear;
pub use filterbank::{filterbank_decode, filterbank_encode};
pub use norm::norm;
pub use params::parameters;
pub use pool::{adaptive_avgpool, adaptive_kernel, avgpool};
pub use softmax::softmax;
pub use upsample::{upsample, Interpolation};
pub use zero::zero_ops;
