pub mod hooks;

mod error;
mod layer;
mod registry;

pub use error::{ProfileError, Result};
pub use layer::{
    AttentionSpec, ConvSpec, FilterbankSpec, Layer, LayerConfig, LayerStats, LinearSpec, OpKind,
    SoftmaxSpec, UpsampleSpec,
};
pub use registry::{CostModel, Registry};
