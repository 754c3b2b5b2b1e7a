use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

/// Static configuration of a grouped N-dimensional convolution.
#[derive(Debug, Clone)]
pub struct ConvSpec {
    /// Input channel count.
    pub in_channels: usize,
    /// Convolution group count; `in_channels` groups make it depthwise.
    pub groups: usize,
    /// Whether the convolution adds a bias.
    pub bias: bool,
}

/// Filter geometry of a parallel filterbank coder.
#[derive(Debug, Clone)]
pub struct FilterbankSpec {
    /// Spatial dimensions of one filter.
    pub kernel: Vec<usize>,
}

/// Static configuration of a softmax layer.
#[derive(Debug, Clone)]
pub struct SoftmaxSpec {
    /// Axis the softmax normalizes over; negative values resolve from the
    /// back as in the host frameworks.
    pub axis: isize,
}

/// Static configuration of an upsampling layer.
#[derive(Debug, Clone)]
pub struct UpsampleSpec {
    /// Interpolation mode string as configured on the layer.
    pub mode: String,
}

/// Static configuration of a dense layer.
#[derive(Debug, Clone)]
pub struct LinearSpec {
    /// Input feature count.
    pub in_features: usize,
}

/// Static configuration of a multi-head attention layer.
#[derive(Debug, Clone)]
pub struct AttentionSpec {
    /// Attention head count.
    pub num_heads: usize,
    /// Whether tensors are laid out batch-first. Implementations that do not
    /// expose the flag are sequence-first, so that is the default.
    pub batch_first: bool,
}

impl AttentionSpec {
    /// Creates a sequence-first `AttentionSpec`.
    pub fn new(num_heads: usize) -> Self {
        Self {
            num_heads,
            batch_first: false,
        }
    }

    /// Switches the layout to batch-first.
    pub fn with_batch_first(mut self) -> Self {
        self.batch_first = true;
        self
    }
}

/// Per-kind static configuration of a layer.
#[derive(Debug, Clone)]
pub enum LayerConfig {
    Conv(ConvSpec),
    FilterbankEncoder(FilterbankSpec),
    FilterbankDecoder(FilterbankSpec),
    BatchNorm,
    LayerNorm,
    GroupNorm,
    InstanceNorm,
    Relu,
    PRelu,
    Sigmoid,
    Tanh,
    Softmax(SoftmaxSpec),
    AvgPool,
    AdaptiveAvgPool,
    MaxPool,
    Upsample(UpsampleSpec),
    Linear(LinearSpec),
    LinearAttention,
    MultiheadAttention(AttentionSpec),
    Dropout,
    Identity,
    Flatten,
}

impl LayerConfig {
    /// Returns the operator kind this configuration belongs to.
    pub fn kind(&self) -> OpKind {
        match self {
            LayerConfig::Conv(_) => OpKind::Conv,
            LayerConfig::FilterbankEncoder(_) => OpKind::FilterbankEncoder,
            LayerConfig::FilterbankDecoder(_) => OpKind::FilterbankDecoder,
            LayerConfig::BatchNorm => OpKind::BatchNorm,
            LayerConfig::LayerNorm => OpKind::LayerNorm,
            LayerConfig::GroupNorm => OpKind::GroupNorm,
            LayerConfig::InstanceNorm => OpKind::InstanceNorm,
            LayerConfig::Relu => OpKind::Relu,
            LayerConfig::PRelu => OpKind::PRelu,
            LayerConfig::Sigmoid => OpKind::Sigmoid,
            LayerConfig::Tanh => OpKind::Tanh,
            LayerConfig::Softmax(_) => OpKind::Softmax,
            LayerConfig::AvgPool => OpKind::AvgPool,
            LayerConfig::AdaptiveAvgPool => OpKind::AdaptiveAvgPool,
            LayerConfig::MaxPool => OpKind::MaxPool,
            LayerConfig::Upsample(_) => OpKind::Upsample,
            LayerConfig::Linear(_) => OpKind::Linear,
            LayerConfig::LinearAttention => OpKind::LinearAttention,
            LayerConfig::MultiheadAttention(_) => OpKind::MultiheadAttention,
            LayerConfig::Dropout => OpKind::Dropout,
            LayerConfig::Identity => OpKind::Identity,
            LayerConfig::Flatten => OpKind::Flatten,
        }
    }
}

/// The category of computation a layer performs, independent of its specific
/// configuration. Keys the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Conv,
    FilterbankEncoder,
    FilterbankDecoder,
    BatchNorm,
    LayerNorm,
    GroupNorm,
    InstanceNorm,
    Relu,
    PRelu,
    Sigmoid,
    Tanh,
    Softmax,
    AvgPool,
    AdaptiveAvgPool,
    MaxPool,
    Upsample,
    Linear,
    LinearAttention,
    MultiheadAttention,
    Dropout,
    Identity,
    Flatten,
}

impl OpKind {
    /// Returns a human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Conv => "conv",
            OpKind::FilterbankEncoder => "filterbank_encoder",
            OpKind::FilterbankDecoder => "filterbank_decoder",
            OpKind::BatchNorm => "batch_norm",
            OpKind::LayerNorm => "layer_norm",
            OpKind::GroupNorm => "group_norm",
            OpKind::InstanceNorm => "instance_norm",
            OpKind::Relu => "relu",
            OpKind::PRelu => "prelu",
            OpKind::Sigmoid => "sigmoid",
            OpKind::Tanh => "tanh",
            OpKind::Softmax => "softmax",
            OpKind::AvgPool => "avgpool",
            OpKind::AdaptiveAvgPool => "adaptive_avgpool",
            OpKind::MaxPool => "maxpool",
            OpKind::Upsample => "upsample",
            OpKind::Linear => "linear",
            OpKind::LinearAttention => "linear_attention",
            OpKind::MultiheadAttention => "multihead_attention",
            OpKind::Dropout => "dropout",
            OpKind::Identity => "identity",
            OpKind::Flatten => "flatten",
        }
    }
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Running totals accumulated for one layer over a forward pass.
///
/// `total_ops` grows by one update per registry invocation; `total_params` is
/// static per call and gets overwritten instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerStats {
    /// Estimated multiply-accumulate operations for one forward evaluation.
    pub total_ops: f64,
    /// Parameter count of the layer.
    pub total_params: f64,
}

/// One operator occurrence in a network, together with the statistics the
/// profiler accumulates for it.
///
/// A `Layer` owns only what cost estimation needs: the kind-specific
/// configuration, the parameter tensors as zero-filled shape carriers, the
/// training flag and the two accumulators. It does not compute anything.
pub struct Layer {
    config: LayerConfig,
    params: Vec<ArrayD<f32>>,
    training: bool,
    stats: LayerStats,
}

impl Layer {
    /// Creates a new evaluation-mode `Layer` with no parameter tensors.
    ///
    /// # Arguments
    /// * `config` - The layer's kind-specific configuration.
    ///
    /// # Returns
    /// A new `Layer` instance with zeroed accumulators.
    pub fn new(config: LayerConfig) -> Self {
        Self {
            config,
            params: Vec::new(),
            training: false,
            stats: LayerStats::default(),
        }
    }

    /// Attaches the layer's parameter tensors.
    ///
    /// Only their shapes matter; contents are never read.
    pub fn with_params(mut self, params: Vec<ArrayD<f32>>) -> Self {
        self.params = params;
        self
    }

    /// Marks the layer as training or evaluating.
    pub fn with_training(mut self, training: bool) -> Self {
        self.training = training;
        self
    }

    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    pub fn params(&self) -> &[ArrayD<f32>] {
        &self.params
    }

    pub fn training(&self) -> bool {
        self.training
    }

    /// Returns the operator kind of this layer.
    pub fn kind(&self) -> OpKind {
        self.config.kind()
    }

    /// Returns the accumulated statistics.
    pub fn stats(&self) -> LayerStats {
        self.stats
    }

    /// Zeroes both accumulators; call between forward passes.
    pub fn reset(&mut self) {
        self.stats = LayerStats::default();
    }

    pub(crate) fn stats_mut(&mut self) -> &mut LayerStats {
        &mut self.stats
    }
}
