use std::collections::HashMap;

use log::warn;
use ndarray::ArrayViewD;

use crate::{Layer, OpKind, Result, hooks};

/// A cost model prices one operator kind from its configuration and the
/// shapes observed during a forward pass.
///
/// Implementations read dimension sizes and static configuration only, never
/// tensor contents, so the estimate depends on the architecture and not on
/// data values.
pub trait CostModel {
    /// Counts the operations one invocation of the layer performs.
    ///
    /// # Arguments
    /// * `layer` - The traversed layer.
    /// * `inputs` - The captured input tensors, in call order.
    /// * `outputs` - The already-computed outputs; the first one is the
    ///   primary result for layers that return several.
    ///
    /// # Returns
    /// The operation count, or an error when the invocation does not carry
    /// what the formula needs.
    fn count(
        &self,
        layer: &Layer,
        inputs: &[ArrayViewD<f32>],
        outputs: &[ArrayViewD<f32>],
    ) -> Result<f64>;
}

/// The operator-kind to cost-model table.
///
/// Built once, read-only afterwards. The external traversal mechanism calls
/// [`Registry::apply`] once per layer per forward pass; callbacks for
/// distinct layers never interleave, so no synchronization is needed.
pub struct Registry {
    models: HashMap<OpKind, Box<dyn CostModel>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
        }
    }

    /// Creates a registry with every supported kind bound to its default
    /// cost model.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(OpKind::Conv, Box::new(hooks::ConvHook));
        registry.register(OpKind::FilterbankEncoder, Box::new(hooks::FilterbankEncodeHook));
        registry.register(OpKind::FilterbankDecoder, Box::new(hooks::FilterbankDecodeHook));
        registry.register(OpKind::BatchNorm, Box::new(hooks::NormHook));
        registry.register(OpKind::LayerNorm, Box::new(hooks::NormHook));
        registry.register(OpKind::GroupNorm, Box::new(hooks::NormHook));
        registry.register(OpKind::InstanceNorm, Box::new(hooks::NormHook));
        registry.register(OpKind::Relu, Box::new(hooks::ReluHook));
        registry.register(OpKind::PRelu, Box::new(hooks::PReluHook));
        registry.register(OpKind::Sigmoid, Box::new(hooks::SigmoidHook));
        registry.register(OpKind::Tanh, Box::new(hooks::TanhHook));
        registry.register(OpKind::Softmax, Box::new(hooks::SoftmaxHook));
        registry.register(OpKind::AvgPool, Box::new(hooks::AvgPoolHook));
        registry.register(OpKind::AdaptiveAvgPool, Box::new(hooks::AdaptiveAvgPoolHook));
        registry.register(OpKind::Upsample, Box::new(hooks::UpsampleHook));
        registry.register(OpKind::Linear, Box::new(hooks::LinearHook));
        registry.register(OpKind::LinearAttention, Box::new(hooks::LinearAttentionHook));
        registry.register(OpKind::MultiheadAttention, Box::new(hooks::MultiheadAttentionHook));

        // Layers with no counted arithmetic at inference time.
        registry.register(OpKind::MaxPool, Box::new(hooks::ZeroOpHook));
        registry.register(OpKind::Dropout, Box::new(hooks::ZeroOpHook));
        registry.register(OpKind::Identity, Box::new(hooks::ZeroOpHook));
        registry.register(OpKind::Flatten, Box::new(hooks::ZeroOpHook));

        registry
    }

    /// Binds `kind` to `model`, replacing any previous binding.
    pub fn register(&mut self, kind: OpKind, model: Box<dyn CostModel>) {
        self.models.insert(kind, model);
    }

    /// Prices one layer invocation.
    ///
    /// Overwrites the layer's parameter total (it is static per call, not
    /// cumulative) and adds the counted operations into its running
    /// operation total. An unmapped kind or a malformed invocation degrades
    /// to zero cost with a warning; the traversal is never aborted.
    ///
    /// # Arguments
    /// * `layer` - The traversed layer.
    /// * `inputs` - The captured input tensors.
    /// * `outputs` - The layer's already-computed output tensors.
    pub fn apply(&self, layer: &mut Layer, inputs: &[ArrayViewD<f32>], outputs: &[ArrayViewD<f32>]) {
        let total_params = counters::parameters(layer.params().iter().map(|p| p.len()));
        layer.stats_mut().total_params = total_params;

        let kind = layer.kind();
        let Some(model) = self.models.get(&kind) else {
            warn!("no cost model registered for {kind}, counted as zero");
            return;
        };

        match model.count(layer, inputs, outputs) {
            Ok(ops) => layer.stats_mut().total_ops += ops,
            Err(err) => warn!("skipping {kind}: {err}"),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
