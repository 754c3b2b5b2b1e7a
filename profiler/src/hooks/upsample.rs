use counters::Interpolation;
use log::warn;
use ndarray::ArrayViewD;

use crate::{CostModel, Layer, LayerConfig, ProfileError, Result};

/// Prices an upsampling layer from its configured interpolation mode.
///
/// A mode without a cost model is counted as zero with a warning so that
/// unknown cheap operators never abort estimation.
pub struct UpsampleHook;

impl CostModel for UpsampleHook {
    fn count(
        &self,
        layer: &Layer,
        _inputs: &[ArrayViewD<f32>],
        outputs: &[ArrayViewD<f32>],
    ) -> Result<f64> {
        let LayerConfig::Upsample(spec) = layer.config() else {
            return Err(ProfileError::ConfigMismatch { model: "upsample" });
        };
        let output = super::first_output("upsample", outputs)?;

        let Some(mode) = Interpolation::parse(&spec.mode) else {
            warn!("upsample mode {:?} is not implemented yet, take it as a zero op", spec.mode);
            return Ok(counters::zero_ops());
        };

        Ok(counters::upsample(mode, output.len()))
    }
}
