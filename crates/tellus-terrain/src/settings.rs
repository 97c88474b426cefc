//! Per-layer-set noise configuration.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Errors produced when validating [`NoiseSettings`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// Sample coordinates are divided by `scale`; zero or negative is undefined.
    #[error("noise scale must be positive, got {0}")]
    InvalidScale(f64),
}

/// Immutable configuration for one set of fractal noise layers.
///
/// Many of these can be attached to a planet as an ordered list; each is
/// evaluated independently and its displacement added to the surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
    /// Base frequency of the first layer, before the lacunarity power.
    pub frequency: f64,
    /// Base amplitude of the first layer, before the persistence power.
    pub amplitude: f64,
    /// Per-layer frequency multiplier. 0 flattens every layer to a constant.
    pub lacunarity: f64,
    /// Per-layer amplitude multiplier. 0 silences every layer.
    pub persistence: f64,
    /// Spatial scale divisor applied to sample positions. Must be positive.
    pub scale: f64,
    /// Number of layers (octaves) to accumulate. 0 yields no displacement.
    pub layers: u32,
    /// 2D sample offset, applied by [`crate::FractalEvaluator::evaluate_2d`].
    pub offset: DVec2,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            amplitude: 0.1,
            lacunarity: 2.0,
            persistence: 0.5,
            scale: 1.0,
            layers: 4,
            offset: DVec2::ZERO,
        }
    }
}

impl NoiseSettings {
    /// Check that these settings are usable by the evaluator.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidScale`] unless `scale > 0`. NaN fails.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.scale > 0.0) {
            return Err(SettingsError::InvalidScale(self.scale));
        }
        Ok(())
    }

    /// Theoretical maximum absolute displacement: the sum of every layer's
    /// amplitude, `Σ amplitude · persistence^(layer+1)`.
    #[must_use]
    pub fn max_amplitude(&self) -> f64 {
        (0..self.layers)
            .map(|layer| (self.amplitude * self.persistence.powi(layer as i32 + 1)).abs())
            .sum()
    }
}
