//! Multi-layer fractal noise evaluation.
//!
//! Combines samples from an injected [`CoherentNoise`] source across the
//! layers configured in a [`NoiseSettings`], producing a scalar displacement
//! at a 3D surface point or a height at a 2D coordinate.

use glam::{DVec2, DVec3};

use crate::{CoherentNoise, NoiseSettings, PerlinSource};

/// Accumulates layered noise samples per a [`NoiseSettings`] configuration.
///
/// Owns its noise source; construct one per pipeline with an explicit seed
/// and reuse it for every evaluation. Evaluation is a pure function of the
/// settings, the point, and the source's seed.
#[derive(Clone, Debug)]
pub struct FractalEvaluator<N = PerlinSource> {
    source: N,
}

impl FractalEvaluator<PerlinSource> {
    /// Evaluator over Perlin noise with the given seed.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self::new(PerlinSource::new(seed))
    }
}

impl<N: CoherentNoise> FractalEvaluator<N> {
    /// Wrap the given noise source.
    pub fn new(source: N) -> Self {
        Self { source }
    }

    /// The underlying noise source.
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Displacement at a 3D point.
    ///
    /// Layer `layer` (from 0, exclusive of `settings.layers`) samples at
    /// `position / scale · frequency · lacunarity^(layer+1)` and contributes
    /// `sample · amplitude · persistence^(layer+1)`. The first layer already
    /// carries one power of lacunarity and persistence. Returns 0 when
    /// `layers == 0`.
    pub fn evaluate_3d(&self, settings: &NoiseSettings, position: DVec3) -> f64 {
        debug_assert!(settings.scale > 0.0, "settings must be validated");
        let mut height = 0.0;
        for layer in 0..settings.layers {
            let power = layer as i32 + 1;
            let frequency = settings.frequency * settings.lacunarity.powi(power);
            let amplitude = settings.amplitude * settings.persistence.powi(power);
            let sample = position / settings.scale * frequency;
            height += self.source.sample_3d(sample.x, sample.y, sample.z) * amplitude;
        }
        height
    }

    /// Height at a flat 2D coordinate.
    ///
    /// Identical accumulation to [`evaluate_3d`], over the 2D noise field.
    /// The settings' `offset` translates the sample point before scaling.
    ///
    /// [`evaluate_3d`]: FractalEvaluator::evaluate_3d
    pub fn evaluate_2d(&self, settings: &NoiseSettings, x: f64, z: f64) -> f64 {
        debug_assert!(settings.scale > 0.0, "settings must be validated");
        let point = DVec2::new(x, z) + settings.offset;
        let mut height = 0.0;
        for layer in 0..settings.layers {
            let power = layer as i32 + 1;
            let frequency = settings.frequency * settings.lacunarity.powi(power);
            let amplitude = settings.amplitude * settings.persistence.powi(power);
            let sample = point / settings.scale * frequency;
            height += self.source.sample_2d(sample.x, sample.y) * amplitude;
        }
        height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PerlinSource;

    const EPSILON: f64 = 1e-12;

    fn settings() -> NoiseSettings {
        NoiseSettings {
            frequency: 1.0,
            amplitude: 0.1,
            lacunarity: 2.0,
            persistence: 0.5,
            scale: 1.0,
            layers: 1,
            offset: DVec2::ZERO,
        }
    }

    #[test]
    fn test_zero_layers_returns_zero() {
        let evaluator = FractalEvaluator::with_seed(42);
        let flat = NoiseSettings {
            layers: 0,
            ..settings()
        };
        assert_eq!(evaluator.evaluate_3d(&flat, DVec3::new(0.3, 0.7, -1.2)), 0.0);
        assert_eq!(evaluator.evaluate_2d(&flat, 5.0, -3.0), 0.0);
    }

    #[test]
    fn test_single_layer_matches_hand_computation() {
        let evaluator = FractalEvaluator::with_seed(42);
        let s = settings();
        let p = DVec3::new(0.25, 0.5, 0.75);

        // One layer: sample at p/scale · frequency · lacunarity¹,
        // weighted by amplitude · persistence¹.
        let source = PerlinSource::new(42);
        let coord = p / s.scale * (s.frequency * s.lacunarity);
        let expected = source.sample_3d(coord.x, coord.y, coord.z) * (s.amplitude * s.persistence);

        assert!((evaluator.evaluate_3d(&s, p) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_layers_accumulate_additively() {
        let evaluator = FractalEvaluator::with_seed(7);
        let p = DVec3::new(1.1, -0.4, 0.9);

        let mut by_hand = 0.0;
        for layer in 0..3u32 {
            let one = NoiseSettings {
                layers: layer + 1,
                ..settings()
            };
            let prev = NoiseSettings {
                layers: layer,
                ..settings()
            };
            by_hand += evaluator.evaluate_3d(&one, p) - evaluator.evaluate_3d(&prev, p);
        }
        let three = NoiseSettings {
            layers: 3,
            ..settings()
        };
        assert!((evaluator.evaluate_3d(&three, p) - by_hand).abs() < EPSILON);
    }

    #[test]
    fn test_zero_persistence_silences_all_layers() {
        let evaluator = FractalEvaluator::with_seed(42);
        let silent = NoiseSettings {
            persistence: 0.0,
            layers: 5,
            ..settings()
        };
        assert_eq!(evaluator.evaluate_3d(&silent, DVec3::new(0.2, 0.4, 0.6)), 0.0);
    }

    #[test]
    fn test_zero_lacunarity_is_flat_not_an_error() {
        let evaluator = FractalEvaluator::with_seed(42);
        let flat = NoiseSettings {
            lacunarity: 0.0,
            layers: 5,
            ..settings()
        };
        // Every layer samples at the origin; the field is constant.
        let a = evaluator.evaluate_3d(&flat, DVec3::new(0.31, 0.77, -0.21));
        let b = evaluator.evaluate_3d(&flat, DVec3::new(-5.0, 2.0, 9.0));
        assert!((a - b).abs() < EPSILON, "Expected a flat field: {a} vs {b}");
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let a = FractalEvaluator::with_seed(1234);
        let b = FractalEvaluator::with_seed(1234);
        let s = NoiseSettings {
            layers: 6,
            ..settings()
        };
        let p = DVec3::new(0.6, -1.3, 2.2);
        assert_eq!(a.evaluate_3d(&s, p), b.evaluate_3d(&s, p));
    }

    #[test]
    fn test_evaluate_3d_is_continuous() {
        let evaluator = FractalEvaluator::with_seed(42);
        let s = NoiseSettings {
            layers: 6,
            ..settings()
        };
        let p = DVec3::new(0.999_999, 0.5, 0.25);
        let mut prev_delta = f64::INFINITY;
        for exp in 2..8 {
            let eps = 10f64.powi(-exp);
            let delta = (evaluator.evaluate_3d(&s, p)
                - evaluator.evaluate_3d(&s, p + DVec3::splat(eps)))
            .abs();
            assert!(
                delta <= prev_delta + 1e-9,
                "Delta did not shrink as eps shrank: {delta} after {prev_delta}"
            );
            prev_delta = delta;
        }
        assert!(prev_delta < 1e-4, "Still discontinuous at eps=1e-7");
    }

    #[test]
    fn test_2d_offset_translates_the_sample_point() {
        let evaluator = FractalEvaluator::with_seed(9);
        let offset = DVec2::new(3.5, -1.25);
        let with_offset = NoiseSettings {
            offset,
            layers: 3,
            ..settings()
        };
        let without = NoiseSettings {
            layers: 3,
            ..settings()
        };
        let a = evaluator.evaluate_2d(&with_offset, 0.4, 0.9);
        let b = evaluator.evaluate_2d(&without, 0.4 + offset.x, 0.9 + offset.y);
        assert!((a - b).abs() < EPSILON);
    }
}
