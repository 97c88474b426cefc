//! Planet configuration and validation.

use serde::{Deserialize, Serialize};
use tellus_cubesphere::{CubeFace, FaceMeshError, GeometryKind};
use tellus_terrain::{NoiseSettings, SettingsError};

/// Which of the six already-built faces are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceSelector {
    /// All six faces.
    #[default]
    All,
    /// Exactly one face.
    Only(CubeFace),
}

impl FaceSelector {
    /// Whether this selector shows the given face.
    #[must_use]
    pub fn shows(self, face: CubeFace) -> bool {
        match self {
            FaceSelector::All => true,
            FaceSelector::Only(selected) => selected == face,
        }
    }
}

/// Errors rejecting a configuration before any face is replaced.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Radius must be positive; NaN also lands here.
    #[error("planet radius must be positive, got {0}")]
    InvalidRadius(f64),
    /// The face grid is undefined below one cell per edge.
    #[error("grid resolution must be at least 1, got {0}")]
    InvalidResolution(u32),
    /// A noise layer set carries a non-positive scale.
    #[error("noise layer {layer} has invalid scale {scale}")]
    InvalidNoiseScale {
        /// Position in the configured layer list.
        layer: usize,
        /// The offending scale value.
        scale: f64,
    },
}

impl From<FaceMeshError> for ConfigError {
    fn from(err: FaceMeshError) -> Self {
        match err {
            FaceMeshError::InvalidResolution(resolution) => {
                ConfigError::InvalidResolution(resolution)
            }
        }
    }
}

/// Everything that drives one full rebuild of the six face meshes.
///
/// The rebuild is the only mutator of face data; editing a config field does
/// nothing until the host hands the config to
/// [`crate::PlanetMeshPipeline::rebuild`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetConfig {
    /// Planet radius. Must be positive.
    pub radius: f64,
    /// Grid cells per face edge. Must be at least 1.
    pub resolution: u32,
    /// Cube or sphere projection.
    pub geometry: GeometryKind,
    /// Which faces are shown after the rebuild.
    pub visible_faces: FaceSelector,
    /// Noise layer sets, applied in order during displacement.
    pub noise_layers: Vec<NoiseSettings>,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            resolution: 30,
            geometry: GeometryKind::Sphere,
            visible_faces: FaceSelector::All,
            noise_layers: Vec::new(),
        }
    }
}

impl PlanetConfig {
    /// Validate every geometry-affecting parameter.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: non-positive radius,
    /// resolution below 1, or a noise layer whose scale is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if self.resolution < 1 {
            return Err(ConfigError::InvalidResolution(self.resolution));
        }
        for (layer, settings) in self.noise_layers.iter().enumerate() {
            if let Err(SettingsError::InvalidScale(scale)) = settings.validate() {
                return Err(ConfigError::InvalidNoiseScale { layer, scale });
            }
        }
        Ok(())
    }
}
