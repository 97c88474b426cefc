//! Planet mesh rebuild pipeline: configuration, validation, six-face
//! construction, noise displacement, and visibility.

mod config;
mod pipeline;

pub use config::{ConfigError, FaceSelector, PlanetConfig};
pub use pipeline::{PlanetMeshPipeline, RebuildError, RebuildState};
