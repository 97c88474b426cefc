//! The rebuild pipeline: six-face construction, layered displacement,
//! normal recomputation, and atomic publication.

use tracing::{debug, info};

use tellus_cubesphere::{CubeFace, FaceMesh, assign_flat_normals, build_face};
use tellus_terrain::{CoherentNoise, FractalEvaluator, PerlinSource};

use crate::{ConfigError, FaceSelector, PlanetConfig};

/// Where the pipeline is in its rebuild cycle.
///
/// `Building` is only observable from a reentrant trigger (for example a
/// change notification fired by a host while a rebuild is publishing);
/// such triggers are rejected rather than run on shared face data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RebuildState {
    /// No rebuild in progress; faces (if any) are consistent.
    #[default]
    Idle,
    /// A rebuild is executing.
    Building,
    /// The last rebuild was rejected; previous faces are still intact.
    Failed,
}

/// Errors from [`PlanetMeshPipeline::rebuild`].
#[derive(Debug, thiserror::Error)]
pub enum RebuildError {
    /// The configuration was rejected; no face was replaced.
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigError),
    /// A rebuild was triggered while one is already executing.
    #[error("a rebuild is already in progress")]
    RebuildInProgress,
}

/// Rebuilds the six face meshes of a planet from a [`PlanetConfig`].
///
/// A rebuild either fully replaces all six faces or leaves the previous six
/// untouched; stale faces are never visible alongside new parameters. With a
/// fixed seed, identical configs produce bit-identical vertex data.
pub struct PlanetMeshPipeline<N = PerlinSource> {
    evaluator: FractalEvaluator<N>,
    faces: Option<[FaceMesh; 6]>,
    visible: [bool; 6],
    state: RebuildState,
}

impl PlanetMeshPipeline<PerlinSource> {
    /// Pipeline over Perlin noise with the given seed.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self::new(FractalEvaluator::with_seed(seed))
    }
}

impl<N: CoherentNoise> PlanetMeshPipeline<N> {
    /// Pipeline over the given evaluator.
    pub fn new(evaluator: FractalEvaluator<N>) -> Self {
        Self {
            evaluator,
            faces: None,
            visible: [true; 6],
            state: RebuildState::Idle,
        }
    }

    /// Current rebuild state.
    #[must_use]
    pub fn state(&self) -> RebuildState {
        self.state
    }

    /// The six faces of the last successful rebuild, if any.
    #[must_use]
    pub fn faces(&self) -> Option<&[FaceMesh; 6]> {
        self.faces.as_ref()
    }

    /// Whether the given face is currently shown.
    #[must_use]
    pub fn is_face_visible(&self, face: CubeFace) -> bool {
        self.visible[face.index()]
    }

    /// Number of faces currently shown.
    #[must_use]
    pub fn visible_face_count(&self) -> usize {
        self.visible.iter().filter(|&&v| v).count()
    }

    /// Iterate over the built faces that are currently shown.
    pub fn visible_faces(&self) -> impl Iterator<Item = &FaceMesh> {
        self.faces
            .iter()
            .flat_map(|faces| faces.iter())
            .enumerate()
            .filter(|(i, _)| self.visible[*i])
            .map(|(_, mesh)| mesh)
    }

    /// Re-apply a visibility selector to the already-built faces.
    pub fn set_visibility(&mut self, selector: FaceSelector) {
        for face in CubeFace::ALL {
            self.visible[face.index()] = selector.shows(face);
        }
        debug!("face visibility set to {selector:?}");
    }

    /// Run one full rebuild.
    ///
    /// Validates the config, builds all six faces, applies every noise layer
    /// set in order along each vertex's radial direction, recomputes flat
    /// normals, then swaps the finished faces in and applies the configured
    /// visibility.
    ///
    /// # Errors
    ///
    /// [`RebuildError::RebuildInProgress`] on a reentrant trigger;
    /// [`RebuildError::InvalidConfiguration`] if validation or face
    /// construction rejects the config. On error the previous faces remain
    /// published and unchanged.
    pub fn rebuild(&mut self, config: &PlanetConfig) -> Result<&[FaceMesh; 6], RebuildError> {
        if self.state == RebuildState::Building {
            return Err(RebuildError::RebuildInProgress);
        }
        self.state = RebuildState::Building;

        match Self::build_planet(&self.evaluator, config) {
            Ok(faces) => {
                let total_vertices: usize = faces.iter().map(|f| f.vertex_count()).sum();
                let total_triangles: usize = faces.iter().map(|f| f.triangle_count()).sum();
                info!(
                    "planet rebuilt: {} vertices, {} triangles across 6 faces",
                    total_vertices, total_triangles
                );

                self.set_visibility(config.visible_faces);
                self.state = RebuildState::Idle;
                Ok(self.faces.insert(faces))
            }
            Err(err) => {
                self.state = RebuildState::Failed;
                Err(err)
            }
        }
    }

    fn build_planet(
        evaluator: &FractalEvaluator<N>,
        config: &PlanetConfig,
    ) -> Result<[FaceMesh; 6], RebuildError> {
        config.validate()?;

        let mut meshes = Vec::with_capacity(6);
        for face in CubeFace::ALL {
            let mesh = build_face(face, config.resolution, config.radius, config.geometry)
                .map_err(ConfigError::from)?;
            meshes.push(mesh);
        }

        if !config.noise_layers.is_empty() {
            for mesh in &mut meshes {
                for settings in &config.noise_layers {
                    for vertex in &mut mesh.vertices {
                        // Displace along the current radial direction, for
                        // cube geometry too. Later layer sets see the
                        // positions displaced by earlier ones.
                        let height = evaluator.evaluate_3d(settings, vertex.position);
                        vertex.position = vertex.position.normalize()
                            * (vertex.position.length() + height);
                    }
                }
                assign_flat_normals(&mut mesh.vertices, &mesh.indices);
            }
        }

        match <[FaceMesh; 6]>::try_from(meshes) {
            Ok(faces) => Ok(faces),
            Err(_) => unreachable!("exactly six faces are built"),
        }
    }
}
