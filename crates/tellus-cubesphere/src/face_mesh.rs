//! Face mesh construction: flat grid → cube/sphere projection → fold.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::{CubeFace, Vertex};

/// Whether face grids stay on the cube surface or are projected to a sphere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    /// Grid points scaled onto the cube of half-extent `radius`.
    Cube,
    /// Grid points normalized onto the sphere of the given `radius`.
    #[default]
    Sphere,
}

/// Errors that can occur while building a face mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FaceMeshError {
    /// The grid is undefined below one cell per edge.
    #[error("grid resolution must be at least 1, got {0}")]
    InvalidResolution(u32),
}

/// One face of the cube-sphere: an ordered vertex grid plus triangle indices.
///
/// Exactly six of these exist together; a rebuild replaces all six as a unit.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceMesh {
    /// Which cube face this mesh covers.
    pub face: CubeFace,
    /// `(resolution + 1)²` vertices in grid order (`x` major, `z` minor).
    pub vertices: Vec<Vertex>,
    /// Triangle indices, three per triangle, consistent winding on all faces.
    pub indices: Vec<u32>,
}

impl FaceMesh {
    /// Number of vertices in this face.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles in this face.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Build the mesh for one cube face.
///
/// A `(resolution + 1)²` grid is laid out on the reference top face at
/// height 1 over `[-1, 1]²`, projected per [`GeometryKind`], scaled by
/// `radius`, then folded onto the target face. UVs are the per-face planar
/// grid coordinates `(x/resolution, z/resolution)`. Initial normals are the
/// radial directions; callers displacing the surface recompute them with
/// [`crate::assign_flat_normals`].
///
/// # Errors
///
/// Returns [`FaceMeshError::InvalidResolution`] if `resolution < 1`.
pub fn build_face(
    face: CubeFace,
    resolution: u32,
    radius: f64,
    geometry: GeometryKind,
) -> Result<FaceMesh, FaceMeshError> {
    if resolution < 1 {
        return Err(FaceMeshError::InvalidResolution(resolution));
    }

    let res = resolution as usize;
    let stride = res + 1;
    let inv_res = 1.0 / resolution as f64;

    let mut vertices = Vec::with_capacity(stride * stride);
    let mut indices = Vec::with_capacity(res * res * 6);

    for x in 0..=res {
        for z in 0..=res {
            // Each face of the unit cube sits 1 unit from the center and
            // spans 2 units, hence the [-1, 1] grid at height 1.
            let local = DVec3::new(
                2.0 * inv_res * x as f64 - 1.0,
                1.0,
                2.0 * inv_res * z as f64 - 1.0,
            );
            let uv = DVec2::new(x as f64 * inv_res, z as f64 * inv_res);

            let projected = match geometry {
                GeometryKind::Sphere => local.normalize() * radius,
                GeometryKind::Cube => local * radius,
            };
            let position = face.fold(projected);

            vertices.push(Vertex {
                position,
                normal: position.normalize(),
                uv,
            });

            if x > 0 && z > 0 {
                // Grid index is x * (resolution + 1) + z; the cell behind and
                // left of (x, z) becomes two triangles wound clockwise as
                // seen from outside the face.
                let i = |x: usize, z: usize| (x * stride + z) as u32;

                indices.push(i(x, z));
                indices.push(i(x - 1, z));
                indices.push(i(x - 1, z - 1));

                indices.push(i(x, z - 1));
                indices.push(i(x, z));
                indices.push(i(x - 1, z - 1));
            }
        }
    }

    Ok(FaceMesh {
        face,
        vertices,
        indices,
    })
}
