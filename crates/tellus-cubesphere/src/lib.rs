//! Cube-sphere face geometry: the six cube faces, the grid-to-face fold,
//! face mesh construction, and normal recomputation.

mod cube_face;
mod face_mesh;
mod normals;
mod vertex;

pub use cube_face::CubeFace;
pub use face_mesh::{FaceMesh, FaceMeshError, GeometryKind, build_face};
pub use normals::assign_flat_normals;
pub use vertex::Vertex;
