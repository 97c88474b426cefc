//! Mesh vertex attributes.

use glam::{DVec2, DVec3};

/// A single mesh vertex.
///
/// `position` is authoritative; `normal` is derived from the geometry and
/// recomputed after displacement, never edited independently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// Position in planet-local space.
    pub position: DVec3,
    /// Outward surface normal (unit length).
    pub normal: DVec3,
    /// Per-face planar texture coordinate in `[0, 1]²`.
    pub uv: DVec2,
}
