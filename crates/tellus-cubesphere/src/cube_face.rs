//! The six faces of a cube-sphere and the fold that maps the reference
//! ("top") face basis onto each of them.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// The six faces of the cube that forms the cube-sphere.
///
/// All face geometry is generated once on a reference basis with +Y as the
/// outward direction, then folded onto the target face by [`CubeFace::fold`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum CubeFace {
    /// Reference face, outward along +Y.
    Top = 0,
    /// Outward along −Y.
    Bottom = 1,
    /// Outward along +Z.
    Right = 2,
    /// Outward along −X.
    Left = 3,
    /// Outward along +X.
    Back = 4,
    /// Outward along −Z.
    Front = 5,
}

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Top,
        CubeFace::Bottom,
        CubeFace::Right,
        CubeFace::Left,
        CubeFace::Back,
        CubeFace::Front,
    ];

    /// Canonical index of this face, `0..6`, matching the order of [`ALL`].
    ///
    /// [`ALL`]: CubeFace::ALL
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Fold a vector from the reference top-face basis onto this face.
    ///
    /// Each entry is an axis permutation plus sign flip; all six are proper
    /// rotations, so triangle winding survives the fold unchanged. Applied
    /// uniformly to positions and normals.
    #[must_use]
    pub fn fold(self, v: DVec3) -> DVec3 {
        match self {
            CubeFace::Top => v,
            CubeFace::Bottom => DVec3::new(v.z, -v.y, v.x),
            CubeFace::Right => DVec3::new(v.z, v.x, v.y),
            CubeFace::Left => DVec3::new(-v.y, v.x, v.z),
            CubeFace::Back => DVec3::new(v.y, v.z, v.x),
            CubeFace::Front => DVec3::new(v.x, v.z, -v.y),
        }
    }

    /// Outward-pointing unit normal of this face: the fold of the reference
    /// face's +Y.
    #[must_use]
    pub fn normal(self) -> DVec3 {
        self.fold(DVec3::Y)
    }
}
