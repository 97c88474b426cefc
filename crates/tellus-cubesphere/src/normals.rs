//! Post-displacement normal recomputation.

use crate::Vertex;

/// Assign each triangle's geometric normal to its three vertices.
///
/// Vertices shared between triangles keep the normal of the last triangle
/// written, producing flat, faceted shading. Smoothing by averaging adjacent
/// triangle normals is a possible enhancement, not done here.
///
/// Degenerate (zero-area) triangles leave their vertices' normals untouched.
pub fn assign_flat_normals(vertices: &mut [Vertex], indices: &[u32]) {
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let pa = vertices[a].position;
        let pb = vertices[b].position;
        let pc = vertices[c].position;

        // Winding is clockwise seen from outside, so the outward normal is
        // (c − a) × (b − a).
        let n = (pc - pa).cross(pb - pa);
        if n.length_squared() == 0.0 {
            continue;
        }
        let n = n.normalize();

        vertices[a].normal = n;
        vertices[b].normal = n;
        vertices[c].normal = n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CubeFace, GeometryKind, build_face};
    use glam::{DVec2, DVec3};

    fn vertex(position: DVec3) -> Vertex {
        Vertex {
            position,
            normal: DVec3::ZERO,
            uv: DVec2::ZERO,
        }
    }

    #[test]
    fn test_single_triangle_gets_geometric_normal() {
        // Triangle in the y = 0 plane, wound clockwise seen from +Y.
        let mut vertices = vec![
            vertex(DVec3::new(0.0, 0.0, 0.0)),
            vertex(DVec3::new(0.0, 0.0, 1.0)),
            vertex(DVec3::new(1.0, 0.0, 0.0)),
        ];
        assign_flat_normals(&mut vertices, &[0, 1, 2]);
        for v in &vertices {
            assert!(
                (v.normal - DVec3::Y).length() < 1e-12,
                "Expected +Y normal, got {:?}",
                v.normal
            );
        }
    }

    #[test]
    fn test_degenerate_triangle_leaves_normals_untouched() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        let mut vertices = vec![vertex(p), vertex(p), vertex(p)];
        assign_flat_normals(&mut vertices, &[0, 1, 2]);
        for v in &vertices {
            assert_eq!(v.normal, DVec3::ZERO);
        }
    }

    #[test]
    fn test_flat_normals_point_outward_on_built_faces() {
        for face in CubeFace::ALL {
            let mut mesh = build_face(face, 4, 1.0, GeometryKind::Sphere).unwrap();
            let indices = mesh.indices.clone();
            assign_flat_normals(&mut mesh.vertices, &indices);
            for v in &mesh.vertices {
                assert!(
                    v.normal.dot(v.position) > 0.0,
                    "Flat normal points inward on {face:?}"
                );
                assert!((v.normal.length() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_shared_vertex_keeps_last_triangle_normal() {
        let mut mesh = build_face(CubeFace::Top, 2, 1.0, GeometryKind::Sphere).unwrap();
        let indices = mesh.indices.clone();
        assign_flat_normals(&mut mesh.vertices, &indices);

        // The final triangle's vertices must carry exactly its flat normal.
        let tri = &indices[indices.len() - 3..];
        let pa = mesh.vertices[tri[0] as usize].position;
        let pb = mesh.vertices[tri[1] as usize].position;
        let pc = mesh.vertices[tri[2] as usize].position;
        let expected = (pc - pa).cross(pb - pa).normalize();
        for &i in tri {
            assert!(
                (mesh.vertices[i as usize].normal - expected).length() < 1e-12,
                "Vertex {i} does not carry the last triangle's normal"
            );
        }
    }
}
