//! Wavefront OBJ export of the visible planet faces.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tellus_cubesphere::FaceMesh;

/// Write the given face meshes as one OBJ object per face.
///
/// Emits `v`/`vt`/`vn` records per vertex and `f` records with matching
/// position/uv/normal indices (OBJ indices are 1-based and shared across
/// objects, so each face's records start at a running offset).
pub fn write_obj<'a, W, I>(out: &mut W, faces: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a FaceMesh>,
{
    let mut offset: usize = 1;
    for mesh in faces {
        writeln!(out, "o {:?}", mesh.face)?;
        for v in &mesh.vertices {
            writeln!(out, "v {} {} {}", v.position.x, v.position.y, v.position.z)?;
        }
        for v in &mesh.vertices {
            writeln!(out, "vt {} {}", v.uv.x, v.uv.y)?;
        }
        for v in &mesh.vertices {
            writeln!(out, "vn {} {} {}", v.normal.x, v.normal.y, v.normal.z)?;
        }
        for tri in mesh.indices.chunks_exact(3) {
            let (a, b, c) = (
                tri[0] as usize + offset,
                tri[1] as usize + offset,
                tri[2] as usize + offset,
            );
            writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
        }
        offset += mesh.vertices.len();
    }
    Ok(())
}

/// Write the meshes to a file at `path`.
pub fn write_obj_file<'a, I>(path: &Path, faces: I) -> io::Result<()>
where
    I: IntoIterator<Item = &'a FaceMesh>,
{
    let mut out = BufWriter::new(File::create(path)?);
    write_obj(&mut out, faces)?;
    out.flush()
}
