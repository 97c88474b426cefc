//! Demo binary that builds a planet mesh and reports statistics.
//!
//! Run with `cargo run -p tellus-demo` for a default unit sphere, or pass
//! parameters: `cargo run -p tellus-demo -- --resolution 64 --displace
//! --obj-out planet.obj`. A full [`PlanetConfig`] can also be loaded from a
//! RON file via `--preset`.

mod obj;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use tellus_cubesphere::{CubeFace, GeometryKind};
use tellus_planet::{FaceSelector, PlanetConfig, PlanetMeshPipeline};
use tellus_terrain::NoiseSettings;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GeometryArg {
    Cube,
    Sphere,
}

impl From<GeometryArg> for GeometryKind {
    fn from(arg: GeometryArg) -> Self {
        match arg {
            GeometryArg::Cube => GeometryKind::Cube,
            GeometryArg::Sphere => GeometryKind::Sphere,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FaceArg {
    All,
    Top,
    Bottom,
    Right,
    Left,
    Back,
    Front,
}

impl From<FaceArg> for FaceSelector {
    fn from(arg: FaceArg) -> Self {
        match arg {
            FaceArg::All => FaceSelector::All,
            FaceArg::Top => FaceSelector::Only(CubeFace::Top),
            FaceArg::Bottom => FaceSelector::Only(CubeFace::Bottom),
            FaceArg::Right => FaceSelector::Only(CubeFace::Right),
            FaceArg::Left => FaceSelector::Only(CubeFace::Left),
            FaceArg::Back => FaceSelector::Only(CubeFace::Back),
            FaceArg::Front => FaceSelector::Only(CubeFace::Front),
        }
    }
}

/// Build a cube-sphere planet mesh and report statistics.
#[derive(Debug, Parser)]
#[command(name = "tellus-demo")]
struct Args {
    /// Planet radius.
    #[arg(long, default_value_t = 1.0)]
    radius: f64,

    /// Grid cells per face edge.
    #[arg(long, default_value_t = 30)]
    resolution: u32,

    /// Cube or sphere projection.
    #[arg(long, value_enum, default_value = "sphere")]
    geometry: GeometryArg,

    /// Which faces to include in the output.
    #[arg(long, value_enum, default_value = "all")]
    faces: FaceArg,

    /// Seed for the noise source.
    #[arg(long, default_value_t = 0)]
    seed: u32,

    /// Add one default noise layer set for terrain relief.
    #[arg(long)]
    displace: bool,

    /// Load the full planet configuration from a RON file instead.
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Write the visible faces as a Wavefront OBJ file.
    #[arg(long)]
    obj_out: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Result<PlanetConfig, String> {
        if let Some(path) = &self.preset {
            let text = std::fs::read_to_string(path)
                .map_err(|err| format!("cannot read preset {}: {err}", path.display()))?;
            return ron::from_str(&text)
                .map_err(|err| format!("cannot parse preset {}: {err}", path.display()));
        }

        let noise_layers = if self.displace {
            vec![NoiseSettings::default()]
        } else {
            Vec::new()
        };
        Ok(PlanetConfig {
            radius: self.radius,
            resolution: self.resolution,
            geometry: self.geometry.into(),
            visible_faces: self.faces.into(),
            noise_layers,
        })
    }
}

fn run(args: &Args) -> Result<(), String> {
    let config = args.config()?;
    let mut pipeline = PlanetMeshPipeline::with_seed(args.seed);
    pipeline
        .rebuild(&config)
        .map_err(|err| format!("rebuild failed: {err}"))?;

    for mesh in pipeline.visible_faces() {
        info!(
            "{:?}: {} vertices, {} triangles",
            mesh.face,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    }

    if let Some(path) = &args.obj_out {
        obj::write_obj_file(path, pipeline.visible_faces())
            .map_err(|err| format!("cannot write {}: {err}", path.display()))?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    tellus_log::init_logging("info");
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}
