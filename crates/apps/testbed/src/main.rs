//! Contact Physics Testbed
//!
//! Runs a body over procedural terrain without a renderer and reports the
//! contact events it produced.
//!
//! Scene configuration can be loaded from TOML files.
//! Use `--config <path>` to specify a scene file.

use anyhow::Result;
use clap::Parser;
use contact_physics::TerrainProfile;
use contact_testbed::{load_scene, run_scene, RunMode, SceneConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_SCENE: &str = "crates/apps/testbed/config/scene.toml";

/// Contact Physics Testbed
///
/// Drives the frame loop headless; set RUST_LOG=debug to see every event.
#[derive(Parser)]
#[command(name = "contact-testbed")]
#[command(about = "Headless sphere-over-terrain contact runs")]
struct Args {
    /// Scene TOML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long)]
    frames: Option<u32>,

    /// Terrain profile (flat, rolling-hills, valleys-and-peaks, rough-noise)
    #[arg(long)]
    profile: Option<TerrainProfile>,

    #[arg(long, value_enum)]
    mode: Option<RunMode>,

    /// Held direction, e.g. `right` or `up-left`
    #[arg(long)]
    input: Option<String>,
}

impl Args {
    fn apply_to(self, mut scene: SceneConfig) -> SceneConfig {
        if let Some(frames) = self.frames {
            scene.run.frames = frames;
        }
        if let Some(profile) = self.profile {
            scene.terrain.profile = profile;
        }
        if let Some(mode) = self.mode {
            scene.run.mode = mode;
        }
        if let Some(input) = self.input {
            scene.run.input = input;
        }
        scene
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let scene = match &args.config {
        Some(path) => load_scene(path)?,
        None => {
            // Try default config location
            let default_scene = PathBuf::from(DEFAULT_SCENE);
            if default_scene.exists() {
                tracing::info!("Loading default scene: {}", default_scene.display());
                load_scene(&default_scene)?
            } else {
                SceneConfig::default()
            }
        }
    };
    let scene = args.apply_to(scene);

    let summary = run_scene(&scene)?;
    println!("{summary}");
    Ok(())
}
