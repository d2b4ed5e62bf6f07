//! Scene files for the testbed
//!
//! A scene is a TOML document with optional `[terrain]`, `[controller]` and
//! `[run]` tables. Anything left out falls back to the library defaults.

use anyhow::{anyhow, Context, Result};
use contact_physics::{ControllerConfig, DirectionalInput, MotionMode, TerrainParams, TerrainProfile};
use glam::Vec3;
use serde::Deserialize;
use std::path::Path;

/// Whole scene as loaded from a file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub terrain: TerrainSection,
    pub controller: ControllerConfig,
    pub run: RunConfig,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct TerrainSection {
    pub profile: TerrainProfile,
    #[serde(flatten)]
    pub params: TerrainParams,
}

/// Motion strategy selected for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[default]
    Walk,
    Legacy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of frames to simulate
    pub frames: u32,
    /// Frame time handed to every step
    pub dt: f32,
    pub mode: RunMode,
    /// Only used by legacy runs
    pub launch_velocity: Vec3,
    /// Held direction for the whole run, e.g. `up-right`
    pub input: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            dt: 1.0 / 60.0,
            mode: RunMode::Walk,
            launch_velocity: Vec3::new(2.0, 0.0, 1.0),
            input: "none".to_string(),
        }
    }
}

impl RunConfig {
    pub fn motion_mode(&self) -> MotionMode {
        match self.mode {
            RunMode::Walk => MotionMode::WalkAndSnap,
            RunMode::Legacy => MotionMode::LegacyBounce {
                launch_velocity: self.launch_velocity,
            },
        }
    }

    pub fn directional_input(&self) -> Result<DirectionalInput> {
        self.input
            .parse()
            .map_err(|e: String| anyhow!(e))
            .with_context(|| format!("Invalid input '{}'", self.input))
    }
}

/// Parse a scene from TOML text
pub fn parse_scene(text: &str) -> Result<SceneConfig> {
    toml::from_str(text).context("Failed to parse scene TOML")
}

/// Load a scene file
pub fn load_scene(path: &Path) -> Result<SceneConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file {}", path.display()))?;
    parse_scene(&text).with_context(|| format!("Invalid scene file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scene_uses_defaults() {
        let scene = parse_scene("").unwrap();

        assert_eq!(scene.terrain.profile, TerrainProfile::default());
        assert_eq!(scene.terrain.params, TerrainParams::default());
        assert_eq!(scene.controller, ControllerConfig::default());
        assert_eq!(scene.run.frames, 600);
        assert_eq!(scene.run.mode, RunMode::Walk);
    }

    #[test]
    fn test_full_scene() {
        let scene = parse_scene(
            r#"
            [terrain]
            profile = "valleys-and-peaks"
            size = 20.0
            divisions = 16
            height_scale = 0.5

            [controller]
            radius = 0.25
            start = [1.0, 6.0, -1.0]

            [controller.bounds]
            floor_y = -4.0

            [run]
            frames = 120
            dt = 0.01
            mode = "legacy"
            launch_velocity = [0.0, 3.0, 0.0]
            input = "up-left"
            "#,
        )
        .unwrap();

        assert_eq!(scene.terrain.profile, TerrainProfile::ValleysAndPeaks);
        assert_eq!(scene.terrain.params.divisions, 16);
        assert_eq!(scene.terrain.params.size, 20.0);
        assert_eq!(scene.controller.radius, 0.25);
        assert_eq!(scene.controller.start, Vec3::new(1.0, 6.0, -1.0));
        assert_eq!(scene.controller.bounds.floor_y, -4.0);
        assert_eq!(scene.controller.bounds.horizontal_fraction, 0.6);
        // Untouched controller fields keep their defaults
        assert_eq!(scene.controller.gravity, -9.81);
        assert_eq!(
            scene.run.motion_mode(),
            MotionMode::LegacyBounce {
                launch_velocity: Vec3::new(0.0, 3.0, 0.0)
            }
        );
        assert_eq!(
            scene.run.directional_input().unwrap(),
            DirectionalInput::new(true, false, true, false)
        );
    }

    #[test]
    fn test_unknown_profile_is_rejected() {
        let err = parse_scene("[terrain]\nprofile = \"moonscape\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("moonscape"), "{err:#}");
    }

    #[test]
    fn test_bad_input_is_reported() {
        let run = RunConfig {
            input: "sideways".to_string(),
            ..RunConfig::default()
        };
        let err = run.directional_input().unwrap_err();
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = load_scene(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
