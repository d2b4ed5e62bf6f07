//! Headless testbed for contact-physics
//!
//! Builds a [`ContactWorld`] from a [`SceneConfig`], holds one input for the
//! whole run and tallies the contact events each frame produces.

pub mod scene;

use anyhow::Result;
use contact_physics::glam::Vec3;
use contact_physics::{ContactEvent, ContactWorld, FaceId};
use std::fmt;

pub use scene::{load_scene, parse_scene, RunConfig, RunMode, SceneConfig, TerrainSection};

/// Event counts and final body state of a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u32,
    pub face_changes: u32,
    pub bounces: u32,
    pub clears: u32,
    pub recoveries: u32,
    pub final_position: Vec3,
    pub final_face: Option<FaceId>,
}

impl RunSummary {
    fn record(&mut self, event: &ContactEvent) {
        match event {
            ContactEvent::FaceChanged { .. } => self.face_changes += 1,
            ContactEvent::Bounced { .. } => self.bounces += 1,
            ContactEvent::Cleared => self.clears += 1,
            ContactEvent::Recovered { .. } => self.recoveries += 1,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.final_position;
        write!(
            f,
            "{} frames: {} face changes, {} bounces, {} clears, {} recoveries; final position ({:.3}, {:.3}, {:.3})",
            self.frames, self.face_changes, self.bounces, self.clears, self.recoveries, p.x, p.y, p.z
        )?;
        match self.final_face {
            Some(id) => write!(f, " on face {id}"),
            None => write!(f, " airborne"),
        }
    }
}

/// Run a scene to completion.
pub fn run_scene(scene: &SceneConfig) -> Result<RunSummary> {
    let input = scene.run.directional_input()?;
    let mut world = ContactWorld::new(
        scene.terrain.profile,
        scene.terrain.params,
        scene.controller,
        scene.run.motion_mode(),
    )?;
    tracing::info!(
        "Running {} frames on {} ({} faces), mode {:?}",
        scene.run.frames,
        scene.terrain.profile,
        world.faces().len(),
        scene.run.mode
    );

    let mut summary = RunSummary {
        frames: scene.run.frames,
        ..RunSummary::default()
    };
    for frame in 0..scene.run.frames {
        if let Some(event) = world.step(scene.run.dt, input) {
            tracing::debug!(frame, ?event, "contact event");
            summary.record(&event);
        }
    }

    summary.final_position = world.position();
    summary.final_face = world.current_face();
    Ok(summary)
}
