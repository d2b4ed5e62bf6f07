use glam::Vec3;

use crate::body::{BodyState, ContactVectors};
use crate::config::{ControllerConfig, MotionMode};
use crate::controller::{BodyController, ContactEvent};
use crate::error::Result;
use crate::input::DirectionalInput;
use crate::terrain::{Face, FaceId, Terrain, TerrainParams, TerrainProfile};

/// Terrain plus one controlled body: the whole surface a presentation layer talks to.
///
/// Terrain regeneration happens between steps and replaces the face batch
/// whole, so a step always reads one complete generation.
pub struct ContactWorld {
    terrain: Terrain,
    controller: BodyController,
    body: BodyState,
    highlight: Option<FaceId>,
}

impl ContactWorld {
    /// Generate terrain and spawn the body at `config.start`.
    pub fn new(
        profile: TerrainProfile,
        params: TerrainParams,
        config: ControllerConfig,
        mode: MotionMode,
    ) -> Result<Self> {
        let terrain = Terrain::generate(profile, params)?;
        let mut controller = BodyController::new(config, mode);
        let body = controller.spawn(&terrain);
        Ok(Self {
            terrain,
            controller,
            body,
            highlight: None,
        })
    }

    /// Advance the body by one frame.
    pub fn step(&mut self, dt: f32, input: DirectionalInput) -> Option<ContactEvent> {
        let output = self.controller.step(self.body, &self.terrain, dt, input);
        self.body = output.body;
        output.event
    }

    /// Respawn at the current start position.
    pub fn reset(&mut self) {
        self.body = self.controller.spawn(&self.terrain);
    }

    /// Respawn at `start` and use it for later recoveries.
    pub fn reset_to(&mut self, start: Vec3) {
        self.body = self.controller.spawn_at(start, &self.terrain);
    }

    /// Regenerate terrain for `profile` and respawn the body.
    ///
    /// On error the previous terrain and body are kept.
    pub fn set_profile(&mut self, profile: TerrainProfile) -> Result<()> {
        let terrain = Terrain::generate(profile, *self.terrain.params())?;
        tracing::info!("Terrain profile changed: {} -> {}", self.terrain.profile(), profile);
        self.terrain = terrain;
        self.highlight = None;
        self.reset();
        Ok(())
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn faces(&self) -> &[Face] {
        self.terrain.faces()
    }

    pub fn controller(&self) -> &BodyController {
        &self.controller
    }

    pub fn body(&self) -> &BodyState {
        &self.body
    }

    pub fn position(&self) -> Vec3 {
        self.body.position()
    }

    pub fn contact_vectors(&self) -> &ContactVectors {
        self.body.contact()
    }

    pub fn current_face(&self) -> Option<FaceId> {
        self.body.current_face()
    }

    /// Face id the presentation layer wants highlighted (e.g. under the cursor).
    pub fn set_highlight(&mut self, id: Option<FaceId>) {
        self.highlight = id.filter(|id| self.terrain.face(*id).is_some());
    }

    pub fn highlight(&self) -> Option<FaceId> {
        self.highlight
    }

    pub fn is_highlighted(&self, id: FaceId) -> bool {
        self.highlight == Some(id)
    }
}
