use glam::Vec3;

use crate::body::{BodyState, ContactVectors};
use crate::config::{ControllerConfig, MotionMode};
use crate::ground::query_ground;
use crate::input::DirectionalInput;
use crate::terrain::{Face, FaceId, Terrain};
use crate::{legacy, walk};

/// Notification produced by a step for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
pub enum ContactEvent {
    /// The body came to rest on a different face (or landed after being airborne)
    FaceChanged {
        previous: Option<FaceId>,
        current: FaceId,
    },
    /// Legacy mode resolved a bounce off `face_id`
    Bounced {
        face_id: FaceId,
        vectors: ContactVectors,
    },
    /// Contact vectors and the tracked face went back to zero/none
    Cleared,
    /// The body left the recovery bounds and was placed back at `position`
    Recovered { position: Vec3 },
}

/// Outcome of one [`BodyController::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutput {
    pub body: BodyState,
    pub event: Option<ContactEvent>,
}

/// What a motion strategy found after integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Resolution {
    Airborne,
    Supported {
        previous: Option<FaceId>,
        current: FaceId,
    },
    Bounced {
        face_id: FaceId,
        vectors: ContactVectors,
    },
}

/// Rate limit for [`ContactEvent::Cleared`].
///
/// Body state is cleared every step; only the notification is held back, and a
/// pending clear is delivered once the interval has elapsed.
#[derive(Debug, Clone, Copy)]
struct ClearNotice {
    interval: f32,
    since_emit: f32,
    pending: bool,
}

impl ClearNotice {
    fn new(interval: f32) -> Self {
        Self {
            interval,
            since_emit: f32::INFINITY,
            pending: false,
        }
    }

    fn reset(&mut self) {
        *self = Self::new(self.interval);
    }

    fn take(&mut self) -> bool {
        if self.pending && self.since_emit >= self.interval {
            self.pending = false;
            self.since_emit = 0.0;
            true
        } else {
            false
        }
    }
}

/// Advances a [`BodyState`] over a terrain, one frame at a time.
///
/// The motion strategy is fixed at construction. The controller holds only
/// configuration and notification bookkeeping; the body itself is passed in
/// and returned by [`step`](Self::step).
#[derive(Debug, Clone)]
pub struct BodyController {
    config: ControllerConfig,
    mode: MotionMode,
    start: Vec3,
    clear_notice: ClearNotice,
}

impl BodyController {
    pub fn new(config: ControllerConfig, mode: MotionMode) -> Self {
        Self {
            config,
            mode,
            start: config.start,
            clear_notice: ClearNotice::new(config.clear_notify_interval),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    /// Start position used by spawns and out-of-bounds recovery.
    pub fn start(&self) -> Vec3 {
        self.start
    }

    /// Fresh body at the configured start.
    pub fn spawn(&mut self, terrain: &Terrain) -> BodyState {
        self.spawn_at(self.start, terrain)
    }

    /// Fresh body at `start`, which also becomes the recovery position.
    ///
    /// The body is placed `radius` above the ground beneath `start`, or at
    /// `start.y` where there is no ground. A walking body starts out supported
    /// by that face, so it can jump on its first step.
    pub fn spawn_at(&mut self, start: Vec3, terrain: &Terrain) -> BodyState {
        self.start = start;
        self.clear_notice.reset();
        let (mut body, support) = self.place(start, self.mode.spawn_velocity(), terrain.faces());
        if matches!(self.mode, MotionMode::WalkAndSnap) {
            body.current_face = support;
        }
        body
    }

    fn place(&self, start: Vec3, velocity: Vec3, faces: &[Face]) -> (BodyState, Option<FaceId>) {
        let hit = query_ground(start.x, start.z, faces);
        let y = hit.map_or(start.y, |h| h.height + self.config.radius);
        let body = BodyState::new(Vec3::new(start.x, y, start.z), velocity);
        (body, hit.map(|h| h.face_id))
    }

    /// Advance `body` by one frame.
    ///
    /// `dt` is clamped to `[0, max_dt]`. Never fails; geometric dead ends show
    /// up as an airborne body with cleared contact state.
    pub fn step(
        &mut self,
        mut body: BodyState,
        terrain: &Terrain,
        dt: f32,
        input: DirectionalInput,
    ) -> StepOutput {
        let dt = self.config.clamp_dt(dt);
        self.clear_notice.since_emit += dt;

        match self.mode {
            MotionMode::WalkAndSnap => walk::integrate(&mut body, input, &self.config, dt),
            MotionMode::LegacyBounce { .. } => legacy::integrate(&mut body, &self.config, dt),
        }

        if self
            .config
            .bounds
            .is_out_of_bounds(body.position, terrain.size())
        {
            let (recovered, _) = self.place(self.start, Vec3::ZERO, terrain.faces());
            tracing::info!(
                "Body out of bounds at {:?}, recovered to {:?}",
                body.position,
                recovered.position
            );
            self.clear_notice.pending = false;
            return StepOutput {
                body: recovered,
                event: Some(ContactEvent::Recovered {
                    position: recovered.position,
                }),
            };
        }

        let radius = self.config.radius;
        let resolution = match self.mode {
            MotionMode::WalkAndSnap => walk::resolve(&mut body, terrain.faces(), radius),
            MotionMode::LegacyBounce { .. } => legacy::resolve(&mut body, terrain.faces(), radius),
        };

        let event = match resolution {
            Resolution::Supported { previous, current } => {
                self.clear_notice.pending = false;
                if previous == Some(current) {
                    None
                } else {
                    tracing::debug!("Supporting face changed: {:?} -> {}", previous, current);
                    Some(ContactEvent::FaceChanged { previous, current })
                }
            }
            Resolution::Bounced { face_id, vectors } => {
                self.clear_notice.pending = false;
                tracing::trace!("Bounced off face {} at {:?}", face_id, vectors.point);
                Some(ContactEvent::Bounced { face_id, vectors })
            }
            Resolution::Airborne => {
                if body.has_contact_state() {
                    body.clear_contact();
                    self.clear_notice.pending = true;
                }
                if self.clear_notice.take() {
                    tracing::trace!("Contact cleared");
                    Some(ContactEvent::Cleared)
                } else {
                    None
                }
            }
        };

        StepOutput { body, event }
    }
}
