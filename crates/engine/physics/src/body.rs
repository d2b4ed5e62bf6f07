use glam::Vec3;

use crate::math::{project_onto, reflect};
use crate::terrain::FaceId;

/// Display vectors computed at a ground contact.
///
/// All fields are zero when there is no current contact.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContactVectors {
    /// Point on the supporting face beneath the body centre
    pub point: Vec3,
    /// Velocity arriving at the contact
    pub incoming: Vec3,
    /// Unit normal of the supporting face
    pub normal: Vec3,
    /// `incoming` projected onto `normal`
    pub projection: Vec3,
    /// `incoming` reflected about `normal`
    pub reflection: Vec3,
}

impl ContactVectors {
    pub const ZERO: ContactVectors = ContactVectors {
        point: Vec3::ZERO,
        incoming: Vec3::ZERO,
        normal: Vec3::ZERO,
        projection: Vec3::ZERO,
        reflection: Vec3::ZERO,
    };

    pub fn compute(point: Vec3, incoming: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            incoming,
            normal,
            projection: project_onto(incoming, normal),
            reflection: reflect(incoming, normal),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Position, velocity and contact tracking of the moving sphere.
///
/// Hosts own this value and hand it to
/// [`BodyController::step`](crate::BodyController::step), which returns the
/// advanced state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BodyState {
    pub(crate) position: Vec3,
    pub(crate) velocity: Vec3,
    pub(crate) current_face: Option<FaceId>,
    pub(crate) contact: ContactVectors,
}

impl BodyState {
    /// Free body with no contact.
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            current_face: None,
            contact: ContactVectors::ZERO,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Face the body rested on or bounced off during the last step.
    pub fn current_face(&self) -> Option<FaceId> {
        self.current_face
    }

    pub fn contact(&self) -> &ContactVectors {
        &self.contact
    }

    /// True when either the tracked face or the display vectors are set.
    pub(crate) fn has_contact_state(&self) -> bool {
        self.current_face.is_some() || !self.contact.is_zero()
    }

    pub(crate) fn clear_contact(&mut self) {
        self.current_face = None;
        self.contact = ContactVectors::ZERO;
    }

    /// Horizontal part of the velocity (y zeroed).
    pub fn horizontal_velocity(&self) -> Vec3 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z)
    }
}
