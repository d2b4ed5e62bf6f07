//! Walk-and-snap motion: keyboard velocity, gravity, and a one-sided ground clamp

use glam::Vec3;

use crate::body::{BodyState, ContactVectors};
use crate::config::ControllerConfig;
use crate::controller::Resolution;
use crate::ground::query_ground;
use crate::input::DirectionalInput;
use crate::terrain::Face;

/// Apply input, gravity and explicit Euler integration for one step.
pub(crate) fn integrate(
    body: &mut BodyState,
    input: DirectionalInput,
    config: &ControllerConfig,
    dt: f32,
) {
    match input.desired_velocity(config.move_speed) {
        Some(desired) => {
            body.velocity.x = desired.x;
            body.velocity.z = desired.z;
        }
        None => {
            // Asymptotic decay, never snapped to zero
            body.velocity.x *= config.damping;
            body.velocity.z *= config.damping;
        }
    }

    if input.jump && body.current_face.is_some() {
        body.velocity.y = config.jump_speed;
    }

    body.velocity.y += config.gravity * dt;
    body.position += body.velocity * dt;
}

/// Snap onto the supporting face if the body has reached it.
///
/// Only downward velocity is removed; an upward velocity (jump) is kept.
pub(crate) fn resolve(body: &mut BodyState, faces: &[Face], radius: f32) -> Resolution {
    let Vec3 { x, z, .. } = body.position;
    let Some(hit) = query_ground(x, z, faces) else {
        return Resolution::Airborne;
    };

    let rest_y = hit.height + radius;
    if body.position.y > rest_y {
        return Resolution::Airborne;
    }

    body.position.y = rest_y;
    body.velocity.y = body.velocity.y.max(0.0);
    body.contact = ContactVectors::compute(
        Vec3::new(x, hit.height, z),
        body.horizontal_velocity(),
        hit.normal,
    );

    let previous = body.current_face.replace(hit.face_id);
    Resolution::Supported {
        previous,
        current: hit.face_id,
    }
}
