//! Launch-and-bounce motion, the older of the two demo modes
//!
//! The body is launched once, flies under gravity and bounces elastically off
//! the first face it approaches each frame. There is no restitution and no
//! friction.

use crate::body::{BodyState, ContactVectors};
use crate::config::ControllerConfig;
use crate::controller::Resolution;
use crate::math::{plane_signed_distance, point_in_triangle};
use crate::terrain::Face;

/// Terrains with more faces than this are pre-filtered by centroid distance.
pub const LEGACY_PREFILTER_THRESHOLD: usize = 100;

/// Extra separation added when pushing the body out of a face.
pub const LEGACY_PUSH_EPS: f32 = 1e-4;

pub(crate) fn integrate(body: &mut BodyState, config: &ControllerConfig, dt: f32) {
    body.velocity.y += config.gravity * dt;
    body.position += body.velocity * dt;
}

/// Resolve at most one bounce, against the first qualifying face.
pub(crate) fn resolve(body: &mut BodyState, faces: &[Face], radius: f32) -> Resolution {
    let prefilter = faces.len() > LEGACY_PREFILTER_THRESHOLD;

    for face in faces {
        if prefilter && !within_reach(face, body, radius) {
            continue;
        }
        if let Some(vectors) = try_bounce(body, face, radius) {
            return Resolution::Bounced {
                face_id: face.id,
                vectors,
            };
        }
    }

    Resolution::Airborne
}

/// Cheap reject: the body can only touch `face` if its centre is within
/// `radius` of the triangle's extent around the centroid.
fn within_reach(face: &Face, body: &BodyState, radius: f32) -> bool {
    let extent = face
        .vertices()
        .iter()
        .map(|v| v.distance(face.centroid))
        .fold(0.0_f32, f32::max);
    body.position.distance(face.centroid) <= extent + radius
}

fn try_bounce(body: &mut BodyState, face: &Face, radius: f32) -> Option<ContactVectors> {
    let n = face.normal;
    let incoming = body.velocity;
    if incoming.dot(n) >= 0.0 {
        return None;
    }

    let distance = plane_signed_distance(body.position, face.a, n);
    if distance.abs() > radius {
        return None;
    }

    let point = body.position - n * distance;
    if !point_in_triangle(point, face.a, face.b, face.c) {
        return None;
    }

    body.position += n * (radius - distance + LEGACY_PUSH_EPS);
    let vectors = ContactVectors::compute(point, incoming, n);
    body.velocity = vectors.reflection;
    body.current_face = Some(face.id);
    body.contact = vectors;

    Some(vectors)
}
