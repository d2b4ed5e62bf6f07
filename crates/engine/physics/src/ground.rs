//! Vertical ground queries against terrain faces
//!
//! For a horizontal position `(x, z)` the query solves each face's plane
//! equation for `y`, checks that `(x, y, z)` falls inside the triangle and keeps
//! the highest surface. This is a linear scan; terrains in this crate hold a
//! few hundred faces at most.

use glam::Vec3;

use crate::math::point_in_triangle;
use crate::terrain::{Face, FaceId};

/// Faces whose normal has a vertical component at or below this are skipped.
pub const GROUND_NORMAL_EPS: f32 = 1e-3;

/// Supporting surface found beneath a horizontal position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GroundHit {
    pub height: f32,
    pub normal: Vec3,
    pub face_id: FaceId,
}

/// Height at which the vertical line through `(x, z)` meets the face's plane.
///
/// `None` for near-vertical faces, which cannot support a point from above.
#[inline]
pub fn plane_height_at(face: &Face, x: f32, z: f32) -> Option<f32> {
    let n = face.normal;
    if n.y <= GROUND_NORMAL_EPS {
        return None;
    }
    let p0 = face.a;
    Some(p0.y - (n.x * (x - p0.x) + n.z * (z - p0.z)) / n.y)
}

/// Topmost face directly below (or above) `(x, z)`.
///
/// Ties keep the first face in iteration order.
pub fn query_ground(x: f32, z: f32, faces: &[Face]) -> Option<GroundHit> {
    let mut best: Option<GroundHit> = None;

    for face in faces {
        let Some(height) = plane_height_at(face, x, z) else {
            continue;
        };

        let p = Vec3::new(x, height, z);
        if !point_in_triangle(p, face.a, face.b, face.c) {
            continue;
        }

        if best.as_ref().map_or(true, |b| height > b.height) {
            best = Some(GroundHit {
                height,
                normal: face.normal,
                face_id: face.id,
            });
        }
    }

    best
}

/// Height of the topmost supporting surface at `(x, z)`, if any.
#[inline]
pub fn ground_height(x: f32, z: f32, faces: &[Face]) -> Option<f32> {
    query_ground(x, z, faces).map(|hit| hit.height)
}
