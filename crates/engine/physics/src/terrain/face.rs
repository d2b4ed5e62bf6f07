use std::fmt;

use glam::Vec3;

use crate::math::{triangle_centroid, triangle_normal};

/// Identifier of a face within one terrain generation.
///
/// Ids are dense (`0..face_count`) and restart at zero whenever the terrain is
/// regenerated, so an id is only meaningful together with its batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FaceId(pub u32);

impl FaceId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Immutable terrain triangle with its normal and centroid precomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Face {
    pub id: FaceId,
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    /// Unit normal, `(b - a) × (c - a)` normalized
    pub normal: Vec3,
    pub centroid: Vec3,
}

impl Face {
    /// Build a face from CCW vertices, computing normal and centroid.
    pub fn new(id: FaceId, a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self {
            id,
            a,
            b,
            c,
            normal: triangle_normal(a, b, c),
            centroid: triangle_centroid(a, b, c),
        }
    }

    #[inline]
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }
}
