//! Vector and triangle helpers used by the terrain and contact code
//!
//! These are free functions over `glam::Vec3` with explicit degenerate-input
//! policies. glam's own `project_onto`/`reflect` assume well-formed input; the
//! versions here never panic and never produce NaN from a zero-length normal.

use glam::Vec3;

/// Tolerance applied to each barycentric coordinate (and their sum) so points
/// sitting exactly on a shared edge are accepted by both neighbours.
pub const BARYCENTRIC_EPS: f32 = 1e-6;

/// Unit-length copy of `v`.
///
/// The input must be non-zero; use [`try_normalize`] when that is not known.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v / v.length()
}

/// Unit-length copy of `v`, or `None` for a zero-length (or non-finite) input.
#[inline]
pub fn try_normalize(v: Vec3) -> Option<Vec3> {
    v.try_normalize()
}

/// Orthogonal projection of `v` onto `n`.
///
/// Returns `Vec3::ZERO` when `n` has zero length.
pub fn project_onto(v: Vec3, n: Vec3) -> Vec3 {
    let len_sq = n.length_squared();
    if len_sq == 0.0 {
        return Vec3::ZERO;
    }
    n * (v.dot(n) / len_sq)
}

/// Reflect `v` about the plane with normal `n`: `v - 2 (v·n̂) n̂`.
///
/// `n` is normalized here; a zero-length `n` leaves `v` unchanged.
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    match try_normalize(n) {
        Some(n_hat) => v - 2.0 * v.dot(n_hat) * n_hat,
        None => v,
    }
}

/// Unit normal of triangle `a, b, c` via `(b - a) × (c - a)`.
///
/// Counter-clockwise winding seen from above gives an upward normal. A
/// degenerate triangle yields `Vec3::ZERO`.
pub fn triangle_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

/// Arithmetic mean of the three vertices.
#[inline]
pub fn triangle_centroid(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (a + b + c) / 3.0
}

/// Signed distance from `p` to the plane through `p0` with normal `n`.
///
/// Positive on the side `n` points to. Zero-length `n` gives `0.0`.
pub fn plane_signed_distance(p: Vec3, p0: Vec3, n: Vec3) -> f32 {
    match try_normalize(n) {
        Some(n_hat) => (p - p0).dot(n_hat),
        None => 0.0,
    }
}

/// Barycentric inside-test for a point already lying on the triangle's plane.
///
/// Edges and vertices count as inside (within [`BARYCENTRIC_EPS`]). Degenerate
/// triangles contain nothing.
pub fn point_in_triangle(p: Vec3, a: Vec3, b: Vec3, c: Vec3) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(v0);
    let dot01 = v0.dot(v1);
    let dot02 = v0.dot(v2);
    let dot11 = v1.dot(v1);
    let dot12 = v1.dot(v2);

    // Zero area relative to the edge lengths, independent of triangle scale
    let denom = dot00 * dot11 - dot01 * dot01;
    if denom.is_nan() || denom <= f32::EPSILON * dot00 * dot11 {
        return false;
    }

    let inv = 1.0 / denom;
    let u = (dot11 * dot02 - dot01 * dot12) * inv;
    let v = (dot00 * dot12 - dot01 * dot02) * inv;

    u >= -BARYCENTRIC_EPS && v >= -BARYCENTRIC_EPS && u + v <= 1.0 + BARYCENTRIC_EPS
}

/// `v` unchanged if `|v| <= max`, otherwise rescaled to length `max`.
///
/// A negative `max` is treated as zero.
pub fn clamp_magnitude(v: Vec3, max: f32) -> Vec3 {
    let max = max.max(0.0);
    let len = v.length();
    if len <= max {
        v
    } else {
        v * (max / len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_normalize_unit_length() {
        let n = normalize(Vec3::new(3.0, 0.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!(approx(n, Vec3::new(0.6, 0.0, 0.8)));
        assert!(try_normalize(Vec3::ZERO).is_none());
    }

    #[test]
    fn test_project_onto_zero_normal() {
        assert_eq!(project_onto(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn test_project_onto_unnormalized_axis() {
        let p = project_onto(Vec3::new(2.0, 5.0, -1.0), Vec3::new(0.0, 10.0, 0.0));
        assert!(approx(p, Vec3::new(0.0, 5.0, 0.0)), "got {:?}", p);
    }

    #[test]
    fn test_project_onto_idempotent() {
        let n = normalize(Vec3::new(0.3, 1.0, -0.2));
        let v = Vec3::new(1.5, -0.5, 2.0);
        let once = project_onto(v, n);
        let twice = project_onto(once, n);
        assert!(approx(once, twice));
    }

    #[test]
    fn test_reflect_is_involution() {
        let n = normalize(Vec3::new(0.2, 1.0, 0.1));
        let v = Vec3::new(1.0, -2.0, 0.5);
        assert!(approx(reflect(reflect(v, n), n), v));
    }

    #[test]
    fn test_reflect_normalizes_internally() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert!(approx(reflect(v, Vec3::new(0.0, 5.0, 0.0)), Vec3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_triangle_normal_ccw_points_up() {
        let n = triangle_normal(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        assert!(approx(n, Vec3::Y), "got {:?}", n);
    }

    #[test]
    fn test_triangle_centroid() {
        let c = triangle_centroid(
            Vec3::ZERO,
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 6.0),
        );
        assert!(approx(c, Vec3::new(1.0, 1.0, 2.0)));
    }

    #[test]
    fn test_plane_signed_distance_sign() {
        let d = plane_signed_distance(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO, Vec3::new(0.0, 4.0, 0.0));
        assert!((d - 2.0).abs() < 1e-6);
        let below = plane_signed_distance(Vec3::new(5.0, -1.0, 3.0), Vec3::ZERO, Vec3::Y);
        assert!((below + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_in_triangle_edges_and_outside() {
        let a = Vec3::ZERO;
        let b = Vec3::new(0.0, 0.0, 1.0);
        let c = Vec3::new(1.0, 0.0, 0.0);

        assert!(point_in_triangle(Vec3::new(0.25, 0.0, 0.25), a, b, c));
        // Hypotenuse midpoint and vertices sit on the boundary
        assert!(point_in_triangle(Vec3::new(0.5, 0.0, 0.5), a, b, c));
        assert!(point_in_triangle(c, a, b, c));
        assert!(!point_in_triangle(Vec3::new(0.6, 0.0, 0.6), a, b, c));
        assert!(!point_in_triangle(Vec3::new(-0.1, 0.0, 0.5), a, b, c));
    }

    #[test]
    fn test_point_in_degenerate_triangle_is_false() {
        let a = Vec3::ZERO;
        let b = Vec3::new(1.0, 0.0, 0.0);
        let c = Vec3::new(2.0, 0.0, 0.0);
        assert!(!point_in_triangle(Vec3::new(1.0, 0.0, 0.0), a, b, c));
    }

    #[test]
    fn test_clamp_magnitude() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(clamp_magnitude(v, 10.0), v);
        let clamped = clamp_magnitude(v, 2.5);
        assert!((clamped.length() - 2.5).abs() < 1e-6);
        assert!(approx(clamped.normalize(), v.normalize()));
        assert_eq!(clamp_magnitude(Vec3::ZERO, 0.0), Vec3::ZERO);
    }

    #[test]
    fn test_clamp_magnitude_negative_max_never_flips() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(clamp_magnitude(v, -2.0), Vec3::ZERO);
        assert_eq!(clamp_magnitude(Vec3::ZERO, -1.0), Vec3::ZERO);
    }

    #[test]
    fn test_point_in_tiny_triangle() {
        // Edges of 4e-4 put the raw denominator far below any absolute cutoff
        let s = 4e-4;
        let a = Vec3::ZERO;
        let b = Vec3::new(0.0, 0.0, s);
        let c = Vec3::new(s, 0.0, 0.0);

        assert!(point_in_triangle(Vec3::new(s / 3.0, 0.0, s / 3.0), a, b, c));
        assert!(!point_in_triangle(Vec3::new(s, 0.0, s), a, b, c));
    }
}
