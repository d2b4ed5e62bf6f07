//! Triangle generation from a sampled height grid
//!
//! Samples the profile height at every grid vertex and splits each cell into
//! two triangles with upward (counter-clockwise seen from above) winding.

use glam::Vec3;

use super::face::{Face, FaceId};
use super::profile::{TerrainParams, TerrainProfile};
use crate::error::Result;

/// World-space position of grid vertex `(i, j)`.
///
/// The grid is centred on the origin: vertex `(0, 0)` sits at `(-size/2, _, -size/2)`.
pub fn grid_vertex(profile: TerrainProfile, params: &TerrainParams, i: u32, j: u32) -> Vec3 {
    let half = params.size / 2.0;
    let step = params.cell_size();
    Vec3::new(
        -half + i as f32 * step,
        profile.height(i, j) * params.height_scale,
        -half + j as f32 * step,
    )
}

/// Split grid cell `(i, j)` into its two triangles.
///
/// Corners are `v00 = (i, j)`, `v10 = (i+1, j)`, `v01 = (i, j+1)`, `v11 = (i+1, j+1)`.
/// Triangles are `(v00, v01, v10)` and `(v10, v01, v11)`, both wound so that
/// `(b - a) × (c - a)` has a positive y component.
pub fn cell_to_triangles(
    profile: TerrainProfile,
    params: &TerrainParams,
    i: u32,
    j: u32,
) -> [[Vec3; 3]; 2] {
    let v00 = grid_vertex(profile, params, i, j);
    let v10 = grid_vertex(profile, params, i + 1, j);
    let v01 = grid_vertex(profile, params, i, j + 1);
    let v11 = grid_vertex(profile, params, i + 1, j + 1);
    [[v00, v01, v10], [v10, v01, v11]]
}

/// Generate the full face batch for `profile`.
///
/// Output order is row-major over cells (`j` outer, `i` inner), first triangle
/// then second, and ids follow that order starting at zero.
pub fn generate_faces(profile: TerrainProfile, params: &TerrainParams) -> Result<Vec<Face>> {
    params.validate()?;

    let mut faces = Vec::with_capacity(params.face_count());
    for j in 0..params.divisions {
        for i in 0..params.divisions {
            for [a, b, c] in cell_to_triangles(profile, params, i, j) {
                // validate() bounds the face count to u32
                let id = FaceId(faces.len() as u32);
                faces.push(Face::new(id, a, b, c));
            }
        }
    }

    Ok(faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TerrainError;

    #[test]
    fn test_face_count_and_dense_ids() {
        let params = TerrainParams { size: 8.0, divisions: 4, height_scale: 1.0 };
        let faces = generate_faces(TerrainProfile::RollingHills, &params).unwrap();

        assert_eq!(faces.len(), 32);
        for (idx, face) in faces.iter().enumerate() {
            assert_eq!(face.id.index(), idx);
        }
    }

    #[test]
    fn test_all_profiles_have_upward_unit_normals() {
        let params = TerrainParams::default();
        for profile in TerrainProfile::ALL {
            let faces = generate_faces(profile, &params).unwrap();
            for face in &faces {
                assert!(
                    (face.normal.length() - 1.0).abs() < 1e-5,
                    "{profile}: face {} normal not unit: {:?}",
                    face.id,
                    face.normal
                );
                assert!(
                    face.normal.y > 0.0,
                    "{profile}: face {} normal should point up, got {:?}",
                    face.id,
                    face.normal
                );
            }
        }
    }

    #[test]
    fn test_grid_covers_centered_square() {
        let params = TerrainParams { size: 6.0, divisions: 3, height_scale: 1.0 };
        let faces = generate_faces(TerrainProfile::Flat, &params).unwrap();

        let (mut min, mut max) = (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN));
        for v in faces.iter().flat_map(|f| f.vertices()) {
            min = min.min(v);
            max = max.max(v);
        }
        assert_eq!(min, Vec3::new(-3.0, 0.0, -3.0));
        assert_eq!(max, Vec3::new(3.0, 0.0, 3.0));
    }

    #[test]
    fn test_first_cell_order() {
        let params = TerrainParams { size: 2.0, divisions: 2, height_scale: 1.0 };
        let faces = generate_faces(TerrainProfile::Flat, &params).unwrap();

        // Cell (0, 0) comes first, then cell (1, 0) along i
        assert_eq!(faces[0].a, Vec3::new(-1.0, 0.0, -1.0));
        assert_eq!(faces[1].c, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(faces[2].a, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_height_scale_applies() {
        let params = TerrainParams { size: 10.0, divisions: 10, height_scale: 3.0 };
        let unit = TerrainParams { height_scale: 1.0, ..params };
        let v = grid_vertex(TerrainProfile::ValleysAndPeaks, &params, 3, 5);
        let u = grid_vertex(TerrainProfile::ValleysAndPeaks, &unit, 3, 5);
        assert!((v.y - u.y * 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_invalid_params_fail_fast() {
        let params = TerrainParams { divisions: 0, ..Default::default() };
        assert_eq!(
            generate_faces(TerrainProfile::Flat, &params),
            Err(TerrainError::ZeroDivisions)
        );

        // Rejected before any face is allocated
        let params = TerrainParams { divisions: 100_000, ..Default::default() };
        assert_eq!(
            generate_faces(TerrainProfile::Flat, &params),
            Err(TerrainError::TooManyDivisions(100_000))
        );
    }
}
