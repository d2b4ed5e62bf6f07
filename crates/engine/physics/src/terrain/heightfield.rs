use super::face::{Face, FaceId};
use super::profile::{TerrainParams, TerrainProfile};
use super::triangle_gen::generate_faces;
use crate::error::Result;

/// One generation batch of terrain faces.
///
/// The batch is immutable; changing the profile means building a new `Terrain`
/// and swapping it in whole.
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    profile: TerrainProfile,
    params: TerrainParams,
    faces: Vec<Face>,
}

impl Terrain {
    /// Generate terrain for `profile`.
    ///
    /// Fails only on invalid `params`.
    pub fn generate(profile: TerrainProfile, params: TerrainParams) -> Result<Self> {
        let faces = generate_faces(profile, &params)?;
        tracing::debug!(
            "Generated {} terrain: {} faces over {}x{} cells",
            profile,
            faces.len(),
            params.divisions,
            params.divisions
        );
        Ok(Self {
            profile,
            params,
            faces,
        })
    }

    pub fn profile(&self) -> TerrainProfile {
        self.profile
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Face by id, `None` for ids outside this batch.
    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Side length of the covered square.
    pub fn size(&self) -> f32 {
        self.params.size
    }

    /// Half the side length; the terrain spans `[-half_extent, half_extent]` on x and z.
    pub fn half_extent(&self) -> f32 {
        self.params.size / 2.0
    }
}
