//! Terrain shape profiles and their closed-form height functions

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TerrainError};

/// Shape of the generated heightfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TerrainProfile {
    #[default]
    Flat,
    RollingHills,
    ValleysAndPeaks,
    RoughNoise,
}

impl TerrainProfile {
    pub const ALL: [TerrainProfile; 4] = [
        TerrainProfile::Flat,
        TerrainProfile::RollingHills,
        TerrainProfile::ValleysAndPeaks,
        TerrainProfile::RoughNoise,
    ];

    /// Stable kebab-case name, the same one accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            TerrainProfile::Flat => "flat",
            TerrainProfile::RollingHills => "rolling-hills",
            TerrainProfile::ValleysAndPeaks => "valleys-and-peaks",
            TerrainProfile::RoughNoise => "rough-noise",
        }
    }

    /// Unscaled height at grid vertex `(i, j)`.
    ///
    /// Evaluated in `f64` so the same indices always round to the same `f32`.
    pub fn height(self, i: u32, j: u32) -> f32 {
        let (x, z) = (f64::from(i), f64::from(j));
        let h = match self {
            TerrainProfile::Flat => 0.0,
            TerrainProfile::RollingHills => (x * 0.5).sin() * (z * 0.5).cos() * 0.5,
            TerrainProfile::ValleysAndPeaks => {
                (x * 0.3).sin() * (z * 0.3).cos() * 1.2 + (z * 0.8).sin() * 0.3
            }
            TerrainProfile::RoughNoise => {
                (x * 0.7).sin() * (z * 0.6).cos() * 0.4
                    + (x * 1.3 + z * 0.7).sin() * 0.2
                    + grid_hash(i, j) * 0.3
            }
        };
        h as f32
    }
}

impl fmt::Display for TerrainProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TerrainProfile {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        TerrainProfile::ALL
            .into_iter()
            .find(|p| p.name() == key)
            .ok_or_else(|| TerrainError::UnknownProfile(s.to_string()))
    }
}

/// Pseudo-random perturbation in `[-0.5, 0.5)` derived only from `(i, j)`.
///
/// Classic sine hash: `fract(sin(12.9898 i + 78.233 j) * 43758.5453) - 0.5`.
pub fn grid_hash(i: u32, j: u32) -> f64 {
    let s = (f64::from(i) * 12.9898 + f64::from(j) * 78.233).sin() * 43758.5453;
    s - s.floor() - 0.5
}

/// Generation parameters shared by all profiles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TerrainParams {
    /// Side length of the square horizontal region, centred on the origin
    pub size: f32,
    /// Grid cells per side
    pub divisions: u32,
    /// Multiplier applied to every profile height
    pub height_scale: f32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            size: 10.0,
            divisions: 10,
            height_scale: 1.0,
        }
    }
}

impl TerrainParams {
    pub fn validate(&self) -> Result<()> {
        if self.divisions == 0 {
            return Err(TerrainError::ZeroDivisions);
        }
        if self.face_count_u64() > u64::from(u32::MAX) {
            return Err(TerrainError::TooManyDivisions(self.divisions));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(TerrainError::InvalidSize(self.size));
        }
        if !self.height_scale.is_finite() {
            return Err(TerrainError::InvalidHeightScale(self.height_scale));
        }
        Ok(())
    }

    /// Edge length of one grid cell.
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.size / self.divisions as f32
    }

    /// Number of faces a valid generation produces.
    ///
    /// Only meaningful after [`validate`](Self::validate) has passed.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.face_count_u64() as usize
    }

    fn face_count_u64(&self) -> u64 {
        let d = u64::from(self.divisions);
        d * d * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_is_zero_everywhere() {
        for i in 0..8 {
            for j in 0..8 {
                assert_eq!(TerrainProfile::Flat.height(i, j), 0.0);
            }
        }
    }

    #[test]
    fn test_grid_hash_is_pure_and_bounded() {
        for i in 0..32 {
            for j in 0..32 {
                let h = grid_hash(i, j);
                assert_eq!(h.to_bits(), grid_hash(i, j).to_bits());
                assert!((-0.5..0.5).contains(&h), "hash({i}, {j}) = {h}");
            }
        }
        // Neighbouring vertices should not all share one value
        assert_ne!(grid_hash(1, 2).to_bits(), grid_hash(2, 1).to_bits());
    }

    #[test]
    fn test_profile_names_round_trip() {
        for profile in TerrainProfile::ALL {
            assert_eq!(profile.name().parse::<TerrainProfile>(), Ok(profile));
        }
        assert_eq!("Rough_Noise".parse::<TerrainProfile>(), Ok(TerrainProfile::RoughNoise));
        assert_eq!(
            "cliffs".parse::<TerrainProfile>(),
            Err(TerrainError::UnknownProfile("cliffs".into()))
        );
    }

    #[test]
    fn test_params_validation() {
        assert!(TerrainParams::default().validate().is_ok());

        let zero = TerrainParams { divisions: 0, ..Default::default() };
        assert_eq!(zero.validate(), Err(TerrainError::ZeroDivisions));

        let negative = TerrainParams { size: -1.0, ..Default::default() };
        assert_eq!(negative.validate(), Err(TerrainError::InvalidSize(-1.0)));

        // 2 * 46340² still fits a u32 id, 2 * 46341² does not
        let largest = TerrainParams { divisions: 46_340, ..Default::default() };
        assert!(largest.validate().is_ok());
        assert_eq!(largest.face_count(), 4_294_791_200);
        let too_fine = TerrainParams { divisions: 46_341, ..Default::default() };
        assert_eq!(too_fine.validate(), Err(TerrainError::TooManyDivisions(46_341)));

        let nan_scale = TerrainParams { height_scale: f32::NAN, ..Default::default() };
        assert!(matches!(
            nan_scale.validate(),
            Err(TerrainError::InvalidHeightScale(_))
        ));
    }
}
