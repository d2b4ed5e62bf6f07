//! Procedural heightfield terrain built from triangle faces
//!
//! A terrain is a square grid of `divisions × divisions` cells centred on the
//! origin, each cell split into two triangles. Vertex heights come from a
//! closed-form [`TerrainProfile`] function of the grid indices, so generating
//! the same profile with the same [`TerrainParams`] always yields identical
//! geometry.
//!
//! # Architecture
//!
//! - [`TerrainProfile`]: shape selection and the per-vertex height function
//! - [`Face`]: immutable triangle with precomputed normal, centroid and [`FaceId`]
//! - [`Terrain`]: one generation batch, replaced wholesale on profile change
//!
//! # Usage
//!
//! ```
//! use contact_physics::terrain::{Terrain, TerrainParams, TerrainProfile};
//!
//! let terrain = Terrain::generate(TerrainProfile::RollingHills, TerrainParams::default()).unwrap();
//! assert_eq!(terrain.len(), 200);
//! ```

mod face;
mod heightfield;
mod profile;
mod triangle_gen;

pub use face::{Face, FaceId};
pub use heightfield::Terrain;
pub use profile::{grid_hash, TerrainParams, TerrainProfile};
pub use triangle_gen::{cell_to_triangles, generate_faces, grid_vertex};
