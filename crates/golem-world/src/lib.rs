//! Terrain generation and the authoritative world lattice.
#![forbid(unsafe_code)]

pub mod store;
pub mod worldgen;

pub use store::{WorldObject, WorldStore};
pub use worldgen::{HeightSampler, Placement, TerrainNoise, WorldGenConfig, generate, populate};
