use std::error::Error;
use std::fs;
use std::path::Path;

use fastnoise_lite::{FastNoiseLite, NoiseType};
use serde::Deserialize;

use golem_blocks::{Block, BlockRegistry};

use super::store::{WorldObject, WorldStore};

/// Terrain parameters, loadable from `worldgen.toml`.
#[derive(Clone, Debug, Deserialize)]
pub struct WorldGenConfig {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: i32,
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    /// Fixed seed for reproducible terrain; drawn at startup when absent.
    #[serde(default)]
    pub seed: Option<i32>,
}

fn default_chunk_size() -> i32 {
    32
}
fn default_frequency() -> f32 {
    0.05
}
fn default_amplitude() -> f32 {
    5.0
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            frequency: default_frequency(),
            amplitude: default_amplitude(),
            seed: None,
        }
    }
}

impl WorldGenConfig {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        let cfg: WorldGenConfig = toml::from_str(&s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.chunk_size <= 0 {
            return Err(format!("chunk_size must be positive, got {}", self.chunk_size).into());
        }
        if !self.frequency.is_finite() || !self.amplitude.is_finite() {
            return Err("frequency and amplitude must be finite".into());
        }
        Ok(())
    }
}

/// 2-D coherent-noise field sampled per column. A trait so tests can
/// substitute a constant field for the production noise.
pub trait HeightSampler {
    /// Nominally in `[-1, 1]`.
    fn height(&self, x: i32, z: i32) -> f32;
}

/// Perlin-noise sampler, seeded once per run.
pub struct TerrainNoise {
    noise: FastNoiseLite,
}

impl TerrainNoise {
    pub fn new(seed: i32, frequency: f32) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::Perlin));
        noise.set_frequency(Some(frequency));
        Self { noise }
    }
}

impl HeightSampler for TerrainNoise {
    fn height(&self, x: i32, z: i32) -> f32 {
        self.noise.get_noise_2d(x as f32, z as f32)
    }
}

/// One emitted voxel placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub pos: (i32, i32, i32),
    pub block: Block,
}

struct ColumnIds {
    grass: Block,
    dirt: Block,
    stone: Block,
}

fn column_ids(reg: &BlockRegistry) -> ColumnIds {
    let resolve = |name: &str| Block {
        id: reg.id_by_name(name).unwrap_or(reg.fallback_block_id()),
    };
    ColumnIds {
        grass: resolve("grass"),
        dirt: resolve("dirt"),
        stone: resolve("stone"),
    }
}

/// Emit the deterministic column set for a `chunk_size x chunk_size`
/// footprint: one grass voxel at the sampled surface height, then dirt at
/// depth 1 and stone at depths 2-3, only while `y - depth >= 0`.
pub fn generate(
    cfg: &WorldGenConfig,
    sampler: &impl HeightSampler,
    reg: &BlockRegistry,
) -> Vec<Placement> {
    let ids = column_ids(reg);
    let mut out = Vec::with_capacity((cfg.chunk_size * cfg.chunk_size) as usize * 4);
    for z in 0..cfg.chunk_size {
        for x in 0..cfg.chunk_size {
            let y = (sampler.height(x, z) * cfg.amplitude).floor() as i32;
            out.push(Placement {
                pos: (x, y, z),
                block: ids.grass,
            });
            for depth in 1..=3 {
                if y - depth >= 0 {
                    let block = if depth == 1 { ids.dirt } else { ids.stone };
                    out.push(Placement {
                        pos: (x, y - depth, z),
                        block,
                    });
                }
            }
        }
    }
    out
}

/// Apply placements to the store, copying each block's render attributes out
/// of the registry at insertion time.
pub fn populate(store: &mut WorldStore, reg: &BlockRegistry, placements: &[Placement]) {
    for p in placements {
        let (x, y, z) = p.pos;
        store.insert(
            x,
            y,
            z,
            WorldObject::Voxel {
                block: p.block,
                attrs: reg.render_attrs(p.block.id),
            },
        );
    }
}
