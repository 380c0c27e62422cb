use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use golem_blocks::{Block, BlockRegistry};
use golem_sim::Mob;
use golem_world::WorldStore;

use crate::interaction::InteractionState;

#[derive(Deserialize)]
struct HotbarConfig {
    items: Vec<String>,
}

pub struct GameState {
    pub tick: u64,
    pub reg: Arc<BlockRegistry>,
    /// Authoritative container of placed voxels and spawners.
    pub store: WorldStore,
    pub hotbar: Vec<Block>,
    pub interaction: InteractionState,
    /// Unbounded: spawners keep adding, nothing ever removes.
    pub mobs: Vec<Mob>,
    pub rng: fastrand::Rng,
}

impl GameState {
    pub fn new(reg: Arc<BlockRegistry>, hotbar: Vec<Block>, rng_seed: u64) -> Self {
        let interaction = InteractionState::new(&reg);
        Self {
            tick: 0,
            reg,
            store: WorldStore::new(),
            hotbar,
            interaction,
            mobs: Vec::new(),
            rng: fastrand::Rng::with_seed(rng_seed),
        }
    }
}

/// Load the hotbar slot list, silently dropping names the registry does not
/// know. Missing or malformed files degrade to an empty hotbar with a warn.
pub fn load_hotbar(reg: &BlockRegistry, path: &Path) -> Vec<Block> {
    if !path.exists() {
        return Vec::new();
    }
    match std::fs::read_to_string(path) {
        Ok(s) => match toml::from_str::<HotbarConfig>(&s) {
            Ok(cfg) => cfg
                .items
                .into_iter()
                .filter_map(|name| reg.id_by_name(&name).map(|id| Block { id }))
                .collect(),
            Err(e) => {
                log::warn!("hotbar.toml parse error: {}", e);
                Vec::new()
            }
        },
        Err(e) => {
            log::warn!("hotbar.toml read error: {}", e);
            Vec::new()
        }
    }
}
