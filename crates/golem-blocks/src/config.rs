use serde::Deserialize;

use super::types::{BlockId, Rgba};

/// Top-level shape of `blocks.toml`.
#[derive(Clone, Debug, Deserialize)]
pub struct BlocksConfig {
    /// Name of the block whose attributes back unknown-id lookups.
    pub fallback_block: Option<String>,
    pub blocks: Vec<BlockDef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BlockDef {
    pub name: String,
    pub id: Option<BlockId>,
    pub texture: String,
    #[serde(default = "default_tint")]
    pub tint: Rgba,
    #[serde(default)]
    pub spawner: bool,
}

fn default_tint() -> Rgba {
    Rgba::WHITE
}
