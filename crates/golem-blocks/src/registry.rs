use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config::BlocksConfig;
use super::types::{BlockId, BlockType, RenderAttrs};

/// Immutable block-type table. Built once at startup from `blocks.toml`;
/// lookups by id are total and fall back to the configured fallback block.
#[derive(Default, Clone, Debug)]
pub struct BlockRegistry {
    blocks: Vec<Option<BlockType>>,
    by_name: HashMap<String, BlockId>,
    fallback_block_id: BlockId,
}

impl BlockRegistry {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: BlocksConfig = toml::from_str(toml_str)?;
        Self::from_configs(cfg)
    }

    pub fn from_configs(cfg: BlocksConfig) -> Result<Self, Box<dyn Error>> {
        if cfg.blocks.is_empty() {
            return Err("blocks config defines no blocks".into());
        }
        let mut blocks: Vec<Option<BlockType>> = Vec::new();
        let mut by_name: HashMap<String, BlockId> = HashMap::new();
        for def in cfg.blocks.into_iter() {
            let id = def.id.unwrap_or(blocks.len() as BlockId);
            if blocks.len() <= id as usize {
                blocks.resize(id as usize + 1, None);
            }
            if blocks[id as usize].is_some() {
                return Err(format!("duplicate block id {}", id).into());
            }
            if by_name.contains_key(&def.name) {
                return Err(format!("duplicate block name {:?}", def.name).into());
            }
            by_name.insert(def.name.clone(), id);
            blocks[id as usize] = Some(BlockType {
                id,
                name: def.name,
                texture: def.texture,
                tint: def.tint,
                spawner: def.spawner,
            });
        }
        let fallback_name = cfg.fallback_block.as_deref().unwrap_or("grass");
        let fallback_block_id = *by_name
            .get(fallback_name)
            .ok_or_else(|| format!("fallback block {:?} is not defined", fallback_name))?;
        Ok(Self {
            blocks,
            by_name,
            fallback_block_id,
        })
    }

    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks.get(id as usize).and_then(|t| t.as_ref())
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    #[inline]
    pub fn fallback_block_id(&self) -> BlockId {
        self.fallback_block_id
    }

    /// Total lookup: ids absent from the table resolve to the fallback block.
    #[inline]
    pub fn lookup(&self, id: BlockId) -> &BlockType {
        self.get(id).unwrap_or_else(|| {
            self.get(self.fallback_block_id)
                .expect("fallback block validated at construction")
        })
    }

    /// Render attributes for `id`, copied out for a newly placed voxel.
    pub fn render_attrs(&self, id: BlockId) -> RenderAttrs {
        self.lookup(id).render_attrs()
    }

    pub fn is_spawner(&self, id: BlockId) -> bool {
        self.lookup(id).spawner
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockType> {
        self.blocks.iter().filter_map(|t| t.as_ref())
    }
}
