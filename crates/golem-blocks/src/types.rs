use serde::Deserialize;

pub type BlockId = u16;

/// A typed block reference as stored in the world lattice.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Block {
    pub id: BlockId,
}

/// Tint color applied over a block texture. Deserializes from `[r, g, b, a]`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(from = "[u8; 4]")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const LIGHT_GRAY: Rgba = Rgba::new(200, 200, 200, 255);
    pub const BROWN: Rgba = Rgba::new(150, 90, 62, 255);
    pub const RED: Rgba = Rgba::new(255, 0, 0, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<[u8; 4]> for Rgba {
    #[inline]
    fn from(v: [u8; 4]) -> Self {
        Rgba::new(v[0], v[1], v[2], v[3])
    }
}

/// Immutable per-type block metadata, defined once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockType {
    pub id: BlockId,
    pub name: String,
    pub texture: String,
    pub tint: Rgba,
    /// Placing this type creates a mob spawner instead of a plain voxel.
    pub spawner: bool,
}

impl BlockType {
    /// Snapshot of the render attributes a placed voxel carries. Copied at
    /// construction time, never a live reference back into the registry.
    pub fn render_attrs(&self) -> RenderAttrs {
        RenderAttrs {
            texture: self.texture.clone(),
            tint: self.tint,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderAttrs {
    pub texture: String,
    pub tint: Rgba,
}
