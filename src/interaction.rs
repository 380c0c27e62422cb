use golem_blocks::{Block, BlockRegistry};

// HUD anchor positions and lifetimes for transient notices.
pub const NOTICE_SELECT_POS: (f32, f32) = (-0.4, 0.4);
pub const NOTICE_SPAWNER_POS: (f32, f32) = (-0.4, -0.5);
pub const NOTICE_MOB_POS: (f32, f32) = (-0.4, -0.4);
pub const NOTICE_SHORT: f32 = 1.0;
pub const NOTICE_LONG: f32 = 3.0;

/// A transient on-screen text notification; expires after `ttl` seconds.
#[derive(Clone, Debug)]
pub struct Notice {
    pub text: String,
    pub pos: (f32, f32),
    pub ttl: f32,
}

/// Explicit interaction state: the active hotbar selection, the hand-preview
/// texture, and pending notices. Passed through the handlers instead of
/// living in process globals so it can be tested without a host engine.
pub struct InteractionState {
    pub selection: Block,
    pub hand_texture: String,
    pub notices: Vec<Notice>,
}

impl InteractionState {
    pub fn new(reg: &BlockRegistry) -> Self {
        let selection = Block {
            id: reg.fallback_block_id(),
        };
        Self {
            hand_texture: reg.lookup(selection.id).texture.clone(),
            selection,
            notices: Vec::new(),
        }
    }

    pub fn push_notice(&mut self, text: impl Into<String>, pos: (f32, f32), ttl: f32) {
        self.notices.push(Notice {
            text: text.into(),
            pos,
            ttl,
        });
    }

    /// Change the active selection, refresh the hand preview, and announce
    /// the newly selected block.
    pub fn select(&mut self, reg: &BlockRegistry, block: Block) {
        self.selection = block;
        let ty = reg.lookup(block.id);
        self.hand_texture = ty.texture.clone();
        self.push_notice(
            format!("Block Selected: {}", display_name(&ty.name)),
            NOTICE_SELECT_POS,
            NOTICE_SHORT,
        );
    }

    pub fn expire_notices(&mut self, dt: f32) {
        for n in &mut self.notices {
            n.ttl -= dt;
        }
        self.notices.retain(|n| n.ttl > 0.0);
    }
}

fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
