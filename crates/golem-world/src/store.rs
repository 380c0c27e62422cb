use std::collections::HashMap;

use golem_blocks::{Block, RenderAttrs};

/// A placed object occupying one lattice cell.
///
/// Voxels carry render attributes copied from the registry at construction
/// time; a spawner carries its accumulation timer inline.
#[derive(Clone, Debug, PartialEq)]
pub enum WorldObject {
    Voxel { block: Block, attrs: RenderAttrs },
    Spawner { interval: f32, timer: f32 },
}

impl WorldObject {
    #[inline]
    pub fn is_voxel(&self) -> bool {
        matches!(self, WorldObject::Voxel { .. })
    }
}

/// Lattice map of placed objects, keyed by integer world coordinates.
/// Sole authority for object existence: placement inserts here, breaking
/// removes from here, and the pointer raycast and mob ground probe read it.
#[derive(Default)]
pub struct WorldStore {
    inner: HashMap<(i32, i32, i32), WorldObject>,
}

impl WorldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<&WorldObject> {
        self.inner.get(&(x, y, z))
    }

    /// Insert at a cell, returning the displaced occupant if the cell was
    /// taken. Duplicate-coordinate placement overwrites (last write wins).
    pub fn insert(&mut self, x: i32, y: i32, z: i32, obj: WorldObject) -> Option<WorldObject> {
        self.inner.insert((x, y, z), obj)
    }

    /// Remove whatever occupies the cell. Removing an empty cell is a no-op.
    pub fn remove(&mut self, x: i32, y: i32, z: i32) -> Option<WorldObject> {
        self.inner.remove(&(x, y, z))
    }

    #[inline]
    pub fn is_occupied(&self, x: i32, y: i32, z: i32) -> bool {
        self.inner.contains_key(&(x, y, z))
    }

    /// True only for voxel occupants; spawner cells do not count as ground.
    #[inline]
    pub fn is_voxel(&self, x: i32, y: i32, z: i32) -> bool {
        self.get(x, y, z).is_some_and(|o| o.is_voxel())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(i32, i32, i32), &WorldObject)> {
        self.inner.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&(i32, i32, i32), &mut WorldObject)> {
        self.inner.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voxel(id: u16) -> WorldObject {
        WorldObject::Voxel {
            block: Block { id },
            attrs: RenderAttrs {
                texture: "grass".into(),
                tint: golem_blocks::Rgba::WHITE,
            },
        }
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = WorldStore::new();
        store.insert(5, 3, 5, voxel(1));
        assert!(store.remove(5, 3, 5).is_some());
        // Breaking the same cell again must be a no-op, not a fault.
        assert!(store.remove(5, 3, 5).is_none());
        assert!(store.remove(5, 3, 5).is_none());
    }

    #[test]
    fn insert_overwrites_and_reports_displaced() {
        let mut store = WorldStore::new();
        assert!(store.insert(0, 0, 0, voxel(1)).is_none());
        let displaced = store.insert(0, 0, 0, voxel(2));
        assert!(matches!(
            displaced,
            Some(WorldObject::Voxel { block, .. }) if block.id == 1
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn spawner_cells_are_occupied_but_not_ground() {
        let mut store = WorldStore::new();
        store.insert(
            2,
            0,
            2,
            WorldObject::Spawner {
                interval: 5.0,
                timer: 0.0,
            },
        );
        assert!(store.is_occupied(2, 0, 2));
        assert!(!store.is_voxel(2, 0, 2));
        store.insert(3, 0, 2, voxel(1));
        assert!(store.is_voxel(3, 0, 2));
    }
}
