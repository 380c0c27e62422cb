use golem_geom::Vec3;
use golem_world::{WorldObject, WorldStore};

/// Default seconds between spawns for a newly placed spawner.
pub const SPAWN_INTERVAL: f32 = 5.0;

/// Mobs appear slightly above the spawner cell.
const SPAWN_LIFT: f32 = 1.5;

/// Accumulate elapsed time on every spawner in the store and return the
/// positions where a mob should appear this tick. On spawn the accumulator
/// resets to exactly zero, truncating any overshoot rather than carrying the
/// remainder into the next interval.
pub fn tick_spawners(store: &mut WorldStore, dt: f32) -> Vec<Vec3> {
    let mut spawned = Vec::new();
    for (&(x, y, z), obj) in store.iter_mut() {
        if let WorldObject::Spawner { interval, timer } = obj {
            *timer += dt;
            if *timer >= *interval {
                *timer = 0.0;
                log::debug!("spawner at ({}, {}, {}) fired", x, y, z);
                spawned.push(Vec3::new(x as f32, y as f32 + SPAWN_LIFT, z as f32));
            }
        }
    }
    spawned
}
