//! Mob and spawner per-tick behavior.
#![forbid(unsafe_code)]

pub mod mob;
pub mod spawner;

pub use mob::Mob;
pub use spawner::{SPAWN_INTERVAL, tick_spawners};
