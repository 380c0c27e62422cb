use golem_geom::Vec3;
use golem_sim::{Mob, SPAWN_INTERVAL, tick_spawners};
use golem_world::WorldObject;

use crate::event::{Event, EventQueue};
use crate::gamestate::GameState;
use crate::interaction::{NOTICE_LONG, NOTICE_MOB_POS, NOTICE_SHORT, NOTICE_SPAWNER_POS};
use crate::raycast::{self, RayHit};

/// Maximum pointer-targeting distance in blocks.
pub const POINTER_REACH: f32 = 32.0;

/// The host-reported pick ray for the current frame.
#[derive(Clone, Copy, Debug)]
pub struct PointerRay {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// One logical tick per host frame: drain this tick's events, advance
/// spawners and mobs, expire notices. Runs to completion; single-threaded.
pub struct Session {
    pub gs: GameState,
    pub queue: EventQueue,
}

impl Session {
    pub fn new(gs: GameState) -> Self {
        Self {
            gs,
            queue: EventQueue::new(),
        }
    }

    pub fn step(&mut self, dt: f32, pointer: Option<PointerRay>) {
        while let Some(env) = self.queue.pop_ready() {
            Self::log_event(self.gs.tick, &env.kind);
            self.handle_event(env.kind, pointer);
        }

        let spawned = tick_spawners(&mut self.gs.store, dt);
        for pos in spawned {
            log::info!(
                target: "events",
                "[tick {}] MobSpawned at ({:.1}, {:.1}, {:.1})",
                self.gs.tick, pos.x, pos.y, pos.z
            );
            self.gs.mobs.push(Mob::new(pos));
            self.gs
                .interaction
                .push_notice("Mob Spawned!", NOTICE_MOB_POS, NOTICE_SHORT);
        }

        let GameState {
            store, mobs, rng, ..
        } = &mut self.gs;
        for mob in mobs.iter_mut() {
            mob.update(dt, rng, |x, y, z| store.is_voxel(x, y, z));
        }

        self.gs.interaction.expire_notices(dt);
        self.queue.advance_tick();
        self.gs.tick = self.queue.now;
    }

    /// Recomputed from the host's pick ray every time it is needed; the
    /// session holds no targeting state across frames.
    pub fn pointer_target(&self, pointer: Option<PointerRay>) -> Option<RayHit> {
        let ray = pointer?;
        raycast::raycast_first_hit_with_face(ray.origin, ray.dir, POINTER_REACH, |x, y, z| {
            self.gs.store.is_occupied(x, y, z)
        })
    }

    fn handle_event(&mut self, kind: Event, pointer: Option<PointerRay>) {
        match kind {
            Event::Tick => {}
            Event::SlotSelected { slot } => self.handle_slot_selected(slot),
            Event::RaycastEditRequested { place } => self.handle_raycast_edit(place, pointer),
        }
    }

    fn handle_slot_selected(&mut self, slot: usize) {
        let Some(block) = self.gs.hotbar.get(slot).copied() else {
            log::warn!("hotbar slot {} is not configured", slot);
            return;
        };
        self.gs.interaction.select(&self.gs.reg, block);
    }

    fn handle_raycast_edit(&mut self, place: bool, pointer: Option<PointerRay>) {
        // Both actions require a live pointer target.
        let Some(hit) = self.pointer_target(pointer) else {
            return;
        };
        if !place {
            // The cell may already have been emptied this tick; removal of
            // an absent occupant is a no-op.
            self.gs.store.remove(hit.bx, hit.by, hit.bz);
            return;
        }

        let (tx, ty, tz) = (hit.bx + hit.nx, hit.by + hit.ny, hit.bz + hit.nz);
        let sel = self.gs.interaction.selection;
        let reg = self.gs.reg.clone();
        if reg.is_spawner(sel.id) {
            self.gs.store.insert(
                tx,
                ty,
                tz,
                WorldObject::Spawner {
                    interval: SPAWN_INTERVAL,
                    timer: 0.0,
                },
            );
            self.gs.interaction.push_notice(
                format!("Spawner placed at ({}, {}, {})", tx, ty, tz),
                NOTICE_SPAWNER_POS,
                NOTICE_LONG,
            );
        } else {
            self.gs.store.insert(
                tx,
                ty,
                tz,
                WorldObject::Voxel {
                    block: sel,
                    attrs: reg.render_attrs(sel.id),
                },
            );
        }
        // Hand preview reflects the block just used.
        self.gs.interaction.hand_texture = reg.lookup(sel.id).texture.clone();
    }

    fn log_event(tick: u64, ev: &Event) {
        use crate::event::Event as E;
        match ev {
            E::Tick => {
                log::trace!(target: "events", "[tick {}] Tick", tick);
            }
            E::SlotSelected { slot } => {
                log::info!(target: "events", "[tick {}] SlotSelected slot={}", tick, slot);
            }
            E::RaycastEditRequested { place } => {
                log::info!(
                    target: "events",
                    "[tick {}] RaycastEditRequested place={}", tick, place
                );
            }
        }
    }
}
