use golem_geom::{Aabb, Vec3};

/// Approach rate toward the wander target (exponential decay, not an ETA).
const MOB_SPEED: f32 = 0.5;
/// Constant fall rate applied while unsupported. Not gravity integration.
const FALL_SPEED: f32 = 2.0;
/// Horizontal wander offsets are drawn from `[-WANDER_RANGE, WANDER_RANGE]`.
const WANDER_RANGE: f32 = 5.0;
/// Retarget countdown is drawn from `[RETARGET_MIN, RETARGET_MAX]` seconds.
const RETARGET_MIN: f32 = 2.0;
const RETARGET_MAX: f32 = 5.0;
/// Ground probe: start slightly above the feet, look a short way down.
const PROBE_LIFT: f32 = 0.1;
const PROBE_DIST: f32 = 0.6;
/// Half-extents of the mob's bounding box; `pos` is at the feet.
const HALF_EXTENT: f32 = 0.25;

/// A wandering non-player entity. Spawned by spawners, never despawned;
/// the population is unbounded by design of the source material.
#[derive(Clone, Debug)]
pub struct Mob {
    pub pos: Vec3,
    pub target: Vec3,
    pub retarget_in: f32,
}

impl Mob {
    pub fn new(pos: Vec3) -> Self {
        Self {
            pos,
            target: pos,
            retarget_in: 0.0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::centered(
            self.pos + Vec3::UP * HALF_EXTENT,
            Vec3::new(HALF_EXTENT, HALF_EXTENT, HALF_EXTENT),
        )
    }

    /// One simulation tick: count down to a new horizontal wander target,
    /// ease toward the current target, and fall at a constant rate when the
    /// downward probe finds no voxel beneath the feet.
    pub fn update(
        &mut self,
        dt: f32,
        rng: &mut fastrand::Rng,
        is_voxel: impl Fn(i32, i32, i32) -> bool,
    ) {
        self.retarget_in -= dt;
        if self.retarget_in <= 0.0 {
            let dx = rng.f32() * (2.0 * WANDER_RANGE) - WANDER_RANGE;
            let dz = rng.f32() * (2.0 * WANDER_RANGE) - WANDER_RANGE;
            // Horizontal wander only: the target keeps the current height.
            self.target = Vec3::new(self.pos.x + dx, self.pos.y, self.pos.z + dz);
            self.retarget_in = RETARGET_MIN + rng.f32() * (RETARGET_MAX - RETARGET_MIN);
        }

        self.pos = self.pos.lerp(self.target, dt * MOB_SPEED);

        if !self.grounded(&is_voxel) {
            self.pos.y -= FALL_SPEED * dt;
        }
    }

    /// Probe straight down from just above the feet; only voxel cells count
    /// as ground (spawner cells do not).
    pub fn grounded(&self, is_voxel: &impl Fn(i32, i32, i32) -> bool) -> bool {
        let cx = self.pos.x.floor() as i32;
        let cz = self.pos.z.floor() as i32;
        let top = self.bounds().min.y + PROBE_LIFT;
        let bottom = top - PROBE_DIST;
        let mut cy = top.floor() as i32;
        let cy_end = bottom.floor() as i32;
        while cy >= cy_end {
            if is_voxel(cx, cy, cz) {
                return true;
            }
            cy -= 1;
        }
        false
    }
}
