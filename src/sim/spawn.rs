//! Obstacle spawning
//!
//! Randomness is injected through `SpawnRoll` so a session can be replayed
//! from a seed, and tests can script every roll.

use glam::IVec2;
use rand::Rng;

use super::state::{GameState, Obstacle};
use crate::consts::*;

/// Source of the random rolls the spawner needs
pub trait SpawnRoll {
    /// Uniform integer in `0..100`
    fn percent(&mut self) -> u32;
    /// Uniform float in `[0, 1)`
    fn unit(&mut self) -> f64;
}

impl<R: Rng> SpawnRoll for R {
    fn percent(&mut self) -> u32 {
        self.random_range(0..100)
    }

    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Build a new obstacle at the right edge of the viewport
pub fn roll_obstacle<R: SpawnRoll + ?Sized>(id: u32, special: bool, rng: &mut R) -> Obstacle {
    if special {
        let scale = SPECIAL_SCALE_MIN + rng.unit() * SPECIAL_SCALE_SPAN;
        let side = (f64::from(OBSTACLE_SIZE) * scale) as i32;
        let bounce_dir = if rng.percent() < 50 { -1 } else { 1 };
        Obstacle::new(id, VIEWPORT_WIDTH, IVec2::splat(side), true, bounce_dir)
    } else {
        Obstacle::new(id, VIEWPORT_WIDTH, IVec2::splat(OBSTACLE_SIZE), false, -1)
    }
}

/// Run the spawner for one tick.
///
/// While the cooldown is running it only counts down. Once spent, a 4% roll
/// decides whether an obstacle appears; a spawn restarts the cooldown.
/// Returns the new obstacle's ID.
pub fn spawn_step<R: SpawnRoll + ?Sized>(state: &mut GameState, rng: &mut R) -> Option<u32> {
    if state.spawn_cooldown > 0 {
        state.spawn_cooldown -= 1;
        return None;
    }
    if rng.percent() >= SPAWN_CHANCE_PERCENT {
        return None;
    }

    let special = rng.percent() < SPECIAL_CHANCE_PERCENT;
    let id = state.next_entity_id();
    let obstacle = roll_obstacle(id, special, rng);
    log::debug!(
        "Spawned {} obstacle {} ({}x{})",
        if special { "special" } else { "normal" },
        id,
        obstacle.size.x,
        obstacle.size.y
    );
    state.obstacles.push(obstacle);
    state.spawn_cooldown = SPAWN_COOLDOWN_TICKS;
    Some(id)
}
