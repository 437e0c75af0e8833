//! Fixed timestep simulation tick
//!
//! Core game loop step: advances the state by one timer period.

use super::collision::player_hits;
use super::spawn::{SpawnRoll, spawn_step};
use super::stage::{StageAdvance, advance_stage_clock};
use super::state::{GamePhase, GameState};

/// Input events collected since the previous tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump key went down
    pub jump: bool,
    /// Restart key went down (honored only after game over)
    pub restart: bool,
}

/// What happened during one tick, for renderers and audio hooks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// A frozen run was restarted
    pub restarted: bool,
    /// The player left the ground
    pub jumped: bool,
    /// ID of the obstacle spawned this tick
    pub spawned: Option<u32>,
    /// Obstacles that left the screen (one point each)
    pub cleared: u32,
    /// The player hit an obstacle; the run is over
    pub collided: bool,
    pub stage_advanced: Option<StageAdvance>,
}

/// Advance the game state by one tick.
///
/// `dt_ms` is the real time covered by this tick and only feeds the stage
/// clock; all movement is per tick. A collision ends the run after the tick
/// completes, stage check included.
pub fn tick<R: SpawnRoll + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut R,
    dt_ms: u64,
) -> TickEvents {
    let mut events = TickEvents::default();

    if input.restart && state.is_game_over() {
        state.reset();
        events.restarted = true;
    }

    // Frozen until restarted
    if state.is_game_over() {
        return events;
    }

    if input.jump {
        events.jumped = state.player.jump();
    }

    state.time_ticks += 1;

    state.player.integrate();
    state.scroll.advance(state.scroll_speed);
    events.spawned = spawn_step(state, rng);

    // Move, hit-test, then drop anything that left the screen
    let player = &state.player;
    let speed = state.scroll_speed;
    let mut collided = false;
    let mut cleared = 0;
    state.obstacles.retain_mut(|obstacle| {
        obstacle.advance(speed);
        if player_hits(player, obstacle) {
            collided = true;
        }
        if obstacle.is_off_screen() {
            cleared += 1;
            false
        } else {
            true
        }
    });
    state.score += u64::from(cleared);
    events.cleared = cleared;

    if collided {
        state.phase = GamePhase::GameOver;
        events.collided = true;
        log::info!(
            "Game over: score {} in stage {} ({}) after {} ticks",
            state.score,
            state.stage,
            state.current_stage().name,
            state.time_ticks
        );
    }

    // The stage clock runs in real time, so the crash tick still checks it
    events.stage_advanced = advance_stage_clock(state, dt_ms);
    events
}
