//! Cat Run - a side-scrolling obstacle jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, stages, scoring)
//! - `game_loop`: Session owner driven by an external fixed-interval timer
//! - `settings`: Difficulty selection and runtime configuration

pub mod game_loop;
pub mod settings;
pub mod sim;

pub use game_loop::{GameLoop, RunSummary};
pub use settings::{Difficulty, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Nominal timer period in milliseconds (50 Hz)
    pub const TICK_MS: u64 = 20;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: i32 = 1280;
    pub const VIEWPORT_HEIGHT: i32 = 720;
    /// Top edge of the ground strip
    pub const GROUND_Y: i32 = 600;
    /// Height of the ground strip drawn below `GROUND_Y`
    pub const GROUND_THICKNESS: i32 = 20;

    /// Player defaults
    pub const PLAYER_X: i32 = 50;
    pub const PLAYER_WIDTH: i32 = 80;
    pub const PLAYER_HEIGHT: i32 = 80;
    /// Upward velocity applied by a jump (units/tick)
    pub const JUMP_IMPULSE: i32 = -20;
    /// Downward acceleration (units/tick²)
    pub const GRAVITY: i32 = 1;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: i32 = 60;
    /// Chance (percent) of a spawn roll succeeding once the cooldown is spent
    pub const SPAWN_CHANCE_PERCENT: u32 = 4;
    /// Chance (percent) that a spawned obstacle is special
    pub const SPECIAL_CHANCE_PERCENT: u32 = 15;
    /// Ticks between a spawn and the next spawn roll
    pub const SPAWN_COOLDOWN_TICKS: u32 = 60;
    /// Special obstacle size range, as a fraction of `OBSTACLE_SIZE`
    pub const SPECIAL_SCALE_MIN: f64 = 0.6;
    pub const SPECIAL_SCALE_SPAN: f64 = 0.3;
    /// Obstacles outrun the background by these factors
    pub const NORMAL_SPEED_FACTOR: f64 = 1.4;
    pub const SPECIAL_SPEED_FACTOR: f64 = 1.6;
    /// Vertical bounce of special obstacles
    pub const BOUNCE_STEP: i32 = 3;
    pub const BOUNCE_CEILING_Y: i32 = 450;

    /// Hitbox insets
    pub const PLAYER_HITBOX_INSET: i32 = 10;
    pub const PLAYER_HITBOX_HEIGHT_TRIM: i32 = 15;
    pub const OBSTACLE_HITBOX_INSET: i32 = 5;

    /// Stage progression
    pub const STAGE_DURATION_MS: u64 = 25_000;
    /// Base speed multiplier applied after each full stage cycle
    pub const CYCLE_SPEED_MULTIPLIER: f64 = 1.2;
}

/// Resting y of anything `height` tall standing on the ground
#[inline]
pub fn ground_rest_y(height: i32) -> i32 {
    consts::GROUND_Y - height
}
