//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seedable RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod scroll;
pub mod snapshot;
pub mod spawn;
pub mod stage;
pub mod state;
pub mod tick;

pub use collision::{Hitbox, obstacle_hitbox, player_hitbox, player_hits};
pub use scroll::BackgroundScroll;
pub use snapshot::{Geometry, Hud, ObstacleView, RectView, SPECIAL_HIGHLIGHT, Snapshot};
pub use spawn::{SpawnRoll, roll_obstacle, spawn_step};
pub use stage::{STAGES, Stage, StageAdvance, advance_stage_clock};
pub use state::{GamePhase, GameState, Obstacle, Player};
pub use tick::{TickEvents, TickInput, tick};
