//! Game state and core simulation types
//!
//! Everything the loop mutates per tick lives here. Positions are whole
//! pixels; speeds are fractional and truncated when applied.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::scroll::BackgroundScroll;
use super::stage::{STAGES, Stage};
use crate::consts::*;
use crate::ground_rest_y;

/// Current phase of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Loop is advancing
    #[default]
    Running,
    /// Player hit an obstacle; frozen until restart
    GameOver,
}

/// The player-controlled runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; x never changes
    pub pos: IVec2,
    pub size: IVec2,
    /// Vertical velocity in units/tick (negative is up)
    pub vel_y: i32,
    /// Resting on the ground and allowed to jump
    pub grounded: bool,
}

impl Default for Player {
    fn default() -> Self {
        let size = IVec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        Self {
            pos: IVec2::new(PLAYER_X, ground_rest_y(size.y)),
            size,
            vel_y: 0,
            grounded: true,
        }
    }
}

impl Player {
    /// y at which the player stands on the ground
    #[inline]
    pub fn rest_y(&self) -> i32 {
        ground_rest_y(self.size.y)
    }

    /// Start a jump. Returns false (and changes nothing) unless grounded.
    pub fn jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.vel_y = JUMP_IMPULSE;
        self.grounded = false;
        true
    }

    /// One Euler step: move by velocity, then either land or accelerate.
    pub fn integrate(&mut self) {
        self.pos.y += self.vel_y;
        let rest = self.rest_y();
        if self.pos.y >= rest {
            self.pos.y = rest;
            self.vel_y = 0;
            self.grounded = true;
        } else {
            self.vel_y += GRAVITY;
        }
    }
}

/// An obstacle scrolling in from the right edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
    /// Special obstacles are smaller, faster and bounce vertically
    pub special: bool,
    /// +1 (down) or -1 (up); only used when special
    pub bounce_dir: i32,
}

impl Obstacle {
    /// Create an obstacle standing on the ground at `x`
    pub fn new(id: u32, x: i32, size: IVec2, special: bool, bounce_dir: i32) -> Self {
        Self {
            id,
            pos: IVec2::new(x, ground_rest_y(size.y)),
            size,
            special,
            bounce_dir,
        }
    }

    /// Horizontal pixels this obstacle covers per tick at `scroll_speed`
    pub fn step(&self, scroll_speed: f64) -> i32 {
        let factor = if self.special {
            SPECIAL_SPEED_FACTOR
        } else {
            NORMAL_SPEED_FACTOR
        };
        (scroll_speed * factor) as i32
    }

    /// Move left one tick; specials also bounce between ceiling and ground
    pub fn advance(&mut self, scroll_speed: f64) {
        self.pos.x -= self.step(scroll_speed);
        if self.special {
            self.pos.y += self.bounce_dir * BOUNCE_STEP;
            if self.pos.y < BOUNCE_CEILING_Y || self.pos.y > ground_rest_y(self.size.y) {
                self.bounce_dir = -self.bounce_dir;
            }
        }
    }

    #[inline]
    pub fn right_edge(&self) -> i32 {
        self.pos.x + self.size.x
    }

    /// Fully past the left edge of the viewport
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right_edge() < 0
    }
}

/// Complete per-session game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Base speed chosen at session start (difficulty)
    pub initial_base_speed: f64,
    /// Base speed as escalated by completed stage cycles.
    /// Survives `reset()`; see DESIGN.md.
    pub base_speed: f64,
    /// Background scroll in pixels/tick
    pub scroll_speed: f64,
    /// Current stage index into `STAGES`
    pub stage: usize,
    /// Milliseconds spent in the current stage
    pub stage_elapsed_ms: u64,
    /// Full stage cycles completed this run
    pub cycles: u32,
    /// Obstacles dodged
    pub score: u64,
    pub phase: GamePhase,
    /// Ticks left before the next spawn roll
    pub spawn_cooldown: u32,
    /// Simulation ticks advanced this run
    pub time_ticks: u64,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub scroll: BackgroundScroll,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session at the given base speed
    pub fn new(base_speed: f64) -> Self {
        Self {
            initial_base_speed: base_speed,
            base_speed,
            scroll_speed: base_speed,
            stage: 0,
            stage_elapsed_ms: 0,
            cycles: 0,
            score: 0,
            phase: GamePhase::Running,
            spawn_cooldown: 0,
            time_ticks: 0,
            player: Player::default(),
            obstacles: Vec::new(),
            scroll: BackgroundScroll::new(VIEWPORT_WIDTH),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Table entry for the current stage
    pub fn current_stage(&self) -> &'static Stage {
        &STAGES[self.stage % STAGES.len()]
    }

    /// Start a fresh run in the same session.
    ///
    /// `base_speed` keeps any cycle escalation from earlier runs.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.score = 0;
        self.spawn_cooldown = 0;
        self.phase = GamePhase::Running;
        self.stage = 0;
        self.cycles = 0;
        self.scroll_speed = self.base_speed;
        self.scroll.reset();
        self.stage_elapsed_ms = 0;
        self.time_ticks = 0;
        self.player = Player::default();
        log::info!(
            "Run restarted at scroll speed {:.2} (session base {:.2})",
            self.scroll_speed,
            self.initial_base_speed
        );
    }
}
