//! Read-only view of the game for renderers
//!
//! A `Snapshot` carries everything needed to draw one frame, so a renderer
//! never touches `GameState` directly.

use serde::Serialize;

use super::state::{GameState, Obstacle, Player};
use crate::consts::*;

/// Overlay drawn over special obstacles (RGBA, semi-transparent yellow)
pub const SPECIAL_HIGHLIGHT: [u8; 4] = [255, 255, 0, 100];

/// Screen-space rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RectView {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl From<&Player> for RectView {
    fn from(player: &Player) -> Self {
        Self {
            x: player.pos.x,
            y: player.pos.y,
            width: player.size.x,
            height: player.size.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObstacleView {
    pub id: u32,
    pub rect: RectView,
    pub special: bool,
    /// Tint to draw on top of the sprite, if any
    pub highlight: Option<[u8; 4]>,
}

impl From<&Obstacle> for ObstacleView {
    fn from(obstacle: &Obstacle) -> Self {
        Self {
            id: obstacle.id,
            rect: RectView {
                x: obstacle.pos.x,
                y: obstacle.pos.y,
                width: obstacle.size.x,
                height: obstacle.size.y,
            },
            special: obstacle.special,
            highlight: obstacle.special.then_some(SPECIAL_HIGHLIGHT),
        }
    }
}

/// Fixed playfield layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Geometry {
    pub viewport_width: i32,
    pub viewport_height: i32,
    pub ground_y: i32,
    pub ground_thickness: i32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            ground_y: GROUND_Y,
            ground_thickness: GROUND_THICKNESS,
        }
    }
}

/// Text the HUD shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score_label: String,
    pub stage_label: String,
    /// Title and prompt shown once the run is over
    pub game_over: Option<(String, String)>,
}

/// One renderable frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub player: RectView,
    /// Obstacles in spawn order
    pub obstacles: Vec<ObstacleView>,
    /// Left edges of the two backdrop tiles
    pub background_offsets: [i32; 2],
    pub stage_index: usize,
    pub stage_name: &'static str,
    pub backdrop: &'static str,
    pub obstacle_sprite: &'static str,
    pub score: u64,
    pub game_over: bool,
    pub scroll_speed: f64,
    pub geometry: Geometry,
    pub hud: Hud,
}

impl Snapshot {
    /// Capture the current frame
    pub fn capture(state: &GameState) -> Self {
        let stage = state.current_stage();
        let game_over = state.is_game_over();
        Self {
            player: RectView::from(&state.player),
            obstacles: state.obstacles.iter().map(ObstacleView::from).collect(),
            background_offsets: state.scroll.offsets,
            stage_index: state.stage,
            stage_name: stage.name,
            backdrop: stage.backdrop,
            obstacle_sprite: stage.obstacle_sprite,
            score: state.score,
            game_over,
            scroll_speed: state.scroll_speed,
            geometry: Geometry::default(),
            hud: Hud {
                score_label: format!("Score: {}", state.score),
                stage_label: format!("Stage: {}", stage.name),
                game_over: game_over
                    .then(|| ("Game Over!".to_string(), "Press R to Restart".to_string())),
            },
        }
    }

    /// Serialize for out-of-process renderers
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
