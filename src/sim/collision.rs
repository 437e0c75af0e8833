//! Axis-aligned hitboxes
//!
//! Sprites are drawn larger than what counts as a hit: the player's box is
//! trimmed on the sides and top, obstacles are inset evenly on all sides.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::{Obstacle, Player};
use crate::consts::{OBSTACLE_HITBOX_INSET, PLAYER_HITBOX_HEIGHT_TRIM, PLAYER_HITBOX_INSET};

/// Integer rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hitbox {
    pub min: IVec2,
    pub size: IVec2,
}

impl Hitbox {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            min: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    /// Exclusive bottom-right corner
    #[inline]
    pub fn max(&self) -> IVec2 {
        self.min + self.size
    }

    /// A box with no positive area can never be hit
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// Positive-area overlap test. Shared edges do not count.
    pub fn intersects(&self, other: &Hitbox) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }
}

/// Hitbox of the player sprite
pub fn player_hitbox(player: &Player) -> Hitbox {
    Hitbox::new(
        player.pos.x + PLAYER_HITBOX_INSET,
        player.pos.y + PLAYER_HITBOX_INSET,
        player.size.x - 2 * PLAYER_HITBOX_INSET,
        player.size.y - PLAYER_HITBOX_HEIGHT_TRIM,
    )
}

/// Hitbox of an obstacle sprite
pub fn obstacle_hitbox(obstacle: &Obstacle) -> Hitbox {
    Hitbox::new(
        obstacle.pos.x + OBSTACLE_HITBOX_INSET,
        obstacle.pos.y + OBSTACLE_HITBOX_INSET,
        obstacle.size.x - 2 * OBSTACLE_HITBOX_INSET,
        obstacle.size.y - 2 * OBSTACLE_HITBOX_INSET,
    )
}

/// Does the player currently touch this obstacle?
pub fn player_hits(player: &Player, obstacle: &Obstacle) -> bool {
    player_hitbox(player).intersects(&obstacle_hitbox(obstacle))
}
