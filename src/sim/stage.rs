//! Timed stage progression
//!
//! Four stages cycle forever. Each one lasts `STAGE_DURATION_MS`; finishing
//! the last stage escalates the base speed before starting over.

use serde::Serialize;

use super::state::GameState;
use crate::consts::{CYCLE_SPEED_MULTIPLIER, STAGE_DURATION_MS};

/// Static description of one stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stage {
    /// Display name for the HUD
    pub name: &'static str,
    /// Added to the base speed while this stage is active
    pub speed_offset: f64,
    /// Backdrop image path, relative to the asset root
    pub backdrop: &'static str,
    /// Obstacle sprite path, relative to the asset root
    pub obstacle_sprite: &'static str,
}

pub static STAGES: [Stage; 4] = [
    Stage {
        name: "City",
        speed_offset: 0.0,
        backdrop: "background/city.jpg",
        obstacle_sprite: "pic/cucumber.png",
    },
    Stage {
        name: "Night",
        speed_offset: 1.0,
        backdrop: "background/night.jpg",
        obstacle_sprite: "pic/car.png",
    },
    Stage {
        name: "Forest",
        speed_offset: 2.0,
        backdrop: "background/forest.jpg",
        obstacle_sprite: "pic/rock.png",
    },
    Stage {
        name: "Sea",
        speed_offset: 3.0,
        backdrop: "background/sea2.jpg",
        obstacle_sprite: "pic/shark.png",
    },
];

/// Result of a stage transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageAdvance {
    /// Stage index now active
    pub stage: usize,
    /// True when the transition wrapped back to the first stage
    pub wrapped: bool,
}

/// Add `dt_ms` to the stage clock and advance the stage once it runs out.
///
/// A transition clears every live obstacle and restarts the clock; time past
/// the deadline is not carried over.
pub fn advance_stage_clock(state: &mut GameState, dt_ms: u64) -> Option<StageAdvance> {
    state.stage_elapsed_ms += dt_ms;
    if state.stage_elapsed_ms <= STAGE_DURATION_MS {
        return None;
    }

    let mut next = state.stage + 1;
    let wrapped = next >= STAGES.len();
    if wrapped {
        next = 0;
        state.base_speed *= CYCLE_SPEED_MULTIPLIER;
        state.cycles += 1;
        log::info!(
            "Stage cycle {} complete, base speed now {:.2}",
            state.cycles,
            state.base_speed
        );
    }

    state.stage = next;
    state.scroll_speed = state.base_speed + STAGES[next].speed_offset;
    state.obstacles.clear();
    state.stage_elapsed_ms = 0;

    log::info!(
        "Stage {} ({}) begins, scroll speed {:.2}",
        next,
        STAGES[next].name,
        state.scroll_speed
    );

    Some(StageAdvance {
        stage: next,
        wrapped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;
    use glam::IVec2;

    #[test]
    fn test_stage_table_offsets_match_index() {
        for (i, stage) in STAGES.iter().enumerate() {
            assert_eq!(stage.speed_offset, i as f64);
        }
        let names: Vec<_> = STAGES.iter().map(|s| s.name).collect();
        assert_eq!(names, ["City", "Night", "Forest", "Sea"]);
    }

    #[test]
    fn test_clock_must_exceed_duration() {
        let mut state = GameState::new(5.0);
        assert_eq!(advance_stage_clock(&mut state, STAGE_DURATION_MS), None);
        assert_eq!(state.stage, 0);

        let advance = advance_stage_clock(&mut state, 1);
        assert_eq!(
            advance,
            Some(StageAdvance {
                stage: 1,
                wrapped: false
            })
        );
        assert_eq!(state.stage_elapsed_ms, 0);
        assert_eq!(state.scroll_speed, 6.0);
    }

    #[test]
    fn test_transition_clears_obstacles() {
        let mut state = GameState::new(3.0);
        let id = state.next_entity_id();
        state
            .obstacles
            .push(Obstacle::new(id, 400, IVec2::splat(60), false, -1));
        state.stage_elapsed_ms = STAGE_DURATION_MS;
        assert!(advance_stage_clock(&mut state, 20).is_some());
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_wrap_escalates_base_speed() {
        let mut state = GameState::new(5.0);
        let mut wraps = 0;
        for _ in 0..4 {
            let advance = advance_stage_clock(&mut state, STAGE_DURATION_MS + 1).unwrap();
            if advance.wrapped {
                wraps += 1;
            }
        }
        assert_eq!(wraps, 1);
        assert_eq!(state.stage, 0);
        assert_eq!(state.cycles, 1);
        assert!((state.base_speed - 6.0).abs() < 1e-9);
        assert!((state.scroll_speed - 6.0).abs() < 1e-9);

        advance_stage_clock(&mut state, STAGE_DURATION_MS + 1);
        assert!((state.scroll_speed - 7.0).abs() < 1e-9);
    }
}
