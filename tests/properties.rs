//! Invariants of the simulation under arbitrary inputs

use cat_run::consts::*;
use cat_run::sim::{GameState, Hitbox, Obstacle, SpawnRoll, TickInput, advance_stage_clock, tick};
use glam::IVec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Never spawns; lets a test control the obstacle set itself
struct NoSpawns;

impl SpawnRoll for NoSpawns {
    fn percent(&mut self) -> u32 {
        99
    }

    fn unit(&mut self) -> f64 {
        0.0
    }
}

fn idle() -> TickInput {
    TickInput::default()
}

proptest! {
    #[test]
    fn grounded_player_never_moves(ticks in 1usize..2000, seed in any::<u64>()) {
        let mut state = GameState::new(3.0);
        let mut rng = Pcg32::seed_from_u64(seed);
        for _ in 0..ticks {
            tick(&mut state, &idle(), &mut rng, TICK_MS);
            if state.is_game_over() {
                break;
            }
            prop_assert!(state.player.grounded);
            prop_assert_eq!(state.player.pos.y, GROUND_Y - PLAYER_HEIGHT);
            prop_assert_eq!(state.player.vel_y, 0);
        }
    }

    #[test]
    fn player_never_sinks_below_ground(jumps in proptest::collection::vec(any::<bool>(), 1..400)) {
        let mut state = GameState::new(5.0);
        let mut rng = NoSpawns;
        let mut prev_vel = state.player.vel_y;
        for jump in jumps {
            let airborne = !state.player.grounded;
            tick(&mut state, &TickInput { jump, restart: false }, &mut rng, TICK_MS);
            prop_assert!(state.player.pos.y <= GROUND_Y - PLAYER_HEIGHT);
            if airborne && !state.player.grounded {
                // Mid-air jumps are ignored; gravity alone changes velocity
                prop_assert_eq!(state.player.vel_y, prev_vel + GRAVITY);
            }
            prev_vel = state.player.vel_y;
        }
    }

    #[test]
    fn intersection_is_symmetric(
        ax in -200i32..200, ay in -200i32..200, aw in -5i32..120, ah in -5i32..120,
        bx in -200i32..200, by in -200i32..200, bw in -5i32..120, bh in -5i32..120,
    ) {
        let a = Hitbox::new(ax, ay, aw, ah);
        let b = Hitbox::new(bx, by, bw, bh);
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        if a.is_empty() || b.is_empty() {
            prop_assert!(!a.intersects(&b));
        }
    }

    #[test]
    fn edge_adjacent_boxes_never_intersect(x in -500i32..500, y in -500i32..500, w in 1i32..200, h in 1i32..200) {
        let a = Hitbox::new(x, y, w, h);
        prop_assert!(!a.intersects(&Hitbox::new(x + w, y, w, h)));
        prop_assert!(!a.intersects(&Hitbox::new(x, y + h, w, h)));
        prop_assert!(!a.intersects(&Hitbox::new(x - w, y - h, w, h)));
        prop_assert!(a.intersects(&Hitbox::new(x + w - 1, y + h - 1, w, h)));
    }

    #[test]
    fn each_offscreen_obstacle_scores_exactly_once(xs in proptest::collection::vec(-140i32..-40, 1..20)) {
        let mut state = GameState::new(3.0);
        for x in &xs {
            let id = state.next_entity_id();
            state.obstacles.push(Obstacle::new(id, *x, IVec2::splat(OBSTACLE_SIZE), false, -1));
        }
        let mut rng = NoSpawns;
        let mut cleared = 0u64;
        for _ in 0..60 {
            cleared += u64::from(tick(&mut state, &idle(), &mut rng, TICK_MS).cleared);
        }
        prop_assert!(state.obstacles.is_empty());
        prop_assert_eq!(cleared, xs.len() as u64);
        prop_assert_eq!(state.score, xs.len() as u64);
    }

    #[test]
    fn base_speed_escalates_per_full_cycle(base in 1.0f64..10.0, cycles in 0u32..6) {
        let mut state = GameState::new(base);
        let mut wraps = 0;
        for _ in 0..(cycles * 4) {
            if let Some(advance) = advance_stage_clock(&mut state, STAGE_DURATION_MS + 1) {
                if advance.wrapped {
                    wraps += 1;
                }
            }
        }
        prop_assert_eq!(wraps, cycles);
        prop_assert_eq!(state.stage, 0);
        let expected = base * CYCLE_SPEED_MULTIPLIER.powi(cycles as i32);
        prop_assert!((state.base_speed - expected).abs() < 1e-9 * expected.max(1.0));
    }

    #[test]
    fn spawned_obstacles_stay_in_bounds(seed in any::<u64>()) {
        let mut state = GameState::new(7.0);
        let mut rng = Pcg32::seed_from_u64(seed);
        for _ in 0..3000 {
            tick(&mut state, &idle(), &mut rng, TICK_MS);
            if state.is_game_over() {
                state.reset();
            }
            for obstacle in &state.obstacles {
                prop_assert!(obstacle.right_edge() >= 0);
                prop_assert!(obstacle.pos.x <= VIEWPORT_WIDTH);
                if obstacle.special {
                    prop_assert!(obstacle.size.x >= 36 && obstacle.size.x <= 54);
                } else {
                    prop_assert_eq!(obstacle.size, IVec2::splat(OBSTACLE_SIZE));
                }
            }
        }
    }
}
