//! Session owner driven by an external timer
//!
//! `GameLoop` bundles the simulation state with its random source and the
//! tally of the last finished run. A windowing or terminal adapter calls `tick()` once
//! per timer period, forwards key presses through `jump()` / `restart()`,
//! and draws whatever `snapshot()` returns.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::TICK_MS;
use crate::settings::Settings;
use crate::sim::{GameState, Snapshot, SpawnRoll, TickEvents, TickInput, tick};

/// Final tally of a run, taken on the tick the player crashed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub score: u64,
    pub stage: usize,
    pub cycles: u32,
    pub ticks: u64,
}

impl From<&GameState> for RunSummary {
    fn from(state: &GameState) -> Self {
        Self {
            score: state.score,
            stage: state.stage,
            cycles: state.cycles,
            ticks: state.time_ticks,
        }
    }
}

/// A game session
#[derive(Debug, Clone)]
pub struct GameLoop<R: SpawnRoll = Pcg32> {
    state: GameState,
    rng: R,
    /// Events queued since the last tick
    pending: TickInput,
    last_run: Option<RunSummary>,
}

impl GameLoop<Pcg32> {
    /// Start a session at `base_speed` with a seeded generator
    pub fn new(base_speed: f64, seed: u64) -> Self {
        log::info!("New session: base speed {:.2}, seed {}", base_speed, seed);
        Self::with_rng(base_speed, Pcg32::seed_from_u64(seed))
    }

    /// Start a session from menu settings; draws a seed when none is set
    pub fn from_settings(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Difficulty {}", settings.difficulty);
        Self::new(settings.base_speed(), seed)
    }
}

impl<R: SpawnRoll> GameLoop<R> {
    /// Start a session with any random source
    pub fn with_rng(base_speed: f64, rng: R) -> Self {
        Self {
            state: GameState::new(base_speed),
            rng,
            pending: TickInput::default(),
            last_run: None,
        }
    }

    /// Queue a jump for the next tick (key-down edge)
    pub fn jump(&mut self) {
        self.pending.jump = true;
    }

    /// Queue a restart for the next tick.
    /// Returns false, queuing nothing, unless the run is over.
    pub fn restart(&mut self) -> bool {
        if !self.state.is_game_over() {
            return false;
        }
        self.pending.restart = true;
        true
    }

    /// Advance one nominal timer period
    pub fn tick(&mut self) -> TickEvents {
        self.tick_elapsed(TICK_MS)
    }

    /// Advance one tick that covered `dt_ms` of real time
    pub fn tick_elapsed(&mut self, dt_ms: u64) -> TickEvents {
        let input = std::mem::take(&mut self.pending);
        let events = tick(&mut self.state, &input, &mut self.rng, dt_ms);

        if events.collided {
            self.last_run = Some(RunSummary::from(&self.state));
        }

        events
    }

    /// Current frame for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for adapters and tests that stage a scenario
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Tally of the most recent finished run; survives restarts
    pub fn last_run(&self) -> Option<RunSummary> {
        self.last_run
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }
}
