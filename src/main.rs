//! Cat Run entry point
//!
//! Headless native driver: runs the game loop on a fixed timer and reads
//! key commands from stdin, one per line:
//! - `j` or an empty line: jump
//! - `r`: restart after game over
//! - `q`: quit
//!
//! On exit the last finished run is printed as JSON.
//!
//! An optional first argument names a JSON settings file.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use cat_run::{GameLoop, Settings};

/// Key commands forwarded from the stdin reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Jump,
    Restart,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_lowercase().as_str() {
        "" | "j" | "jump" => Some(Command::Jump),
        "r" | "restart" => Some(Command::Restart),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Forward stdin lines as commands; end of input counts as quit
fn spawn_input_reader() -> Receiver<Command> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Some(cmd) => {
                    if tx.send(cmd).is_err() {
                        return;
                    }
                }
                None => log::warn!("Unknown command {:?} (use j, r or q)", line),
            }
        }
        let _ = tx.send(Command::Quit);
    });
    rx
}

/// Whole milliseconds elapsed since `*last`. Advances `*last` by exactly
/// that much, so the sub-millisecond remainder counts toward the next tick.
fn take_elapsed_ms(last: &mut Instant, now: Instant) -> u64 {
    let dt_ms = now.saturating_duration_since(*last).as_millis() as u64;
    *last += Duration::from_millis(dt_ms);
    dt_ms
}

fn load_settings() -> Settings {
    match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).unwrap_or_else(|err| {
            log::warn!("{}; using default settings", err);
            Settings::default()
        }),
        None => Settings::default(),
    }
}

fn main() {
    env_logger::init();
    log::info!("Cat Run (headless) starting...");

    let settings = load_settings();
    let mut game = GameLoop::from_settings(&settings);
    let commands = spawn_input_reader();

    let period = Duration::from_millis(settings.tick_ms);
    let mut next_tick = Instant::now() + period;
    let mut last_tick = Instant::now();
    let mut last_hud = String::new();

    'run: loop {
        // Drain input at the tick boundary
        loop {
            match commands.try_recv() {
                Ok(Command::Jump) => game.jump(),
                Ok(Command::Restart) => {
                    if !game.restart() {
                        log::debug!("Restart ignored while running");
                    }
                }
                Ok(Command::Quit) | Err(TryRecvError::Disconnected) => break 'run,
                Err(TryRecvError::Empty) => break,
            }
        }

        let dt_ms = take_elapsed_ms(&mut last_tick, Instant::now());
        game.tick_elapsed(dt_ms);

        let frame = game.snapshot();
        let hud = match &frame.hud.game_over {
            Some((title, prompt)) => format!(
                "{} | {} | {} {}",
                frame.hud.score_label, frame.hud.stage_label, title, prompt
            ),
            None => format!("{} | {}", frame.hud.score_label, frame.hud.stage_label),
        };
        if hud != last_hud {
            println!("{}", hud);
            last_hud = hud;
        }

        let now = Instant::now();
        if next_tick > now {
            thread::sleep(next_tick - now);
        }
        next_tick += period;
    }

    if let Some(run) = game.last_run() {
        match serde_json::to_string_pretty(&run) {
            Ok(json) => println!("{}", json),
            Err(err) => log::error!("Failed to serialize run summary: {}", err),
        }
    }
    log::info!("Cat Run exiting");
}
