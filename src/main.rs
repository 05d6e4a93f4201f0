//! Self-playing demo (default binary).
//!
//! Plays a seeded session: each turn scans for the first legal swap, commits
//! it, resolves the cascade, and prints the resulting event stream as
//! line-delimited JSON on stdout. A final summary goes to stderr.
//!
//! Usage: match3-demo [--seed N] [--turns N]

use std::io::{self, Write};

use anyhow::{anyhow, Result};

use match3_engine::core::GameState;
use match3_engine::types::{BoardConfig, Position};

struct DemoConfig {
    seed: u32,
    turns: u32,
}

fn parse_args(args: &[String]) -> Result<DemoConfig> {
    let mut seed: u32 = 1;
    let mut turns: u32 = 10;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--turns" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --turns"))?;
                turns = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --turns value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(DemoConfig { seed, turns })
}

/// Scan every adjacent pair for the first match-producing swap. Probes a
/// clone so the live board is untouched.
fn first_legal_swap(game: &GameState) -> Option<(Position, Position)> {
    let mut probe = game.board().clone();
    let n = probe.size();
    for row in 0..n {
        for col in 0..n {
            let here = Position::new(row, col);
            if col + 1 < n {
                let right = Position::new(row, col + 1);
                if probe.would_create_match(here, right) {
                    return Some((here, right));
                }
            }
            if row + 1 < n {
                let below = Position::new(row + 1, col);
                if probe.would_create_match(here, below) {
                    return Some((here, below));
                }
            }
        }
    }
    None
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let mut game = GameState::new(BoardConfig::default(), config.seed);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for _ in 0..config.turns {
        match first_legal_swap(&game) {
            Some((first, second)) => {
                game.attempt_swap(first, second);
                game.resolve();
            }
            None => {
                // Freshly initialized boards are not checked for legal moves;
                // a bounced swap triggers the engine's reshuffle recovery.
                game.attempt_swap(Position::new(0, 0), Position::new(0, 1));
            }
        }
        for event in game.drain_events() {
            serde_json::to_writer(&mut out, &event)?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;

    eprintln!("final score: {}", game.score());
    eprintln!("{}", game.board());
    Ok(())
}
