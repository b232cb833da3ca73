//! Headless runner: plays games with the A* snake agent and logs the results.
//!
//! Usage:
//!   cargo run -- --games 20 --seed 1
//!
//! Per-food and fallback details are logged at debug level:
//!   RUST_LOG=debug cargo run -- --width 12 --height 10

use std::collections::BTreeMap;

use clap::Parser;
use serpent_ai::config::{DEFAULT_HEIGHT, DEFAULT_MAX_TICKS, DEFAULT_WIDTH};
use serpent_ai::{Game, GameConfig, TailRule};

/// Play snake games with the A* agent, without a display.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    /// Seed for the first game; game N uses seed + N. Random if omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Tick limit per game
    #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
    max_ticks: u64,

    /// Treat the tail cell as occupied even on a move that frees it
    #[arg(long)]
    tail_blocks: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut total_score = 0u64;
    let mut best = 0u32;
    let mut causes = BTreeMap::new();

    for i in 0..args.games {
        let config = GameConfig {
            width: args.width,
            height: args.height,
            seed: args.seed.map(|s| s.wrapping_add(u64::from(i))),
            max_ticks: args.max_ticks,
            tail_rule: if args.tail_blocks {
                TailRule::Blocks
            } else {
                TailRule::Vacates
            },
        };
        let summary = Game::new(config)?.run();
        log::info!("game {}: {summary}", i + 1);

        total_score += u64::from(summary.score);
        best = best.max(summary.score);
        let cause = summary
            .cause
            .map_or_else(|| "running".to_string(), |c| c.to_string());
        *causes.entry(cause).or_insert(0u32) += 1;
    }

    if args.games > 0 {
        log::info!(
            "{} games on {}x{}: mean score {:.1}, best {}",
            args.games,
            args.width,
            args.height,
            total_score as f64 / f64::from(args.games),
            best
        );
        for (cause, n) in &causes {
            log::info!("  {cause}: {n}");
        }
    }
    Ok(())
}
