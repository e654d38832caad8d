use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::Level;

use shield_tactics::ai::{MinimaxAgent, SearchConfig};
use shield_tactics::arena::{build_opponent, run_match, Opponent};
use shield_tactics::config::AppConfig;

#[derive(Clone, Copy, ValueEnum)]
enum OpponentArg {
    Random,
    Minimax,
}

/// Pit the minimax player against another agent and report the tally.
#[derive(Parser)]
#[command(name = "arena", about = "Play minimax against another agent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "shield_tactics.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override the minimax search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override the opponent
    #[arg(long, value_enum)]
    opponent: Option<OpponentArg>,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate root moves in parallel
    #[arg(long)]
    parallel: bool,

    /// Log every move (debug level)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.arena.games = games;
    }
    if let Some(depth) = cli.depth {
        app_config.search.depth = depth;
    }
    if let Some(opponent) = cli.opponent {
        app_config.arena.opponent = match opponent {
            OpponentArg::Random => Opponent::Random,
            OpponentArg::Minimax => Opponent::Minimax,
        };
    }
    if cli.seed.is_some() {
        app_config.arena.seed = cli.seed;
    }
    if cli.parallel {
        app_config.search.parallel = true;
    }
    app_config.validate().context("invalid configuration after overrides")?;

    let search: SearchConfig = app_config.search;
    let mut subject = MinimaxAgent::with_config(search);
    let mut opponent = build_opponent(&app_config.arena);

    println!(
        "Minimax (depth {}) vs {} over {} games (cap {} plies)",
        search.depth,
        opponent.name(),
        app_config.arena.games,
        app_config.arena.max_plies
    );
    println!("-------------------------------------------");

    let start = Instant::now();
    let metrics = run_match(&app_config.arena, &mut subject, opponent.as_mut())
        .context("match aborted by an illegal move")?;
    let elapsed = start.elapsed();

    println!(
        "wins: {} | losses: {} | draws: {} ({} hit the ply cap)",
        metrics.wins(),
        metrics.losses(),
        metrics.draws(),
        metrics.capped()
    );
    println!(
        "win rate: {:.1}% | draw rate: {:.1}% | avg length: {:.1} plies | {:.2}s",
        metrics.win_rate() * 100.0,
        metrics.draw_rate() * 100.0,
        metrics.average_length(),
        elapsed.as_secs_f64()
    );

    Ok(())
}
