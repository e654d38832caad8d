//! Agent-versus-agent matches: single episodes, match orchestration and
//! result tallies.

mod episode;
mod metrics;

use serde::{Deserialize, Serialize};

use crate::ai::{Agent, MinimaxAgent, RandomAgent};
use crate::error::PlayError;
use crate::game::Color;

pub use episode::{play_episode, EpisodeResult};
pub use metrics::MatchMetrics;

/// Which agent the minimax player is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    Random,
    Minimax,
}

/// Match settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    /// Games still running after this many plies are scored as draws.
    pub max_plies: usize,
    pub seed: Option<u64>,
    pub opponent: Opponent,
    /// Search depth of the opponent when it is a minimax player.
    pub opponent_depth: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 10,
            max_plies: 200,
            seed: None,
            opponent: Opponent::Random,
            opponent_depth: 1,
        }
    }
}

/// Build the opponent agent described by `config`.
pub fn build_opponent(config: &ArenaConfig) -> Box<dyn Agent> {
    match config.opponent {
        Opponent::Random => match config.seed {
            Some(seed) => Box::new(RandomAgent::with_seed(seed)),
            None => Box::new(RandomAgent::new()),
        },
        Opponent::Minimax => Box::new(MinimaxAgent::new(config.opponent_depth)),
    }
}

/// Play `config.games` games between `subject` and `opponent`, alternating
/// colors so the subject opens every even-numbered game as White.
pub fn run_match(
    config: &ArenaConfig,
    subject: &mut dyn Agent,
    opponent: &mut dyn Agent,
) -> Result<MatchMetrics, PlayError> {
    let mut metrics = MatchMetrics::new();

    for game in 0..config.games {
        let subject_color = if game % 2 == 0 {
            Color::White
        } else {
            Color::Black
        };
        let result = match subject_color {
            Color::White => play_episode(subject, opponent, config.max_plies)?,
            Color::Black => play_episode(opponent, subject, config.max_plies)?,
        };

        tracing::info!(
            game = game + 1,
            of = config.games,
            subject = subject.name(),
            subject_color = subject_color.name(),
            winner = result.winner.map(Color::name).unwrap_or("none"),
            plies = result.plies,
            capped = result.capped,
            "game finished"
        );
        metrics.record(&result, subject_color);
    }

    Ok(metrics)
}
