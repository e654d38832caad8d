use crate::ai::Agent;
use crate::error::PlayError;
use crate::game::{Color, GameOutcome, GameState};

/// Result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeResult {
    pub winner: Option<Color>,
    pub plies: usize,
    /// The ply limit ended the game before a natural outcome.
    pub capped: bool,
}

/// Play one game from the initial position.
pub fn play_episode(
    white: &mut dyn Agent,
    black: &mut dyn Agent,
    max_plies: usize,
) -> Result<EpisodeResult, PlayError> {
    play_episode_from(GameState::initial(), white, black, max_plies)
}

/// Play one game from `state` until it ends or `max_plies` moves have been made.
pub fn play_episode_from(
    mut state: GameState,
    white: &mut dyn Agent,
    black: &mut dyn Agent,
    max_plies: usize,
) -> Result<EpisodeResult, PlayError> {
    let mut plies = 0;

    while !state.is_terminal() && plies < max_plies {
        let choice = match state.to_move() {
            Color::White => white.select_move(&state),
            Color::Black => black.select_move(&state),
        };
        let Some(mv) = choice else {
            break;
        };
        state = state.apply_move(&mv)?;
        plies += 1;
    }

    let winner = match state.outcome() {
        Some(GameOutcome::Winner(color)) => Some(color),
        Some(GameOutcome::Draw) | None => None,
    };

    Ok(EpisodeResult {
        winner,
        plies,
        capped: !state.is_terminal(),
    })
}
