use crate::game::{GameState, Move};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal moves.
pub struct RandomAgent {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Reproducible agent; the same seed replays the same choices.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(moves[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        match self.seed {
            Some(seed) => Box::new(RandomAgent::with_seed(seed)),
            None => Box::new(RandomAgent::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;

    #[test]
    fn test_random_agent_selects_legal_move() {
        let mut agent = RandomAgent::new();
        let state = GameState::initial();
        let legal = state.legal_moves();

        for _ in 0..100 {
            let mv = agent.select_move(&state).unwrap();
            assert!(legal.contains(&mv), "Move {:?} is not legal", mv);
        }
    }

    #[test]
    fn test_seeded_agents_agree() {
        let mut a = RandomAgent::with_seed(7);
        let mut b = RandomAgent::with_seed(7);
        let mut state = GameState::initial();

        for _ in 0..20 {
            if state.is_terminal() {
                break;
            }
            let mv = a.select_move(&state).unwrap();
            assert_eq!(Some(mv), b.select_move(&state));
            state = state.apply_move(&mv).unwrap();
        }
    }

    #[test]
    fn test_random_agent_plays_until_cap_or_end() {
        let mut agent1 = RandomAgent::with_seed(1);
        let mut agent2 = RandomAgent::with_seed(2);
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_terminal() && turn < 300 {
            let mv = if turn % 2 == 0 {
                agent1.select_move(&state)
            } else {
                agent2.select_move(&state)
            };
            state = state.apply_move(&mv.unwrap()).unwrap();
            turn += 1;
        }

        assert!(state.is_terminal() || turn == 300);
    }

    #[test]
    fn test_no_move_on_finished_game() {
        let mut agent = RandomAgent::with_seed(3);
        let board = crate::game::Board::empty();
        // An empty board leaves White nothing to move
        let state = GameState::from_board(board, crate::game::Color::White);
        assert!(state.is_terminal());
        assert_eq!(agent.select_move(&state), None);
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
