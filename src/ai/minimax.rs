use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game::{all_moves, Board, Color, GameState, Move};

use super::agent::Agent;

/// Trait for evaluating a board position from a color's perspective.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, color: Color) -> i32;
}

/// Material balance: own capturable pieces minus the opponent's. Pentagons are
/// never material.
pub struct MaterialHeuristic;

impl Heuristic for MaterialHeuristic {
    fn evaluate(&self, board: &Board, color: Color) -> i32 {
        board.capturable_count(color) as i32 - board.capturable_count(color.other()) as i32
    }
}

/// Score `board` for `color` with the default material heuristic.
pub fn evaluate(board: &Board, color: Color) -> i32 {
    MaterialHeuristic.evaluate(board, color)
}

/// Search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched from the root, the root move included.
    pub depth: usize,
    /// Alpha-beta cutoffs. Never changes the chosen move.
    pub pruning: bool,
    /// Evaluate root moves on the rayon pool.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            pruning: true,
            parallel: false,
        }
    }
}

/// What a search found at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best: Option<Move>,
    pub value: Option<i32>,
    pub nodes: u64,
}

/// Fixed-depth minimax agent.
pub struct MinimaxAgent {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        Self::with_config(SearchConfig {
            depth,
            ..SearchConfig::default()
        })
    }

    pub fn with_config(config: SearchConfig) -> Self {
        MinimaxAgent {
            config,
            heuristic: Box::new(MaterialHeuristic),
        }
    }

    pub fn with_heuristic(config: SearchConfig, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent { config, heuristic }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Best move for `color` on `board`, or `None` when the board is already
    /// decided or `color` has nothing to play.
    pub fn choose_move(&self, board: &Board, color: Color) -> Option<Move> {
        self.search(board, color).best
    }

    /// Run the search and report the root value and node count alongside the move.
    ///
    /// Every root move is scored by the minimizing reply searched one ply
    /// shallower. The first move with the strictly greatest score wins, so the
    /// result depends only on enumeration order. A depth of 0 behaves like 1.
    pub fn search(&self, board: &Board, color: Color) -> SearchResult {
        let moves = all_moves(board, color);
        if board.is_decided() || moves.is_empty() {
            return SearchResult {
                best: None,
                value: None,
                nodes: 0,
            };
        }

        let child_depth = self.config.depth.saturating_sub(1);
        let (best, value, nodes) = if self.config.parallel {
            self.search_root_parallel(board, &moves, child_depth, color)
        } else {
            self.search_root(board, &moves, child_depth, color)
        };

        tracing::debug!(
            color = color.name(),
            depth = self.config.depth,
            candidates = moves.len(),
            nodes,
            value,
            "search finished"
        );

        SearchResult {
            best: Some(best),
            value: Some(value),
            nodes,
        }
    }

    fn search_root(
        &self,
        board: &Board,
        moves: &[Move],
        depth: usize,
        color: Color,
    ) -> (Move, i32, u64) {
        let mut nodes = 0;
        let mut best = moves[0];
        let mut best_value = None;

        for mv in moves {
            // Generated moves always start on an occupied, on-board cell
            let Ok(child) = board.apply(mv) else {
                continue;
            };
            // A move that only ties the best so far can never be picked, so the
            // child only needs to prove it beats the current best.
            let alpha = match (self.config.pruning, best_value) {
                (true, Some(value)) => value,
                _ => i32::MIN,
            };
            let value = self.minimax(&child, depth, alpha, i32::MAX, false, color, &mut nodes);
            if best_value.map_or(true, |best| value > best) {
                best = *mv;
                best_value = Some(value);
            }
        }

        (best, best_value.unwrap_or_else(|| self.heuristic.evaluate(board, color)), nodes)
    }

    fn search_root_parallel(
        &self,
        board: &Board,
        moves: &[Move],
        depth: usize,
        color: Color,
    ) -> (Move, i32, u64) {
        let scored: Vec<(Move, i32, u64)> = moves
            .par_iter()
            .filter_map(|mv| {
                let child = board.apply(mv).ok()?;
                let mut nodes = 0;
                let value =
                    self.minimax(&child, depth, i32::MIN, i32::MAX, false, color, &mut nodes);
                Some((*mv, value, nodes))
            })
            .collect();

        let nodes = scored.iter().map(|&(_, _, n)| n).sum();
        let mut best = (moves[0], None);
        for &(mv, value, _) in &scored {
            if best.1.map_or(true, |best| value > best) {
                best = (mv, Some(value));
            }
        }

        let value = best.1.unwrap_or_else(|| self.heuristic.evaluate(board, color));
        (best.0, value, nodes)
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ai_color: Color,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;

        if depth == 0 || board.is_decided() {
            return self.heuristic.evaluate(board, ai_color);
        }

        let side = if maximizing { ai_color } else { ai_color.other() };
        let moves = all_moves(board, side);
        if moves.is_empty() {
            return self.heuristic.evaluate(board, ai_color);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in &moves {
            let Ok(child) = board.apply(mv) else {
                continue;
            };
            let value = self.minimax(&child, depth - 1, alpha, beta, !maximizing, ai_color, nodes);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if self.config.pruning && alpha >= beta {
                break;
            }
        }

        best
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        if state.is_terminal() {
            return None;
        }
        self.choose_move(state.board(), state.to_move())
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(MinimaxAgent::with_config(self.config))
    }
}

/// Pick `ai_color`'s move on `board` with a plain material search of `depth` plies.
pub fn choose_move(board: &Board, ai_color: Color, depth: usize) -> Option<Move> {
    MinimaxAgent::new(depth).choose_move(board, ai_color)
}
