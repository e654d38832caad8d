use super::movegen::{all_moves, is_capture, moves_for};
use super::{Board, Color, Move, Pos};
use crate::error::{MoveError, PlayError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Color),
    /// The side to move had no legal move while both sides still had material.
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    to_move: Color,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        Self::from_board(Board::initial(), Color::White)
    }

    /// Wrap an arbitrary position, computing whether it is already finished
    pub fn from_board(board: Board, to_move: Color) -> Self {
        GameState {
            board,
            to_move,
            outcome: outcome_of(&board, to_move),
        }
    }

    /// Get the side to move
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// All moves for the side to move, in enumeration order
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        all_moves(&self.board, self.to_move)
    }

    /// Moves of the piece on `from`; empty unless it belongs to the side to move
    pub fn moves_from(&self, from: Pos) -> Result<Vec<Move>, PlayError> {
        if self.is_terminal() {
            return Ok(Vec::new());
        }
        let Some(piece) = self.board.piece_at(from)? else {
            return Ok(Vec::new());
        };
        if piece.color != self.to_move {
            return Ok(Vec::new());
        }

        let moves = moves_for(&self.board, from, piece.shape, piece.color)?
            .into_iter()
            .map(|to| Move {
                from,
                to,
                is_capture: is_capture(&self.board, to, piece, piece.color),
            })
            .collect();
        Ok(moves)
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, mv: &Move) -> Result<GameState, PlayError> {
        if self.is_terminal() {
            return Err(PlayError::GameOver);
        }

        let piece = self
            .board
            .piece_at(mv.from)?
            .ok_or(MoveError::EmptySourceCell {
                row: mv.from.row,
                col: mv.from.col,
            })?;
        if piece.color != self.to_move {
            return Err(PlayError::NotYourPiece {
                row: mv.from.row,
                col: mv.from.col,
            });
        }

        mv.to.validate()?;
        let destinations = moves_for(&self.board, mv.from, piece.shape, piece.color)?;
        if !destinations.contains(&mv.to) {
            return Err(PlayError::IllegalDestination {
                row: mv.to.row,
                col: mv.to.col,
            });
        }

        let captured = is_capture(&self.board, mv.to, piece, piece.color);
        let board = self.board.apply(&Move {
            is_capture: captured,
            ..*mv
        })?;
        let next = GameState::from_board(board, self.to_move.other());

        tracing::debug!(
            color = self.to_move.name(),
            shape = piece.shape.name(),
            from = ?(mv.from.row, mv.from.col),
            to = ?(mv.to.row, mv.to.col),
            captured,
            "move played"
        );
        if let Some(outcome) = next.outcome {
            tracing::info!(?outcome, "game over");
        }

        Ok(next)
    }

    /// Apply move mutably (for UI efficiency)
    pub fn apply_move_mut(&mut self, mv: &Move) -> Result<(), PlayError> {
        *self = self.apply_move(mv)?;
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// White is checked first, matching the order a finished board is reported in.
fn outcome_of(board: &Board, to_move: Color) -> Option<GameOutcome> {
    if board.capturable_count(Color::White) == 1 {
        Some(GameOutcome::Winner(Color::Black))
    } else if board.capturable_count(Color::Black) == 1 {
        Some(GameOutcome::Winner(Color::White))
    } else if all_moves(board, to_move).is_empty() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}
