//! Core game logic: board and piece model, per-shape move generation, and a
//! game state with immutable transitions.

mod board;
mod color;
mod movegen;
mod state;

pub use board::{apply, Board, Move, Piece, Pos, Shape, SIZE};
pub use color::Color;
pub use movegen::{all_moves, is_capture, moves_for, MoveRule};
pub use state::{GameOutcome, GameState};
pub use crate::error::{MoveError, PlayError};
