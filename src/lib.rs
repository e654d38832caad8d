//! # Shield Tactics
//!
//! Rules engine and minimax opponent for a 6x6 abstract board game with four
//! shapes: triangles slide diagonally, squares orthogonally, circles step in
//! any direction, and pentagons act as shields that can neither capture nor
//! be captured. A side loses once it is down to a single non-pentagon piece.
//!
//! ## Modules
//!
//! - [`game`] — Board model, per-shape move generation, game state
//! - [`ai`] — Agent trait, evaluator, minimax search, random agent
//! - [`arena`] — Agent-versus-agent matches and their tallies
//! - [`ui`] — Terminal UI for playing against the AI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;

pub use ai::{choose_move, evaluate};
pub use game::{apply, moves_for};
