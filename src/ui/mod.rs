//! Terminal UI: play against the minimax opponent on a 6x6 board.

mod app;
mod game_view;

pub use app::App;
