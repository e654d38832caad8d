use crate::game::{GameState, Move};

/// Common interface for anything that can pick a move.
pub trait Agent: Send {
    /// Select a move for the side to move, or `None` when there is nothing to play.
    fn select_move(&mut self, state: &GameState) -> Option<Move>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent>;
}
