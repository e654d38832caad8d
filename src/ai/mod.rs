mod agent;
mod minimax;
mod random;

pub use agent::Agent;
pub use minimax::{
    choose_move, evaluate, Heuristic, MaterialHeuristic, MinimaxAgent, SearchConfig,
    SearchResult,
};
pub use random::RandomAgent;
