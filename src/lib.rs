/// Tic-tac-toe on a 3x3 grid, with human, random, and minimax agents.
///
/// The `game` module owns the board and rules, `agents` holds the move
/// selection strategies, `session` runs games between two agents, and
/// `stats` tallies results across games.
pub mod agents;
pub mod game;
pub mod session;
pub mod stats;

pub use crate::agents::{
    parse_position, Difficulty, HumanAgent, MinimaxAgent, RandomAgent, TicTacToeAgent,
};
pub use crate::game::{Board, Cell, EndState, GameState, Player, WIN_PATTERNS};
pub use crate::session::{display_result, Session};
pub use crate::stats::GameStats;
