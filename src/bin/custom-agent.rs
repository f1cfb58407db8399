/// Shows how to write a custom agent: anything that can pick a legal index
/// from a read-only board satisfies the trait.
use tictactoe::{Board, Difficulty, MinimaxAgent, Player, Session, TicTacToeAgent};

/// Agent with a fixed preference order: corners, then the center, then edges.
struct CornerFirstAgent;

impl TicTacToeAgent for CornerFirstAgent {
    fn choose_move(&mut self, board: &Board) -> usize {
        const PREFERENCES: [usize; 9] = [0, 2, 6, 8, 4, 1, 3, 5, 7];
        let valid_moves = board.get_valid_moves();
        PREFERENCES
            .iter()
            .copied()
            .find(|idx| valid_moves.contains(idx))
            .unwrap()
    }
}

fn main() {
    let mut corner = CornerFirstAgent;
    let mut minimax = MinimaxAgent::new(Player::P2, Difficulty::Hard);

    println!("Corner-first agent (x) vs minimax (o)");

    Session::new(&mut corner, &mut minimax)
        .show_board(true)
        .play();
}
