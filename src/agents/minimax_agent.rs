/// Exhaustive minimax search agent.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::agents::TicTacToeAgent;
use crate::game::{Board, Cell, Player, WIN_PATTERNS};

use crate::game::Cell::{Empty, Full};

// chance for an Easy agent to play a random move instead of searching
const EASY_RANDOM_CHANCE: f64 = 0.3;

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;

/// How strong the minimax agent plays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Difficulty {
    /// Sometimes substitutes a uniformly random move for the search result.
    Easy,
    /// Always plays the search result. Never loses.
    Hard,
}

/// Agent that searches the full game tree with minimax and plays the move
/// with the best game-theoretic value. The 3x3 tree is small enough (at most
/// 9! positions) that the search always runs to the terminal states.
#[derive(Clone, Debug)]
pub struct MinimaxAgent {
    pub player: Player,
    pub difficulty: Difficulty,
    rng: StdRng,
}

impl TicTacToeAgent for MinimaxAgent {
    fn choose_move(&mut self, board: &Board) -> usize {
        // decided once per call, independent of the search
        if self.difficulty == Difficulty::Easy && self.rng.gen::<f64>() < EASY_RANDOM_CHANCE {
            return *board.get_valid_moves().choose(&mut self.rng).unwrap();
        }

        // search works on a private copy of the cells, the live board is
        // never touched
        let mut cells = board.cells;
        let (_, best_move) = self.minimax(&mut cells, self.player, true);
        match best_move {
            Some(idx) => idx,
            // only reachable if called on a finished or full board
            None => board.get_valid_moves()[0],
        }
    }
}

impl MinimaxAgent {
    pub fn new(player: Player, difficulty: Difficulty) -> MinimaxAgent {
        MinimaxAgent {
            player,
            difficulty,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(player: Player, difficulty: Difficulty, seed: u64) -> MinimaxAgent {
        MinimaxAgent {
            player,
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Recursively score the position, alternating the player to move and the
    /// maximizing role. Returns the best score and the first move achieving
    /// it (strict comparisons, so ties go to the lowest index).
    fn minimax(
        &self,
        cells: &mut [Cell; 9],
        to_move: Player,
        maximizing: bool,
    ) -> (i32, Option<usize>) {
        let score = self.evaluate(cells);
        if score != 0 || !cells.contains(&Empty) {
            return (score, None);
        }

        let mut best_move = None;
        if maximizing {
            let mut best_score = i32::MIN;
            for idx in 0..9 {
                if cells[idx] == Empty {
                    cells[idx] = Full(to_move);
                    let (current, _) = self.minimax(cells, to_move.get_opponent(), false);
                    cells[idx] = Empty;
                    if current > best_score {
                        best_score = current;
                        best_move = Some(idx);
                    }
                }
            }
            (best_score, best_move)
        } else {
            let mut best_score = i32::MAX;
            for idx in 0..9 {
                if cells[idx] == Empty {
                    cells[idx] = Full(to_move);
                    let (current, _) = self.minimax(cells, to_move.get_opponent(), true);
                    cells[idx] = Empty;
                    if current < best_score {
                        best_score = current;
                        best_move = Some(idx);
                    }
                }
            }
            (best_score, best_move)
        }
    }

    /// Static score from this agent's perspective: +10 if we have a completed
    /// line, -10 if the opponent does, 0 otherwise.
    fn evaluate(&self, cells: &[Cell; 9]) -> i32 {
        for pattern in WIN_PATTERNS.iter() {
            if let Full(player) = cells[pattern[0]] {
                if cells[pattern[1]] == Full(player) && cells[pattern[2]] == Full(player) {
                    return if player == self.player {
                        WIN_SCORE
                    } else {
                        LOSS_SCORE
                    };
                }
            }
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState::Ongoing;
    use crate::game::Player::{P1, P2};

    #[test]
    fn test_empty_board_ties_break_to_lowest_index() {
        // every opening move is a draw with perfect play, so the scan keeps
        // the first one
        let mut agent = MinimaxAgent::new(P1, Difficulty::Hard);
        assert!(agent.choose_move(&Board::new()) == 0);
    }

    #[test]
    fn test_takes_immediate_win() {
        // x x .      P1 to move, cell 2 wins
        // o o .
        // . . .
        let mut board = Board::new();
        for &idx in [0, 3, 1, 4].iter() {
            board.apply_move(idx);
        }
        assert!(board.to_move == P1);
        let mut agent = MinimaxAgent::new(P1, Difficulty::Hard);
        assert!(agent.choose_move(&board) == 2);
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // x x .      P2 to move, must block cell 2
        // . o .
        // . . .
        let mut board = Board::new();
        for &idx in [0, 4, 1].iter() {
            board.apply_move(idx);
        }
        assert!(board.to_move == P2);
        let mut agent = MinimaxAgent::new(P2, Difficulty::Hard);
        assert!(agent.choose_move(&board) == 2);
    }

    #[test]
    fn test_prefers_win_over_block() {
        // . x x      P1 to move; winning at 0 beats blocking P2's row at 3
        // . o o
        // . . .
        let mut board = Board::new();
        for &idx in [1, 4, 2, 5].iter() {
            board.apply_move(idx);
        }
        assert!(board.to_move == P1);
        let mut agent = MinimaxAgent::new(P1, Difficulty::Hard);
        assert!(agent.choose_move(&board) == 0);
    }

    #[test]
    fn test_search_does_not_mutate_the_live_board() {
        let mut board = Board::new();
        board.apply_move(4);
        let snapshot = board.clone();
        let mut agent = MinimaxAgent::new(P2, Difficulty::Hard);
        agent.choose_move(&board);
        assert!(board == snapshot);
    }

    #[test]
    fn test_easy_agent_still_plays_legal_moves() {
        let mut agent = MinimaxAgent::seeded(P2, Difficulty::Easy, 123);
        let mut board = Board::new();
        board.apply_move(0);
        for _ in 0..30 {
            let idx = agent.choose_move(&board);
            assert!(board.is_legal_move(idx));
        }
        assert!(board.state == Ongoing);
    }
}
