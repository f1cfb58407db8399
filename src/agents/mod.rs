/// Agents for TicTacToe.
mod minimax_agent;
pub use minimax_agent::{Difficulty, MinimaxAgent};

use std::io;
use std::process;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::game::{Board, Player};

// Error messages
const BAD_INPUT: &str = "bad input";
const OUT_OF_RANGE: &str = "out of range";

/// An agent that will choose a valid move given the state of the game board.
/// Self is mutable because AI agents may need their own rng state; the board
/// is read-only, agents never mutate the live game.
pub trait TicTacToeAgent {
    fn choose_move(&mut self, board: &Board) -> usize;
}

/*
 * -----------
 * Human Agent
 * -----------
 */

/// An agent controlled by the user running the program.
pub struct HumanAgent {
    pub player: Player,
}

impl TicTacToeAgent for HumanAgent {
    /// Keep prompting until the user enters a move that is legal on the
    /// current board.
    fn choose_move(&mut self, board: &Board) -> usize {
        loop {
            println!(
                "{:?} ({}), enter a position (1-9):",
                self.player,
                self.player.mark()
            );
            match self.get_user_input() {
                Ok(idx) if board.is_legal_move(idx) => return idx,
                Ok(_) => println!("That cell is taken, try again."),
                Err(_) => println!("Please enter a number between 1 and 9."),
            }
        }
    }
}

impl HumanAgent {
    pub fn new(player: Player) -> HumanAgent {
        HumanAgent { player }
    }

    /// Read one line from stdin and parse it as a position.
    fn get_user_input(&self) -> Result<usize, &'static str> {
        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            // stdin closed, there is nothing more to prompt for
            Ok(0) => {
                println!("\nGame interrupted.");
                process::exit(0);
            }
            Ok(_) => parse_position(&input),
            Err(_) => Err(BAD_INPUT),
        }
    }
}

/// Parse user input as a 1-based position ("1" through "9") into a 0-based
/// cell index.
pub fn parse_position(input: &str) -> Result<usize, &'static str> {
    let position: usize = input.trim().parse().map_err(|_| BAD_INPUT)?;
    if position < 1 || position > 9 {
        return Err(OUT_OF_RANGE);
    }
    Ok(position - 1)
}

/*
 * ------------
 * Random Agent
 * ------------
 */

/// Agent that picks uniformly from the valid moves. Carries its own rng so
/// that games can be replayed deterministically from a seed.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    pub player: Player,
    rng: StdRng,
}

impl TicTacToeAgent for RandomAgent {
    fn choose_move(&mut self, board: &Board) -> usize {
        let valid_moves = board.get_valid_moves();
        // the session driver never asks for a move on a finished board
        *valid_moves.choose(&mut self.rng).unwrap()
    }
}

impl RandomAgent {
    pub fn new(player: Player) -> RandomAgent {
        RandomAgent {
            player,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(player: Player, seed: u64) -> RandomAgent {
        RandomAgent {
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player::{P1, P2};

    #[test]
    fn test_parse_position() {
        assert!(parse_position("1\n") == Ok(0));
        assert!(parse_position("9\n") == Ok(8));
        assert!(parse_position(" 5 ") == Ok(4));
        assert!(parse_position("0") == Err(OUT_OF_RANGE));
        assert!(parse_position("10") == Err(OUT_OF_RANGE));
        assert!(parse_position("a\n") == Err(BAD_INPUT));
        assert!(parse_position("") == Err(BAD_INPUT));
        assert!(parse_position("-3") == Err(BAD_INPUT));
    }

    #[test]
    fn test_random_agent_only_picks_valid_moves() {
        let mut agent = RandomAgent::seeded(P2, 42);
        let mut board = Board::new();
        board.apply_move(4);
        for _ in 0..50 {
            let idx = agent.choose_move(&board);
            assert!(board.is_legal_move(idx));
        }
    }

    #[test]
    fn test_seeded_random_agents_are_deterministic() {
        let board = Board::new();
        let mut first = RandomAgent::seeded(P1, 7);
        let mut second = RandomAgent::seeded(P1, 7);
        for _ in 0..20 {
            assert!(first.choose_move(&board) == second.choose_move(&board));
        }
    }
}
