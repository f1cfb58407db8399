/// Runs games between two agents.
use crate::agents::TicTacToeAgent;
use crate::game::{Board, EndState};

use crate::game::GameState::Ended;
use crate::game::Player::{P1, P2};

/// Drives one game between two agents, alternating turns until the board
/// reports an end state. The agents are only ever handed a shared reference
/// to the board; every mutation goes through `apply_move`.
pub struct Session<'a> {
    pub board: Board,
    p1_agent: &'a mut dyn TicTacToeAgent,
    p2_agent: &'a mut dyn TicTacToeAgent,
    // print the board and result to stdout as the game goes
    show_board: bool,
}

impl<'a> Session<'a> {
    pub fn new(
        p1_agent: &'a mut dyn TicTacToeAgent,
        p2_agent: &'a mut dyn TicTacToeAgent,
    ) -> Session<'a> {
        Session {
            board: Board::new(),
            p1_agent,
            p2_agent,
            show_board: false,
        }
    }

    pub fn show_board(mut self, show: bool) -> Session<'a> {
        self.show_board = show;
        self
    }

    /// Play the game to completion and return the end state along with the
    /// number of moves played. Automated agents guarantee legal moves, so an
    /// illegal one is a broken agent and panics rather than being retried.
    pub fn play(&mut self) -> (EndState, usize) {
        loop {
            if self.show_board {
                self.board.display();
            }

            let agent = match self.board.to_move {
                P1 => &mut *self.p1_agent,
                P2 => &mut *self.p2_agent,
            };
            let idx = agent.choose_move(&self.board);
            if !self.board.apply_move(idx) {
                panic!(
                    "agent for {:?} chose an illegal move {} on board {:?}",
                    self.board.to_move, idx, self.board
                );
            }

            if let Ended(endstate) = self.board.state {
                if self.show_board {
                    self.board.display();
                    display_result(endstate, &self.board);
                }
                return (endstate, self.board.moves_count);
            }
        }
    }
}

/// Print the result banner for a finished game.
pub fn display_result(endstate: EndState, board: &Board) {
    match endstate {
        EndState::Winner(player) => println!("{:?} ({}) wins!", player, player.mark()),
        EndState::Draw => println!("It's a draw!"),
    }
    if let Some(line) = board.winning_line {
        // report 1-based positions, matching the board display
        println!(
            "Winning line: {} {} {}",
            line[0] + 1,
            line[1] + 1,
            line[2] + 1
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{Difficulty, MinimaxAgent, RandomAgent};
    use crate::game::EndState::{Draw, Winner};

    #[test]
    fn test_random_vs_random_terminates() {
        let mut p1 = RandomAgent::seeded(P1, 11);
        let mut p2 = RandomAgent::seeded(P2, 22);
        let mut session = Session::new(&mut p1, &mut p2);
        let (endstate, moves) = session.play();
        assert!(moves >= 5 && moves <= 9);
        assert!(session.board.state == Ended(endstate));
        match endstate {
            Winner(player) => assert!(session.board.winning_line.is_some() && {
                let line = session.board.winning_line.unwrap();
                line.iter()
                    .all(|&i| session.board.cells[i] == crate::game::Cell::Full(player))
            }),
            Draw => assert!(moves == 9),
        }
    }

    #[test]
    fn test_minimax_vs_minimax_always_draws() {
        for seed in 0..3 {
            let mut p1 = MinimaxAgent::seeded(P1, Difficulty::Hard, seed);
            let mut p2 = MinimaxAgent::seeded(P2, Difficulty::Hard, seed + 100);
            let (endstate, moves) = Session::new(&mut p1, &mut p2).play();
            assert!(endstate == Draw);
            assert!(moves == 9);
        }
    }

    #[test]
    fn test_minimax_first_never_loses_to_random() {
        for seed in 0..20 {
            let mut p1 = MinimaxAgent::seeded(P1, Difficulty::Hard, seed);
            let mut p2 = RandomAgent::seeded(P2, seed);
            let (endstate, _) = Session::new(&mut p1, &mut p2).play();
            assert!(endstate != Winner(P2));
        }
    }

    #[test]
    fn test_minimax_second_never_loses_to_random() {
        for seed in 0..20 {
            let mut p1 = RandomAgent::seeded(P1, seed);
            let mut p2 = MinimaxAgent::seeded(P2, Difficulty::Hard, seed);
            let (endstate, _) = Session::new(&mut p1, &mut p2).play();
            assert!(endstate != Winner(P1));
        }
    }
}
