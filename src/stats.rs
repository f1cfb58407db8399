/// Aggregate statistics over multiple games.
use crate::game::EndState;

use crate::game::EndState::{Draw, Winner};
use crate::game::Player::{P1, P2};

/// Tallies game results. Owned by whatever drives repeated sessions and
/// passed by reference, there is no global instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameStats {
    pub games_played: usize,
    pub p1_wins: usize,
    pub p2_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl GameStats {
    pub fn new() -> GameStats {
        GameStats::default()
    }

    /// Record the result of one finished game.
    pub fn record_game(&mut self, endstate: EndState, moves: usize) {
        self.games_played += 1;
        self.total_moves += moves;
        match endstate {
            Winner(P1) => self.p1_wins += 1,
            Winner(P2) => self.p2_wins += 1,
            Draw => self.draws += 1,
        }
    }

    /// Average number of moves per game, 0.0 before any game is recorded.
    pub fn average_moves(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games_played as f64
    }

    pub fn reset(&mut self) {
        *self = GameStats::new();
    }

    /// Print a formatted summary to stdout.
    pub fn print_stats(&self) {
        println!("\nGame statistics:");
        println!("Games played: {}", self.games_played);
        println!("P1 (x) wins:  {}", self.p1_wins);
        println!("P2 (o) wins:  {}", self.p2_wins);
        println!("Draws:        {}", self.draws);
        println!("Average moves per game: {:.1}", self.average_moves());
    }
}

#[test]
fn test_record_and_aggregate() {
    let mut stats = GameStats::new();
    stats.record_game(Winner(P1), 5);
    stats.record_game(Winner(P2), 7);
    stats.record_game(Draw, 9);
    stats.record_game(Winner(P1), 6);

    assert!(stats.games_played == 4);
    assert!(stats.p1_wins == 2);
    assert!(stats.p2_wins == 1);
    assert!(stats.draws == 1);
    assert!((stats.average_moves() - 6.75).abs() < 1e-9);
}

#[test]
fn test_reset() {
    let mut stats = GameStats::new();
    stats.record_game(Draw, 9);
    stats.reset();
    assert!(stats == GameStats::new());
    assert!(stats.average_moves() == 0.0);
}
