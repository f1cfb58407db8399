/// Run a batch of random-vs-minimax games and print aggregate statistics.
use clap::Parser;

use tictactoe::{Difficulty, GameStats, MinimaxAgent, Player, RandomAgent, Session};

#[derive(Parser, Debug)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Seed for the random agent, for a reproducible tournament
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();
    let mut stats = GameStats::new();

    println!("Tournament: random (x) vs minimax (o), {} games", args.games);

    for round in 0..args.games {
        let mut random = match args.seed {
            Some(seed) => RandomAgent::seeded(Player::P1, seed + round as u64),
            None => RandomAgent::new(Player::P1),
        };
        let mut minimax = MinimaxAgent::new(Player::P2, Difficulty::Hard);

        let (endstate, moves) = Session::new(&mut random, &mut minimax).play();
        stats.record_game(endstate, moves);

        println!("Game {}: {:?} in {} moves", round + 1, endstate, moves);
    }

    stats.print_stats();
}
