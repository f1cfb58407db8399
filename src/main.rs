/// Play a game of tic-tac-toe from the terminal.
use clap::{Parser, ValueEnum};

use tictactoe::{
    Difficulty, HumanAgent, MinimaxAgent, Player, RandomAgent, Session, TicTacToeAgent,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AgentKind {
    /// Moves are entered on stdin
    Human,
    /// Picks uniformly from the open cells
    Random,
    /// Full minimax search, never loses
    Minimax,
    /// Minimax that plays a random move 30% of the time
    MinimaxEasy,
}

impl AgentKind {
    fn build(self, player: Player, seed: Option<u64>) -> Box<dyn TicTacToeAgent> {
        match self {
            AgentKind::Human => Box::new(HumanAgent::new(player)),
            AgentKind::Random => Box::new(match seed {
                Some(seed) => RandomAgent::seeded(player, seed),
                None => RandomAgent::new(player),
            }),
            AgentKind::Minimax => Box::new(MinimaxAgent::new(player, Difficulty::Hard)),
            AgentKind::MinimaxEasy => Box::new(match seed {
                Some(seed) => MinimaxAgent::seeded(player, Difficulty::Easy, seed),
                None => MinimaxAgent::new(player, Difficulty::Easy),
            }),
        }
    }
}

/// Tic-tac-toe: pick an agent for each side and play one game.
#[derive(Parser, Debug)]
struct Args {
    /// Who plays x (moves first)
    #[arg(long, value_enum, default_value = "human")]
    p1: AgentKind,

    /// Who plays o
    #[arg(long, value_enum, default_value = "minimax")]
    p2: AgentKind,

    /// Seed for the random agents, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    println!("Tic-tac-toe: {:?} (x) vs {:?} (o)", args.p1, args.p2);

    let mut p1_agent = args.p1.build(Player::P1, args.seed);
    let mut p2_agent = args.p2.build(Player::P2, args.seed);

    Session::new(p1_agent.as_mut(), p2_agent.as_mut())
        .show_board(true)
        .play();
}
