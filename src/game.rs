/// Core tic-tac-toe game state and rules.
use std::fmt;

use Cell::{Empty, Full};
use EndState::{Draw, Winner};
use GameState::{Ended, Ongoing};
use Player::{P1, P2};

/// The 8 winning lines as cell indexes: 3 rows, then 3 columns, then the two
/// diagonals. Win detection scans them in this order.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Did the game end in a draw or was there a winner?
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EndState {
    Winner(Player),
    Draw,
}

/// Has the game ended or is it ongoing?
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameState {
    Ended(EndState),
    Ongoing,
}

/// Used for deciding whose turn it is. P1 goes first and plays 'x'.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub fn get_opponent(self) -> Player {
        match self {
            P1 => P2,
            P2 => P1,
        }
    }

    /// The mark this player puts on the board.
    pub fn mark(self) -> char {
        match self {
            P1 => 'x',
            P2 => 'o',
        }
    }
}

/// Represents a single cell of the tic-tac-toe board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Full(Player),
}

/// Store the state of a 3x3 tic-tac-toe board. Cells are indexed 0-8 in
/// row-major order (idx = row * 3 + col).
#[derive(Clone, PartialEq)]
pub struct Board {
    pub cells: [Cell; 9],
    // who gets to make the next move?
    pub to_move: Player,
    // number of moves accepted so far, equals the number of full cells
    pub moves_count: usize,
    pub state: GameState,
    // the pattern that ended the game, if someone won
    pub winning_line: Option<[usize; 3]>,
}

impl fmt::Debug for Board {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let mut board_repr = String::new();
        for cell in self.cells.iter() {
            board_repr.push(match cell {
                Empty => '.',
                Full(player) => player.mark(),
            });
        }
        write!(
            formatter,
            "Board {{ cells: [{}], to_move: {:?}, state: {:?} }}",
            board_repr, self.to_move, self.state
        )
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl Board {
    /// Return a new board with all cells empty and P1 to move.
    pub fn new() -> Board {
        Board {
            cells: [Empty; 9],
            to_move: P1,
            moves_count: 0,
            state: Ongoing,
            winning_line: None,
        }
    }

    /// Reset the board to its initial state in place.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// A move is legal iff the index is on the board, the cell is empty, and
    /// the game is still ongoing. Out-of-range indexes are not an error.
    pub fn is_legal_move(&self, idx: usize) -> bool {
        idx < 9 && self.cells[idx] == Empty && self.state == Ongoing
    }

    /// Return the indexes of the empty cells, in ascending order.
    pub fn get_valid_moves(&self) -> Vec<usize> {
        let mut valid_moves = Vec::new();
        for (i, cell) in self.cells.iter().enumerate() {
            if let Empty = cell {
                valid_moves.push(i);
            }
        }
        valid_moves
    }

    /// Place the active player's mark at idx. Returns false and leaves the
    /// board untouched if the move is illegal. The turn passes to the other
    /// player only if the game is still ongoing afterwards.
    pub fn apply_move(&mut self, idx: usize) -> bool {
        if !self.is_legal_move(idx) {
            return false;
        }
        self.cells[idx] = Full(self.to_move);
        self.moves_count += 1;
        self.update_state();

        if self.state == Ongoing {
            self.to_move = self.to_move.get_opponent();
        }

        true
    }

    /// Scan the win patterns for a completed line; otherwise check for a
    /// draw. The first filled pattern in WIN_PATTERNS order is recorded.
    fn update_state(&mut self) {
        for pattern in WIN_PATTERNS.iter() {
            if let Full(player) = self.cells[pattern[0]] {
                if self.cells[pattern[1]] == Full(player) && self.cells[pattern[2]] == Full(player)
                {
                    self.state = Ended(Winner(player));
                    self.winning_line = Some(*pattern);
                    return;
                }
            }
        }

        if self.moves_count == 9 {
            self.state = Ended(Draw);
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.state != Ongoing
    }

    /// Print the board to stdout with 1-based position labels on the empty
    /// cells, the way the human agent's input expects them:
    ///
    ///  x | 2 | 3
    /// ---+---+---
    ///  4 | o | 6
    /// ---+---+---
    ///  7 | 8 | 9
    pub fn display(&self) {
        println!();
        for row in 0..3 {
            let mut line = String::new();
            for col in 0..3 {
                let idx = row * 3 + col;
                let cell_repr = match self.cells[idx] {
                    Empty => std::char::from_digit((idx + 1) as u32, 10).unwrap(),
                    Full(player) => player.mark(),
                };
                line.push_str(&format!(" {} ", cell_repr));
                if col < 2 {
                    line.push('|');
                }
            }
            println!("{}", line);
            if row < 2 {
                println!("---+---+---");
            }
        }
        println!();
    }
}

#[test]
fn test_apply_move_alternates_turns() {
    let mut board = Board::new();
    assert!(board.to_move == P1);
    assert!(board.apply_move(4));
    assert!(board.to_move == P2);
    assert!(board.apply_move(0));
    assert!(board.to_move == P1);
    assert!(board.moves_count == 2);
    assert!(board.state == Ongoing);
}

#[test]
fn test_illegal_moves_are_noops() {
    let mut board = Board::new();
    assert!(board.apply_move(4));
    let snapshot = board.clone();

    // cell taken
    assert!(!board.apply_move(4));
    // out of range
    assert!(!board.apply_move(9));
    assert!(!board.apply_move(100));

    assert!(board == snapshot);
}

#[test]
fn test_moves_count_matches_full_cells() {
    let mut board = Board::new();
    for &idx in [4, 0, 8, 2, 6].iter() {
        assert!(board.apply_move(idx));
        let full = board.cells.iter().filter(|&&c| c != Empty).count();
        assert!(board.moves_count == full);
    }
}

#[test]
fn test_top_row_win() {
    // scenario: P1 takes the top row while P2 plays elsewhere
    let mut board = Board::new();
    for &idx in [0, 4, 1, 7].iter() {
        assert!(board.apply_move(idx));
        assert!(board.state == Ongoing);
    }
    assert!(board.apply_move(2));
    assert!(board.state == Ended(Winner(P1)));
    assert!(board.winning_line == Some([0, 1, 2]));
    // the winner stays the active player; the turn must not flip
    assert!(board.to_move == P1);
}

#[test]
fn test_column_and_diagonal_wins() {
    // left column for P1
    let mut board = Board::new();
    for &idx in [0, 1, 3, 2, 6].iter() {
        board.apply_move(idx);
    }
    assert!(board.state == Ended(Winner(P1)));
    assert!(board.winning_line == Some([0, 3, 6]));

    // anti-diagonal for P2
    let mut board = Board::new();
    for &idx in [0, 2, 1, 4, 3, 6].iter() {
        board.apply_move(idx);
    }
    assert!(board.state == Ended(Winner(P2)));
    assert!(board.winning_line == Some([2, 4, 6]));
}

#[test]
fn test_draw_game() {
    // x o x
    // o o x
    // x x o
    let mut board = Board::new();
    for &idx in [0, 1, 2, 4, 5, 3, 6, 8, 7].iter() {
        assert!(board.apply_move(idx));
    }
    assert!(board.moves_count == 9);
    assert!(board.state == Ended(Draw));
    assert!(board.winning_line == None);
}

#[test]
fn test_no_legal_moves_after_game_ends() {
    let mut board = Board::new();
    for &idx in [0, 4, 1, 7, 2].iter() {
        board.apply_move(idx);
    }
    assert!(board.is_game_over());
    for idx in 0..9 {
        assert!(!board.is_legal_move(idx));
        assert!(!board.apply_move(idx));
    }
    assert!(board.get_valid_moves() == vec![3, 5, 6, 8]);
}

#[test]
fn test_reset() {
    let mut board = Board::new();
    for &idx in [0, 4, 1, 7, 2].iter() {
        board.apply_move(idx);
    }
    board.reset();
    assert!(board == Board::new());
    assert!(board.get_valid_moves().len() == 9);
}
