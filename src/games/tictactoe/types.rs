//! Tic-tac-toe data structures and the persisted statistics record.

use serde::{Deserialize, Serialize};

/// Board side length. Cells are stored row-major, indices 0..9.
pub const BOARD_SIZE: usize = 3;

/// Storage key for the win/loss/draw statistics.
pub const STATS_KEY: &str = "stats";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub fn mark(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

/// Lifetime statistics across rounds. Persisted as flat JSON under
/// [`STATS_KEY`], updated exactly once per finished round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub games_played: u32,
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Stats {
    /// Tally one finished round; `None` records a draw.
    pub fn record(&mut self, winner: Option<Player>) {
        self.games_played += 1;
        match winner {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }
}

/// State for one tic-tac-toe sitting: the current round plus the lifetime
/// statistics loaded at entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TicTacToeGame {
    pub board: [Option<Player>; 9],
    /// Whose move it is. X always opens a round.
    pub current_player: Player,
    pub game_over: bool,
    pub winner: Option<Player>,
    /// The completed pattern, kept for the display highlight.
    pub winning_cells: Option<[usize; 3]>,
    /// Board cursor as (row, col).
    pub cursor: (usize, usize),
    pub stats: Stats,
    /// Set after the first press of the statistics reset; a second press
    /// confirms, anything else cancels.
    pub reset_stats_pending: bool,
}

impl TicTacToeGame {
    pub fn new(stats: Stats) -> Self {
        Self {
            board: [None; 9],
            current_player: Player::X,
            game_over: false,
            winner: None,
            winning_cells: None,
            cursor: (1, 1),
            stats,
            reset_stats_pending: false,
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        self.board[row * BOARD_SIZE + col]
    }

    /// A move is valid on an empty in-range cell.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE && self.cell(row, col).is_none()
    }

    /// Move the cursor, clamped to the board.
    pub fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let (row, col) = self.cursor;
        let max = BOARD_SIZE as i32 - 1;
        self.cursor = (
            (row as i32 + d_row).clamp(0, max) as usize,
            (col as i32 + d_col).clamp(0, max) as usize,
        );
    }

    /// Start a new round. Statistics and cursor position carry over.
    pub fn reset(&mut self) {
        self.board = [None; 9];
        self.current_player = Player::X;
        self.game_over = false;
        self.winner = None;
        self.winning_cells = None;
        self.reset_stats_pending = false;
    }
}
