//! Tic-tac-toe round progression: input routing, the 8-pattern win check,
//! and statistics accounting.

use super::types::{Player, Stats, TicTacToeGame, BOARD_SIZE};

/// Every completed line: 3 rows, 3 columns, 2 diagonals (cell indices).
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// UI-agnostic inputs for a tic-tac-toe sitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeInput {
    Up,
    Down,
    Left,
    Right,
    Place,
    NewGame,
    ResetStats,
    Other,
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Win { winner: Player, cells: [usize; 3] },
    Draw,
}

/// Route one input. Returns true when the statistics changed and should be
/// persisted by the caller.
pub fn process_input(game: &mut TicTacToeGame, input: TicTacToeInput) -> bool {
    // A pending statistics reset consumes the next input: a second reset
    // press confirms, anything else cancels.
    if game.reset_stats_pending {
        game.reset_stats_pending = false;
        if input == TicTacToeInput::ResetStats {
            game.stats = Stats::default();
            return true;
        }
        return false;
    }

    match input {
        TicTacToeInput::Up => game.move_cursor(-1, 0),
        TicTacToeInput::Down => game.move_cursor(1, 0),
        TicTacToeInput::Left => game.move_cursor(0, -1),
        TicTacToeInput::Right => game.move_cursor(0, 1),
        TicTacToeInput::Place => {
            let (row, col) = game.cursor;
            // Stats change exactly when this move finished the round.
            return make_move(game, row, col) && game.game_over;
        }
        TicTacToeInput::NewGame => game.reset(),
        TicTacToeInput::ResetStats => game.reset_stats_pending = true,
        TicTacToeInput::Other => {}
    }
    false
}

/// Place the current player's mark at (row, col). Moves on occupied cells
/// or after the round ends are rejected with no state change. A move that
/// finishes the round records it in the statistics.
pub fn make_move(game: &mut TicTacToeGame, row: usize, col: usize) -> bool {
    if game.game_over || !game.is_valid_move(row, col) {
        return false;
    }

    game.board[row * BOARD_SIZE + col] = Some(game.current_player);

    match check_round_end(&game.board) {
        Some(RoundOutcome::Win { winner, cells }) => {
            game.game_over = true;
            game.winner = Some(winner);
            game.winning_cells = Some(cells);
            game.stats.record(Some(winner));
        }
        Some(RoundOutcome::Draw) => {
            game.game_over = true;
            game.stats.record(None);
        }
        None => game.current_player = game.current_player.opponent(),
    }
    true
}

/// Scan the fixed patterns; a full board with no completed line is a draw.
pub fn check_round_end(board: &[Option<Player>; 9]) -> Option<RoundOutcome> {
    for pattern in WIN_PATTERNS {
        let [a, b, c] = pattern;
        if let Some(player) = board[a] {
            if board[b] == Some(player) && board[c] == Some(player) {
                return Some(RoundOutcome::Win {
                    winner: player,
                    cells: pattern,
                });
            }
        }
    }
    if board.iter().all(|cell| cell.is_some()) {
        return Some(RoundOutcome::Draw);
    }
    None
}

/// Status line text for the scene.
pub fn status_message(game: &TicTacToeGame) -> String {
    if game.game_over {
        match game.winner {
            Some(winner) => format!("Player {} wins!", winner.mark()),
            None => "Draw!".to_string(),
        }
    } else {
        format!("Player {} to move", game.current_player.mark())
    }
}
