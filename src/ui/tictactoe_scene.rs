//! Tic-tac-toe scene: centered board with cursor and winning-line
//! highlight, a statistics side panel, and the status bar.

use super::game_common::{create_game_layout, layout_rects, render_status_bar};
use crate::games::tictactoe::{status_message, Player, TicTacToeGame, BOARD_SIZE};
use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CONTROLS: &str = "[Arrows] Move  [Enter] Place  [n] New round  [r] Reset stats  [Esc] Menu";

/// Statistics panel width.
const PANEL_WIDTH: u16 = 24;

/// On-screen cell footprint: 5 columns wide, 1 row tall, with one separator
/// column/row between cells.
const CELL_WIDTH: u16 = 5;
const CELL_STRIDE_X: u16 = CELL_WIDTH + 1;
const CELL_STRIDE_Y: u16 = 2;
const BOARD_WIDTH: u16 = CELL_WIDTH * BOARD_SIZE as u16 + 2;
const BOARD_HEIGHT: u16 = 2 * BOARD_SIZE as u16 - 1;

pub fn draw(frame: &mut Frame, area: Rect, game: &TicTacToeGame, palette: &Palette) {
    let layout = create_game_layout(frame, area, " Tic-Tac-Toe ", palette, Some(PANEL_WIDTH));

    render_board(frame, layout.content, game, palette);
    if let Some(panel) = layout.side_panel {
        render_stats_panel(frame, panel, game, palette);
    }

    let (message, color) = if game.reset_stats_pending {
        (
            "Press r again to reset statistics".to_string(),
            palette.danger,
        )
    } else {
        let color = if game.game_over {
            palette.accent
        } else {
            palette.text
        };
        (status_message(game), color)
    };
    render_status_bar(frame, layout.status_bar, &message, color, CONTROLS, palette);
}

/// Board cell under a screen position, for pointer play. None on
/// separators, outside the board, or when the board does not fit.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<(usize, usize)> {
    let content = layout_rects(area, Some(PANEL_WIDTH)).content;
    let (x0, y0) = board_origin(content)?;
    if column < x0 || row < y0 {
        return None;
    }

    let dx = column - x0;
    let dy = row - y0;
    let cell_col = (dx / CELL_STRIDE_X) as usize;
    let cell_row = (dy / CELL_STRIDE_Y) as usize;
    if cell_col >= BOARD_SIZE || cell_row >= BOARD_SIZE {
        return None;
    }
    if dx % CELL_STRIDE_X >= CELL_WIDTH || dy % CELL_STRIDE_Y == 1 {
        return None;
    }
    Some((cell_row, cell_col))
}

/// Top-left screen corner of the centered board, or None if it cannot fit.
fn board_origin(content: Rect) -> Option<(u16, u16)> {
    if content.width < BOARD_WIDTH || content.height < BOARD_HEIGHT {
        return None;
    }
    Some((
        content.x + (content.width - BOARD_WIDTH) / 2,
        content.y + (content.height - BOARD_HEIGHT) / 2,
    ))
}

fn render_board(frame: &mut Frame, content: Rect, game: &TicTacToeGame, palette: &Palette) {
    let Some((x0, y0)) = board_origin(content) else {
        let hint = Paragraph::new("Terminal too small for the board")
            .style(Style::default().fg(palette.dim));
        frame.render_widget(hint, content);
        return;
    };

    let separator_style = Style::default().fg(palette.dim);
    let row_separator = "─".repeat(CELL_WIDTH as usize);

    for row in 0..BOARD_SIZE {
        let mut spans = Vec::new();
        for col in 0..BOARD_SIZE {
            spans.push(cell_span(game, row, col, palette));
            if col < BOARD_SIZE - 1 {
                spans.push(Span::styled("│", separator_style));
            }
        }
        let line = Paragraph::new(Line::from(spans));
        frame.render_widget(
            line,
            Rect::new(x0, y0 + row as u16 * CELL_STRIDE_Y, BOARD_WIDTH, 1),
        );

        if row < BOARD_SIZE - 1 {
            let separator = Paragraph::new(Line::from(Span::styled(
                format!(
                    "{}┼{}┼{}",
                    row_separator, row_separator, row_separator
                ),
                separator_style,
            )));
            frame.render_widget(
                separator,
                Rect::new(x0, y0 + row as u16 * CELL_STRIDE_Y + 1, BOARD_WIDTH, 1),
            );
        }
    }
}

fn cell_span(
    game: &TicTacToeGame,
    row: usize,
    col: usize,
    palette: &Palette,
) -> Span<'static> {
    let is_cursor = game.cursor == (row, col) && !game.game_over;
    let is_winning = game
        .winning_cells
        .map_or(false, |cells| cells.contains(&(row * BOARD_SIZE + col)));

    let (symbol, style) = match game.cell(row, col) {
        Some(player) => {
            let color = match player {
                Player::X => palette.x_mark,
                Player::O => palette.o_mark,
            };
            let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
            if is_winning {
                style = style.fg(palette.winning);
            }
            if is_cursor {
                style = style.bg(palette.dim);
            }
            (player.mark(), style)
        }
        None => {
            if is_cursor {
                (
                    '□',
                    Style::default()
                        .fg(palette.cursor)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ('·', Style::default().fg(palette.dim))
            }
        }
    };

    Span::styled(format!("  {}  ", symbol), style)
}

fn render_stats_panel(frame: &mut Frame, panel: Rect, game: &TicTacToeGame, palette: &Palette) {
    let block = Block::default()
        .title(" Statistics ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let label = Style::default().fg(palette.dim);
    let value = Style::default().fg(palette.text);
    let stats = &game.stats;

    let turn_marker = |player: Player| {
        if !game.game_over && game.current_player == player {
            Span::styled("▸ ", Style::default().fg(palette.accent))
        } else {
            Span::raw("  ")
        }
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("  "),
            Span::styled("Games played  ", label),
            Span::styled(stats.games_played.to_string(), value),
        ]),
        Line::from(vec![
            turn_marker(Player::X),
            Span::styled("X wins        ", label),
            Span::styled(
                stats.x_wins.to_string(),
                Style::default().fg(palette.x_mark),
            ),
        ]),
        Line::from(vec![
            turn_marker(Player::O),
            Span::styled("O wins        ", label),
            Span::styled(
                stats.o_wins.to_string(),
                Style::default().fg(palette.o_mark),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("Draws         ", label),
            Span::styled(stats.draws.to_string(), value),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
