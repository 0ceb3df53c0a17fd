//! Chrome shared by the game scenes: the bordered screen layout and the
//! two-row status bar.

use crate::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Regions of a game screen.
pub struct GameLayout {
    pub content: Rect,
    pub status_bar: Rect,
    pub side_panel: Option<Rect>,
}

/// Pure geometry of a game screen: one-cell border inset, an optional
/// fixed-width panel on the right, two status rows at the bottom of the
/// remaining space. Pointer hit-testing reuses this so clicks land exactly
/// where the scene drew.
pub fn layout_rects(area: Rect, side_panel_width: Option<u16>) -> GameLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);

    let (main, side_panel) = match side_panel_width {
        Some(width) => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(10), Constraint::Length(width)])
                .split(inner);
            (columns[0], Some(columns[1]))
        }
        None => (inner, None),
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(main);

    GameLayout {
        content: rows[0],
        status_bar: rows[1],
        side_panel,
    }
}

/// Clear the area, draw the themed border, and hand back the inner regions.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    palette: &Palette,
    side_panel_width: Option<u16>,
) -> GameLayout {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.background).fg(palette.text));
    frame.render_widget(block, area);
    layout_rects(area, side_panel_width)
}

/// Status bar: a highlighted message row with a dim key-hint row under it.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    message_color: Color,
    controls: &str,
    palette: &Palette,
) {
    if area.height == 0 {
        return;
    }
    let message_row = Rect { height: 1, ..area };
    let message_line = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default()
            .fg(message_color)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(message_line, message_row);

    if area.height < 2 {
        return;
    }
    let controls_row = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    let controls_line = Paragraph::new(Line::from(Span::styled(
        controls,
        Style::default().fg(palette.dim),
    )));
    frame.render_widget(controls_line, controls_row);
}
