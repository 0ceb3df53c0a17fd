//! Title menu: pick a game, toggle the theme.

use crate::build_info;
use crate::games::GameKind;
use crate::theme::{Palette, Theme};
use chrono::{Datelike, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Selection state for the menu screen.
pub struct MenuState {
    pub selected_index: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn selected(&self) -> GameKind {
        GameKind::ALL[self.selected_index]
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.selected_index = (self.selected_index + 1).min(GameKind::ALL.len() - 1);
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn draw(frame: &mut Frame, area: Rect, menu: &MenuState, theme: Theme, palette: &Palette) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(" Arcade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.background).fg(palette.text));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1), // title
            Constraint::Length(1),
            Constraint::Length(GameKind::ALL.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1), // theme
            Constraint::Length(1), // hints
            Constraint::Min(0),
            Constraint::Length(1), // footer
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        "A R C A D E",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[1]);

    let items: Vec<ListItem> = GameKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let prefix = if i == menu.selected_index { "> " } else { "  " };
            let style = if i == menu.selected_index {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            ListItem::new(format!("  {}{}", prefix, kind.title())).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), rows[3]);

    let theme_line = Paragraph::new(Line::from(vec![
        Span::styled("  Theme: ", Style::default().fg(palette.dim)),
        Span::styled(theme.name(), Style::default().fg(palette.text)),
    ]));
    frame.render_widget(theme_line, rows[5]);

    let hints = Paragraph::new(Line::from(Span::styled(
        "  [↑/↓] Select  [Enter] Play  [t] Theme  [q] Quit",
        Style::default().fg(palette.dim),
    )));
    frame.render_widget(hints, rows[6]);

    let footer = Paragraph::new(Line::from(Span::styled(
        format!(
            "arcade {} ({})  -  {}",
            env!("CARGO_PKG_VERSION"),
            build_info::BUILD_COMMIT,
            Local::now().year()
        ),
        Style::default().fg(palette.dim),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, rows[8]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamps_to_game_list() {
        let mut menu = MenuState::new();
        assert_eq!(menu.selected(), GameKind::TicTacToe);

        menu.move_up();
        assert_eq!(menu.selected_index, 0);

        menu.move_down();
        assert_eq!(menu.selected(), GameKind::Flappy);
        menu.move_down();
        assert_eq!(menu.selected_index, GameKind::ALL.len() - 1);
    }
}
