//! Per-screen input dispatch: crossterm events into game-level inputs.
//!
//! Pointer hit-testing goes through the same layout helpers the scenes draw
//! with, so a click lands exactly on what was rendered.

use crate::games::flappy::{self, FlappyGame};
use crate::games::tictactoe::{self, TicTacToeGame, TicTacToeInput};
use crate::games::GameKind;
use crate::ui::menu_scene::MenuState;
use crate::ui::{flappy_scene, tictactoe_scene};
use crossterm::event::{
    Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// What the shell should do after an event inside a game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    /// Statistics changed; persist them.
    NeedsSave,
    ToMenu,
}

/// Outcome of an event on the menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Play(GameKind),
    ToggleTheme,
    Quit,
}

pub fn handle_menu_event(event: &Event, menu: &mut MenuState) -> MenuAction {
    let Some(code) = pressed_key(event) else {
        return MenuAction::None;
    };
    match code {
        KeyCode::Up => {
            menu.move_up();
            MenuAction::None
        }
        KeyCode::Down => {
            menu.move_down();
            MenuAction::None
        }
        KeyCode::Enter => MenuAction::Play(menu.selected()),
        KeyCode::Char('t') => MenuAction::ToggleTheme,
        KeyCode::Char('q') | KeyCode::Esc => MenuAction::Quit,
        _ => MenuAction::None,
    }
}

/// `area` is the full screen rect the flappy scene was drawn into.
pub fn handle_flappy_event(event: &Event, game: &mut FlappyGame, area: Rect) -> InputResult {
    if let Some(code) = pressed_key(event) {
        match code {
            KeyCode::Char(' ') => flappy::flap(game),
            KeyCode::Esc => return InputResult::ToMenu,
            _ => {}
        }
        return InputResult::Continue;
    }

    if let Some((column, row)) = left_click(event) {
        if rect_contains(flappy_scene::play_area(area), column, row) {
            flappy::flap(game);
        }
    }
    InputResult::Continue
}

pub fn handle_tictactoe_event(
    event: &Event,
    game: &mut TicTacToeGame,
    area: Rect,
) -> InputResult {
    if let Some(code) = pressed_key(event) {
        if code == KeyCode::Esc {
            return InputResult::ToMenu;
        }
        let input = match code {
            KeyCode::Up => TicTacToeInput::Up,
            KeyCode::Down => TicTacToeInput::Down,
            KeyCode::Left => TicTacToeInput::Left,
            KeyCode::Right => TicTacToeInput::Right,
            KeyCode::Enter | KeyCode::Char(' ') => TicTacToeInput::Place,
            KeyCode::Char('n') => TicTacToeInput::NewGame,
            KeyCode::Char('r') => TicTacToeInput::ResetStats,
            _ => TicTacToeInput::Other,
        };
        return if tictactoe::process_input(game, input) {
            InputResult::NeedsSave
        } else {
            InputResult::Continue
        };
    }

    if let Some((column, row)) = left_click(event) {
        if let Some((cell_row, cell_col)) = tictactoe_scene::cell_at(area, column, row) {
            // A click cancels a pending stats reset like any other input.
            if game.reset_stats_pending {
                game.reset_stats_pending = false;
                return InputResult::Continue;
            }
            game.cursor = (cell_row, cell_col);
            if tictactoe::make_move(game, cell_row, cell_col) && game.game_over {
                return InputResult::NeedsSave;
            }
        }
    }
    InputResult::Continue
}

fn pressed_key(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key.code),
        _ => None,
    }
}

fn left_click(event: &Event) -> Option<(u16, u16)> {
    match event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some((*column, *row)),
        _ => None,
    }
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Stats};
    use crossterm::event::{KeyEvent, KeyModifiers};

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    #[test]
    fn test_menu_navigation_and_launch() {
        let mut menu = MenuState::new();
        assert_eq!(handle_menu_event(&key(KeyCode::Down), &mut menu), MenuAction::None);
        assert_eq!(
            handle_menu_event(&key(KeyCode::Enter), &mut menu),
            MenuAction::Play(GameKind::Flappy)
        );
        assert_eq!(
            handle_menu_event(&key(KeyCode::Char('t')), &mut menu),
            MenuAction::ToggleTheme
        );
        assert_eq!(
            handle_menu_event(&key(KeyCode::Char('q')), &mut menu),
            MenuAction::Quit
        );
    }

    #[test]
    fn test_space_flaps_and_starts_a_session() {
        let mut game = FlappyGame::new();
        assert_eq!(
            handle_flappy_event(&key(KeyCode::Char(' ')), &mut game, AREA),
            InputResult::Continue
        );
        assert!(game.running);
    }

    #[test]
    fn test_click_inside_play_area_flaps() {
        let mut game = FlappyGame::new();
        let play = flappy_scene::play_area(AREA);
        handle_flappy_event(&click(play.x + 2, play.y + 2), &mut game, AREA);
        assert!(game.running);
    }

    #[test]
    fn test_click_outside_play_area_is_ignored() {
        let mut game = FlappyGame::new();
        // The screen border is outside the canvas.
        handle_flappy_event(&click(0, 0), &mut game, AREA);
        assert!(!game.running);
    }

    #[test]
    fn test_escape_leaves_the_flappy_screen() {
        let mut game = FlappyGame::new();
        assert_eq!(
            handle_flappy_event(&key(KeyCode::Esc), &mut game, AREA),
            InputResult::ToMenu
        );
    }

    #[test]
    fn test_click_places_a_mark_on_the_board() {
        let mut game = TicTacToeGame::new(Stats::default());
        // Find the screen position of cell (0, 0) by probing the area.
        let mut target = None;
        for column in 0..AREA.width {
            for row in 0..AREA.height {
                if tictactoe_scene::cell_at(AREA, column, row) == Some((0, 0)) {
                    target = Some((column, row));
                }
            }
        }
        let (column, row) = target.expect("board not rendered in test area");

        assert_eq!(
            handle_tictactoe_event(&click(column, row), &mut game, AREA),
            InputResult::Continue
        );
        assert_eq!(game.cell(0, 0), Some(Player::X));
        assert_eq!(game.cursor, (0, 0));
    }

    #[test]
    fn test_winning_key_placement_requests_save() {
        let mut game = TicTacToeGame::new(Stats::default());
        // X on the top row, O below; one X short of the win.
        tictactoe::make_move(&mut game, 0, 0);
        tictactoe::make_move(&mut game, 1, 0);
        tictactoe::make_move(&mut game, 0, 1);
        tictactoe::make_move(&mut game, 1, 1);
        game.cursor = (0, 2);

        assert_eq!(
            handle_tictactoe_event(&key(KeyCode::Enter), &mut game, AREA),
            InputResult::NeedsSave
        );
        assert_eq!(game.winner, Some(Player::X));
    }
}
