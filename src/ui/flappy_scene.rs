//! Flappy bird scene: a pure projection of the session state onto a canvas
//! spanning the play area's world coordinates, plus the status bar.

use super::game_common::{create_game_layout, layout_rects, render_status_bar};
use super::shapes::{FilledCircle, FilledRect};
use crate::games::flappy::{
    FlappyGame, BIRD_RADIUS, BIRD_X, PIPE_GAP, PIPE_WIDTH, PLAY_HEIGHT, PLAY_WIDTH,
};
use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::Canvas,
    Frame,
};

const CONTROLS: &str = "[Space/Click] Flap  [Esc] Menu";

pub fn draw(frame: &mut Frame, area: Rect, game: &FlappyGame, palette: &Palette) {
    let layout = create_game_layout(frame, area, " Flappy Bird ", palette, None);
    render_play_field(frame, layout.content, game, palette);
    let (message, color) = status_line(game, palette);
    render_status_bar(frame, layout.status_bar, &message, color, CONTROLS, palette);
}

/// The canvas region, derived from the same geometry `draw` renders with.
/// Pointer clicks inside it count as flaps.
pub fn play_area(area: Rect) -> Rect {
    layout_rects(area, None).content
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &FlappyGame, palette: &Palette) {
    let canvas = Canvas::default()
        .marker(Marker::HalfBlock)
        .x_bounds([0.0, PLAY_WIDTH])
        .y_bounds([0.0, PLAY_HEIGHT])
        .paint(|ctx| {
            // World y grows downward, canvas y upward; flip when projecting.
            for pipe in &game.pipes {
                // Solid above the gap...
                ctx.draw(&FilledRect {
                    x: pipe.x,
                    y: PLAY_HEIGHT - pipe.gap_top,
                    width: PIPE_WIDTH,
                    height: pipe.gap_top,
                    color: palette.pipe,
                });
                // ...and solid below it.
                ctx.draw(&FilledRect {
                    x: pipe.x,
                    y: 0.0,
                    width: PIPE_WIDTH,
                    height: PLAY_HEIGHT - pipe.gap_top - PIPE_GAP,
                    color: palette.pipe,
                });
            }

            ctx.draw(&FilledCircle {
                x: BIRD_X,
                y: PLAY_HEIGHT - game.bird.y,
                radius: BIRD_RADIUS,
                color: palette.bird,
            });

            ctx.print(
                10.0,
                PLAY_HEIGHT - 25.0,
                Line::from(Span::styled(
                    format!("Score: {}", game.score),
                    Style::default().fg(palette.text),
                )),
            );
        });
    frame.render_widget(canvas, area);
}

fn status_line(game: &FlappyGame, palette: &Palette) -> (String, Color) {
    if game.game_over {
        (
            format!(
                "Game over - score {}. Space or click to restart",
                game.score
            ),
            palette.danger,
        )
    } else if game.running {
        (format!("Score: {}", game.score), palette.accent)
    } else {
        ("Press Space or click to start".to_string(), palette.accent)
    }
}
