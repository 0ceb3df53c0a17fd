//! Filled shapes for the canvas scene.
//!
//! The stock canvas shapes draw outlines only; the play field needs solid
//! pipes and a solid bird. Both shapes sample their interior in world units
//! at a step finer than one raster dot, and rely on the painter to clip
//! anything outside the canvas bounds.

use ratatui::style::Color;
use ratatui::widgets::canvas::{Painter, Shape};

/// World units between interior samples.
const SAMPLE_STEP: f64 = 1.0;

/// Axis-aligned solid rectangle; `(x, y)` is the bottom-left corner in
/// canvas coordinates (y grows upward).
#[derive(Debug, Clone, Copy)]
pub struct FilledRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

impl Shape for FilledRect {
    fn draw(&self, painter: &mut Painter) {
        let mut y = self.y;
        while y <= self.y + self.height {
            let mut x = self.x;
            while x <= self.x + self.width {
                if let Some((px, py)) = painter.get_point(x, y) {
                    painter.paint(px, py, self.color);
                }
                x += SAMPLE_STEP;
            }
            y += SAMPLE_STEP;
        }
    }
}

/// Solid circle centered on `(x, y)` in canvas coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FilledCircle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

impl Shape for FilledCircle {
    fn draw(&self, painter: &mut Painter) {
        let r_squared = self.radius * self.radius;
        let mut dy = -self.radius;
        while dy <= self.radius {
            let mut dx = -self.radius;
            while dx <= self.radius {
                if dx * dx + dy * dy <= r_squared {
                    if let Some((px, py)) = painter.get_point(self.x + dx, self.y + dy) {
                        painter.paint(px, py, self.color);
                    }
                }
                dx += SAMPLE_STEP;
            }
            dy += SAMPLE_STEP;
        }
    }
}
