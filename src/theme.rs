//! Light/dark theme selection and the per-theme color palette.
//!
//! The chosen theme persists under the `theme` storage key. When nothing is
//! saved (or the saved value is unreadable) the terminal's advertised
//! background is consulted via the `COLORFGBG` convention, defaulting to
//! dark.

use crate::storage::Storage;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::io;

/// Storage key holding the persisted theme.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::light(),
            Self::Dark => Palette::dark(),
        }
    }
}

/// Colors every scene draws with. One fixed set per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub bird: Color,
    pub pipe: Color,
    pub x_mark: Color,
    pub o_mark: Color,
    pub winning: Color,
    pub cursor: Color,
    pub danger: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            text: Color::White,
            dim: Color::DarkGray,
            border: Color::Cyan,
            accent: Color::Yellow,
            bird: Color::Yellow,
            pipe: Color::Green,
            x_mark: Color::LightRed,
            o_mark: Color::LightBlue,
            winning: Color::Magenta,
            cursor: Color::Yellow,
            danger: Color::LightRed,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            text: Color::Black,
            dim: Color::Gray,
            border: Color::Blue,
            accent: Color::Blue,
            bird: Color::Yellow,
            pipe: Color::Green,
            x_mark: Color::Red,
            o_mark: Color::Blue,
            winning: Color::Magenta,
            cursor: Color::Blue,
            danger: Color::Red,
        }
    }
}

/// Theme implied by the terminal environment, defaulting to dark.
pub fn system_theme() -> Theme {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| theme_from_colorfgbg(&value))
        .unwrap_or(Theme::Dark)
}

/// Parse the `COLORFGBG` convention ("fg;bg" or "fg;default;bg"): the last
/// field is the background color index. 0-6 and 8 are dark backgrounds, 7
/// and 9-15 light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        0..=6 | 8 => Some(Theme::Dark),
        7 | 9..=15 => Some(Theme::Light),
        _ => None,
    }
}

/// Saved theme when present and valid, otherwise the system preference.
pub fn load_theme(storage: &Storage) -> Theme {
    storage.get(THEME_KEY).unwrap_or_else(system_theme)
}

pub fn save_theme(storage: &Storage, theme: Theme) -> io::Result<()> {
    storage.set(THEME_KEY, &theme)
}
