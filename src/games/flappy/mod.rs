//! Flappy bird: one-button piloting through scrolling pipe gaps.
//!
//! Plain data and world constants live in `types`, the fixed-step round
//! logic in `logic`. Drawing is a pure projection in `ui::flappy_scene`.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
