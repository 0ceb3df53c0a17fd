//! Tic-tac-toe with lifetime win/loss/draw statistics.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
