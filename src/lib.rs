//! Arcade: two small terminal games behind one menu.
//!
//! Tic-tac-toe with persisted win/loss/draw statistics, and a flappy-bird
//! clone driven by a fixed-step frame loop. Saved state is a flat JSON
//! key-value store under `~/.arcade`; the light/dark theme lives there too.

pub mod build_info;
pub mod games;
pub mod input;
pub mod scheduler;
pub mod storage;
pub mod theme;
pub mod ui;
