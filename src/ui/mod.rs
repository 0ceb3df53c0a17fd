//! Scene rendering. Every scene is a pure projection of game state onto the
//! frame; input handling lives in `crate::input` and reuses the same layout
//! geometry for pointer hit-testing.

pub mod flappy_scene;
pub mod game_common;
pub mod menu_scene;
pub mod shapes;
pub mod tictactoe_scene;
