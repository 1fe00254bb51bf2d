pub mod bricks;
pub mod entities;
pub mod geometry;
pub mod state;

pub use state::{GameState, Phase};

/// Playfield size in world units
pub const SCREEN_WIDTH: f32 = 1300.0;
pub const SCREEN_HEIGHT: f32 = 800.0;

/// Discrete player intents produced by the input adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeftStart,
    MoveLeftStop,
    MoveRightStart,
    MoveRightStop,
    TogglePause,
    StartOrRestart,
    Quit,
}
