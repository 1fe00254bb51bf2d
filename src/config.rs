use std::ffi::OsString;

use clap::Parser;

use crate::error::BreakoutError;

/// Base speed table; every entry is scaled by `SPEED_SCALE`.
const SPEEDS: [f32; 10] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
const SPEED_SCALE: f32 = 25.0;
const PADDLE_LENGTHS: [f32; 5] = [70.0, 80.0, 90.0, 100.0, 110.0];

const DEFAULT_BALL_SPEED: usize = 5;
const DEFAULT_PADDLE_SPEED: usize = 7;
const DEFAULT_PADDLE_LENGTH: usize = 1;

#[derive(Parser, Debug)]
#[command(name = "breakout", version)]
#[command(about = "Clear the bricks, keep the ball off the floor")]
struct Cli {
    /// Ball speed, 0 (slowest) to 9
    #[arg(value_parser = clap::value_parser!(u8).range(0..=9), requires = "paddle_speed")]
    ball_speed: Option<u8>,
    /// Paddle speed, 0 (slowest) to 9
    #[arg(value_parser = clap::value_parser!(u8).range(0..=9))]
    paddle_speed: Option<u8>,
    /// Paddle length, 0 (70) to 4 (110)
    #[arg(value_parser = clap::value_parser!(u8).range(0..=4))]
    paddle_length: Option<u8>,
}

/// Validated difficulty settings, stored as table indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub ball_speed_index: usize,
    pub paddle_speed_index: usize,
    pub paddle_length_index: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ball_speed_index: DEFAULT_BALL_SPEED,
            paddle_speed_index: DEFAULT_PADDLE_SPEED,
            paddle_length_index: DEFAULT_PADDLE_LENGTH,
        }
    }
}

impl GameConfig {
    /// Parse a full argv (program name first). Accepts no positionals, the two
    /// speeds, or the two speeds plus a paddle length.
    pub fn from_args<I, T>(args: I) -> Result<Self, BreakoutError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        let defaults = Self::default();
        Ok(Self {
            ball_speed_index: cli.ball_speed.map_or(defaults.ball_speed_index, usize::from),
            paddle_speed_index: cli.paddle_speed.map_or(defaults.paddle_speed_index, usize::from),
            paddle_length_index: cli.paddle_length.map_or(defaults.paddle_length_index, usize::from),
        })
    }

    /// World units per second on each axis
    pub fn ball_speed(&self) -> f32 {
        SPEEDS[self.ball_speed_index] * SPEED_SCALE
    }

    /// World units per second
    pub fn paddle_speed(&self) -> f32 {
        SPEEDS[self.paddle_speed_index] * SPEED_SCALE
    }

    pub fn paddle_length(&self) -> f32 {
        PADDLE_LENGTHS[self.paddle_length_index]
    }
}
