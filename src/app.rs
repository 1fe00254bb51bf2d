use std::io;
use std::thread;
use std::time::{Duration, Instant};

use log::info;

use crate::config::GameConfig;
use crate::game::{Command, GameState, Phase};

/// Repaint cadence, ~60 FPS
pub const FRAME_INTERVAL: Duration = Duration::from_micros(1_000_000 / 60);

/// Anything that can hand over the commands queued since the last call
/// without blocking.
pub trait CommandSource {
    fn poll_commands(&mut self, out: &mut Vec<Command>) -> io::Result<()>;
}

/// A drawing surface for one frame of the game.
pub trait Screen {
    fn draw(&mut self, state: &GameState, config: &GameConfig) -> io::Result<()>;
}

pub struct App {
    pub state: GameState,
    pub config: GameConfig,
    pub should_quit: bool,
    last_update: Instant,
    last_repaint: Option<Instant>,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config.ball_speed(), config.paddle_speed(), config.paddle_length()),
            config,
            should_quit: false,
            last_update: Instant::now(),
            last_repaint: None,
        }
    }

    pub fn on_command(&mut self, command: Command) {
        if command == Command::Quit {
            self.should_quit = true;
            return;
        }
        self.state.apply(command);
    }

    /// Advance by the real time elapsed since the previous tick. The clock
    /// keeps running outside `Playing` so a resume never sees the whole pause
    /// as one step.
    pub fn on_tick(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_update);
        self.last_update = now;
        if self.state.phase() == Phase::Playing {
            self.state.update(dt.as_secs_f32());
        }
    }

    fn repaint_due(&self, now: Instant) -> bool {
        self.last_repaint
            .map_or(true, |last| now.saturating_duration_since(last) > FRAME_INTERVAL)
    }

    /// Poll, simulate, repaint, sleep; until a quit command arrives.
    pub fn run<S: CommandSource, D: Screen>(&mut self, source: &mut S, screen: &mut D) -> io::Result<()> {
        let mut commands = Vec::new();
        self.last_update = Instant::now();

        loop {
            source.poll_commands(&mut commands)?;
            for command in commands.drain(..) {
                self.on_command(command);
            }
            if self.should_quit {
                info!("quit with score {}", self.state.score());
                return Ok(());
            }

            let now = Instant::now();
            self.on_tick(now);

            if self.repaint_due(now) {
                screen.draw(&self.state, &self.config)?;
                self.last_repaint = Some(Instant::now());
            }

            let since_repaint = self.last_repaint.map_or(Duration::ZERO, |last| last.elapsed());
            thread::sleep(FRAME_INTERVAL.saturating_sub(since_repaint));
        }
    }
}
