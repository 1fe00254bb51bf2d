use log::debug;

use super::bricks::BrickGrid;
use super::entities::{Ball, Paddle, BALL_RADIUS};
use super::geometry::{circle_rect_overlap, horizontal_approach, reflect, vertical_approach};
use super::{Command, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Points for each qualifying paddle contact
pub const PADDLE_BOUNCE_POINTS: u32 = 20;
pub const PADDLE_Y: f32 = SCREEN_HEIGHT - 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Splash,
    Playing,
    Paused,
    Won,
    Lost,
}

pub struct GameState {
    phase: Phase,
    score: u32,
    bricks: BrickGrid,
    ball: Ball,
    paddle: Paddle,
}

impl GameState {
    /// Speeds are in world units per second, `paddle_length` in world units.
    pub fn new(ball_speed: f32, paddle_speed: f32, paddle_length: f32) -> Self {
        Self {
            phase: Phase::Splash,
            score: 0,
            bricks: BrickGrid::new(),
            ball: Ball::new(ball_speed),
            paddle: Paddle::new(paddle_length, paddle_speed, PADDLE_Y, SCREEN_WIDTH),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn bricks(&self) -> &BrickGrid {
        &self.bricks
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!("phase {:?} -> {:?} (score {})", self.phase, phase, self.score);
            self.phase = phase;
        }
    }

    /// Apply one player command. `Quit` belongs to the frame driver and is
    /// ignored here.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeftStart => self.paddle.moving_left = true,
            Command::MoveLeftStop => self.paddle.moving_left = false,
            Command::MoveRightStart => self.paddle.moving_right = true,
            Command::MoveRightStop => self.paddle.moving_right = false,
            Command::TogglePause => {
                if self.phase == Phase::Playing {
                    self.set_phase(Phase::Paused);
                }
            }
            Command::StartOrRestart => match self.phase {
                Phase::Splash | Phase::Paused => self.set_phase(Phase::Playing),
                Phase::Won | Phase::Lost => {
                    self.restart();
                    self.set_phase(Phase::Playing);
                }
                Phase::Playing => {}
            },
            Command::Quit => {}
        }
    }

    /// Score, bricks, ball and paddle back to their starting values. The
    /// phase is left to the caller.
    pub fn restart(&mut self) {
        self.score = 0;
        self.bricks.reset();
        self.ball.reset();
        self.paddle.reset();
    }

    /// Advance the simulation by `dt` seconds. Does nothing unless playing.
    pub fn update(&mut self, dt: f32) {
        if self.phase != Phase::Playing {
            return;
        }

        self.ball.bounce_walls(SCREEN_WIDTH);
        self.bounce_paddle();
        self.collide_bricks();

        self.paddle.step(dt);
        self.ball.step(dt);

        // A win takes precedence over a ball that left the field the same tick
        if self.bricks.remaining() == 0 {
            self.set_phase(Phase::Won);
        } else if self.ball.pos.y >= SCREEN_HEIGHT {
            self.set_phase(Phase::Lost);
        }
    }

    /// Points are awarded for every frame the downward-moving ball overlaps
    /// the paddle.
    fn bounce_paddle(&mut self) {
        if self.ball.vel.y > 0.0
            && circle_rect_overlap(self.ball.pos, BALL_RADIUS, &self.paddle.rect())
        {
            self.ball.vel.y = reflect(self.ball.vel.y);
            self.score += PADDLE_BOUNCE_POINTS;
        }
    }

    /// Vertical pass over the whole grid, then horizontal pass. Each brick
    /// destroyed flips its pass's axis once, so two bricks hit in the same
    /// pass cancel out. A brick killed in the vertical pass is dead by the
    /// time the horizontal pass reaches it.
    fn collide_bricks(&mut self) {
        let center = self.ball.pos;

        for (row, col) in BrickGrid::positions() {
            if self.bricks.is_live(row, col)
                && vertical_approach(center, BALL_RADIUS, &BrickGrid::cell_rect(row, col))
            {
                self.score += self.bricks.destroy(row, col);
                self.ball.vel.y = reflect(self.ball.vel.y);
            }
        }

        for (row, col) in BrickGrid::positions() {
            if self.bricks.is_live(row, col)
                && horizontal_approach(center, BALL_RADIUS, &BrickGrid::cell_rect(row, col))
            {
                self.score += self.bricks.destroy(row, col);
                self.ball.vel.x = reflect(self.ball.vel.x);
            }
        }
    }
}
