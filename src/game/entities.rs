use glam::Vec2;

use super::geometry::{reflect, Aabb};

pub const BALL_DIAMETER: f32 = 25.0;
pub const BALL_RADIUS: f32 = BALL_DIAMETER / 2.0;
const INITIAL_BALL_POS: Vec2 = Vec2::new(50.0, 50.0);

pub const PADDLE_HEIGHT: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    speed: f32,
}

impl Ball {
    /// Ball at its launch point heading down and to the right at `speed` per axis
    pub fn new(speed: f32) -> Self {
        Self {
            pos: INITIAL_BALL_POS,
            vel: Vec2::splat(speed),
            speed,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.speed);
    }

    pub fn step(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Side walls flip vx, the ceiling flips vy. Each only fires while the
    /// ball is still heading into it, so a ball that is already leaving
    /// is never pulled back.
    pub fn bounce_walls(&mut self, width: f32) {
        let Vec2 { x, y } = self.pos;
        if (x + BALL_RADIUS >= width && self.vel.x > 0.0) || (x - BALL_RADIUS <= 0.0 && self.vel.x < 0.0) {
            self.vel.x = reflect(self.vel.x);
        }
        if y - BALL_RADIUS <= 0.0 && self.vel.y < 0.0 {
            self.vel.y = reflect(self.vel.y);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub length: f32,
    pub speed: f32,
    pub moving_left: bool,
    pub moving_right: bool,
    field_width: f32,
}

impl Paddle {
    /// Paddle centred horizontally, `y` fixed for its lifetime
    pub fn new(length: f32, speed: f32, y: f32, field_width: f32) -> Self {
        Self {
            x: field_width / 2.0 - length / 2.0,
            y,
            length,
            speed,
            moving_left: false,
            moving_right: false,
            field_width,
        }
    }

    /// Recentre; held movement keys stay held
    pub fn reset(&mut self) {
        self.x = self.field_width / 2.0 - self.length / 2.0;
    }

    pub fn step(&mut self, dt: f32) {
        let mut x = self.x;
        if self.moving_left {
            x -= self.speed * dt;
        }
        if self.moving_right {
            x += self.speed * dt;
        }
        self.x = x.clamp(0.0, (self.field_width - self.length).max(0.0));
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_origin_size(self.x, self.y, self.length, PADDLE_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WIDTH: f32 = 1300.0;

    #[test]
    fn test_ball_step_integrates_velocity() {
        let mut ball = Ball::new(150.0);
        ball.step(0.5);
        assert_eq!(ball.pos, Vec2::new(125.0, 125.0));
    }

    #[test]
    fn test_ball_bounces_off_right_wall_only_when_heading_out() {
        let mut ball = Ball::new(100.0);
        ball.pos = Vec2::new(WIDTH - 5.0, 400.0);
        ball.bounce_walls(WIDTH);
        assert_eq!(ball.vel.x, -100.0);

        // Already heading back in: no second flip
        ball.bounce_walls(WIDTH);
        assert_eq!(ball.vel.x, -100.0);
    }

    #[test]
    fn test_ball_bounces_off_left_wall() {
        let mut ball = Ball::new(100.0);
        ball.vel.x = -100.0;
        ball.pos = Vec2::new(10.0, 400.0);
        ball.bounce_walls(WIDTH);
        assert_eq!(ball.vel.x, 100.0);
    }

    #[test]
    fn test_ceiling_ignores_ball_moving_down() {
        let mut ball = Ball::new(100.0);
        ball.pos = Vec2::new(400.0, 5.0);
        ball.bounce_walls(WIDTH);
        assert_eq!(ball.vel.y, 100.0);

        ball.vel.y = -100.0;
        ball.bounce_walls(WIDTH);
        assert_eq!(ball.vel.y, 100.0);
    }

    #[test]
    fn test_ball_reset_restores_launch_state() {
        let mut ball = Ball::new(75.0);
        ball.pos = Vec2::new(600.0, 900.0);
        ball.vel = Vec2::new(-75.0, 75.0);
        ball.reset();
        assert_eq!(ball.pos, INITIAL_BALL_POS);
        assert_eq!(ball.vel, Vec2::splat(75.0));
    }

    #[test]
    fn test_paddle_starts_centred() {
        let paddle = Paddle::new(80.0, 200.0, 700.0, WIDTH);
        assert_eq!(paddle.x, 610.0);
        assert_eq!(paddle.rect().max, Vec2::new(690.0, 720.0));
    }

    #[test]
    fn test_paddle_stops_at_left_edge() {
        let mut paddle = Paddle::new(80.0, 200.0, 700.0, WIDTH);
        paddle.moving_left = true;
        paddle.step(10.0);
        assert_eq!(paddle.x, 0.0);
    }

    #[test]
    fn test_paddle_opposing_flags_cancel() {
        let mut paddle = Paddle::new(80.0, 200.0, 700.0, WIDTH);
        paddle.moving_left = true;
        paddle.moving_right = true;
        paddle.step(0.25);
        assert_eq!(paddle.x, 610.0);
    }

    proptest! {
        #[test]
        fn paddle_stays_on_screen(
            start in 0.0f32..1220.0,
            dt in 0.0f32..2.0,
            left in any::<bool>(),
            right in any::<bool>(),
        ) {
            let mut paddle = Paddle::new(80.0, 250.0, 700.0, WIDTH);
            paddle.x = start;
            paddle.moving_left = left;
            paddle.moving_right = right;
            paddle.step(dt);
            prop_assert!(paddle.x >= 0.0);
            prop_assert!(paddle.x + paddle.length <= WIDTH);
        }

        #[test]
        fn wall_bounce_keeps_speed(
            x in -20.0f32..1320.0,
            y in -20.0f32..820.0,
            vx in prop::sample::select(vec![-150.0f32, 150.0]),
            vy in prop::sample::select(vec![-150.0f32, 150.0]),
        ) {
            let mut ball = Ball::new(150.0);
            ball.pos = Vec2::new(x, y);
            ball.vel = Vec2::new(vx, vy);
            ball.bounce_walls(WIDTH);
            prop_assert_eq!(ball.vel.x.abs(), 150.0);
            prop_assert_eq!(ball.vel.y.abs(), 150.0);
        }
    }
}
