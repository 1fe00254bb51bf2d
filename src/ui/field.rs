use ratatui::prelude::*;

use crate::game::bricks::{BrickColor, BRICK_HEIGHT, BRICK_WIDTH};
use crate::game::entities::PADDLE_HEIGHT;
use crate::game::{GameState, Phase, SCREEN_HEIGHT, SCREEN_WIDTH};

const BACKGROUND: Color = Color::Rgb(10, 10, 20);
/// Horizontal gap left between neighbouring bricks, in world units
const BRICK_GAP: f32 = 5.0;
/// How far behind the ball the trail dot sits, in seconds of travel
const TRAIL_SECONDS: f32 = 0.05;

pub fn brick_color(color: BrickColor) -> Color {
    match color {
        BrickColor::Dead => BACKGROUND,
        BrickColor::Red => Color::Rgb(220, 50, 50),
        BrickColor::Green => Color::Rgb(50, 200, 50),
        BrickColor::Blue => Color::Rgb(50, 130, 220),
        BrickColor::Yellow => Color::Rgb(220, 200, 30),
        BrickColor::Purple => Color::Rgb(150, 50, 220),
        BrickColor::Orange => Color::Rgb(220, 130, 30),
    }
}

/// Rasterise the playfield into `width` x `height` terminal cells. The splash
/// screen shows an empty field.
pub fn render_field(state: &GameState, width: usize, height: usize) -> Vec<Line<'static>> {
    let (w, h) = (width, height);
    let background = Style::default().bg(BACKGROUND);
    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', background); w]; h];

    if state.phase() != Phase::Splash && w > 0 && h > 0 {
        let sx = w as f32 / SCREEN_WIDTH;
        let sy = h as f32 / SCREEN_HEIGHT;
        draw_bricks(&mut grid, state, sx, sy);
        draw_paddle(&mut grid, state, sx, sy);
        draw_ball(&mut grid, state, sx, sy);
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn draw_bricks(grid: &mut [Vec<(char, Style)>], state: &GameState, sx: f32, sy: f32) {
    let h = grid.len();
    let w = grid[0].len();
    for (row, col, color) in state.bricks().live_bricks() {
        let bx_start = (col as f32 * BRICK_WIDTH * sx) as usize;
        let bx_end = (((col + 1) as f32 * BRICK_WIDTH - BRICK_GAP) * sx) as usize;
        // Sample the middle of the brick so rows stay apart on short terminals
        let by = ((row as f32 + 0.5) * BRICK_HEIGHT * sy) as usize;
        if by >= h {
            continue;
        }
        let style = Style::default().fg(brick_color(color)).bg(BACKGROUND);
        let end = bx_end.min(w);
        for bx in bx_start..end {
            let ch = if bx == bx_start {
                '▐'
            } else if bx + 1 >= end {
                '▌'
            } else {
                '█'
            };
            grid[by][bx] = (ch, style);
        }
    }
}

fn draw_paddle(grid: &mut [Vec<(char, Style)>], state: &GameState, sx: f32, sy: f32) {
    let h = grid.len();
    let w = grid[0].len();
    let paddle = state.paddle();
    let px_start = (paddle.x * sx) as usize;
    let px_end = (((paddle.x + paddle.length) * sx) as usize).max(px_start + 1);
    let py = ((paddle.y + PADDLE_HEIGHT / 2.0) * sy) as usize;
    if py >= h {
        return;
    }
    let style = Style::default()
        .fg(Color::Rgb(180, 200, 255))
        .bg(Color::Rgb(30, 50, 120))
        .add_modifier(Modifier::BOLD);
    let end = px_end.min(w);
    for px in px_start..end {
        let ch = if px == px_start {
            '╣'
        } else if px + 1 >= end {
            '╠'
        } else {
            '═'
        };
        grid[py][px] = (ch, style);
    }
}

fn draw_ball(grid: &mut [Vec<(char, Style)>], state: &GameState, sx: f32, sy: f32) {
    let h = grid.len();
    let w = grid[0].len();
    let ball = state.ball();
    if ball.pos.x < 0.0 || ball.pos.y < 0.0 {
        return;
    }
    let bx = (ball.pos.x * sx) as usize;
    let by = (ball.pos.y * sy) as usize;
    if bx >= w || by >= h {
        return;
    }

    let trail = ball.pos - ball.vel * TRAIL_SECONDS;
    if trail.x >= 0.0 && trail.y >= 0.0 {
        let tx = (trail.x * sx) as usize;
        let ty = (trail.y * sy) as usize;
        if tx < w && ty < h && (tx != bx || ty != by) && grid[ty][tx].0 == ' ' {
            grid[ty][tx] = ('·', Style::default().fg(Color::Rgb(100, 100, 120)).bg(BACKGROUND));
        }
    }

    grid[by][bx] = (
        '●',
        Style::default()
            .fg(Color::Rgb(255, 255, 255))
            .bg(BACKGROUND)
            .add_modifier(Modifier::BOLD),
    );
}
