pub mod field;
pub mod hud;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::config::GameConfig;
use crate::game::{GameState, Phase};
use crate::tui::WINDOW_TITLE;

pub fn render(frame: &mut Frame, state: &GameState, config: &GameConfig) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(220, 80, 80)))
        .title(format!(" {WINDOW_TITLE} "))
        .title_style(Style::default().fg(Color::Rgb(255, 100, 100)).add_modifier(Modifier::BOLD));

    let area = frame.area();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Field
            Constraint::Length(1), // Stats
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let field = field::render_field(state, chunks[0].width as usize, chunks[0].height as usize);
    frame.render_widget(Paragraph::new(field), chunks[0]);
    frame.render_widget(Paragraph::new(hud::stats_line(state, config)), chunks[1]);
    frame.render_widget(Paragraph::new(hud::help_line(state.phase())), chunks[2]);

    if let Some(lines) = overlay_text(state.phase()) {
        render_overlay(frame, chunks[0], lines);
    }
}

const SPLASH_TEXT: &[&str] = &[
    "Breakout!",
    "",
    "Press left and right arrow keys to move the paddle.",
    "Press p to pause, q to quit, and spacebar to start.",
];
const WON_TEXT: &[&str] = &["Congratulations! Game complete.", "Press spacebar to play again."];
const LOST_TEXT: &[&str] = &["Game Over! You lose.", "Press spacebar to play again."];
const PAUSED_TEXT: &[&str] = &["Game paused. Press spacebar to continue."];

/// Centred message for every phase except active play
pub fn overlay_text(phase: Phase) -> Option<&'static [&'static str]> {
    match phase {
        Phase::Splash => Some(SPLASH_TEXT),
        Phase::Won => Some(WON_TEXT),
        Phase::Lost => Some(LOST_TEXT),
        Phase::Paused => Some(PAUSED_TEXT),
        Phase::Playing => None,
    }
}

fn render_overlay(frame: &mut Frame, area: Rect, lines: &[&str]) {
    let text_w = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0) as u16;
    let overlay_w = (text_w + 6).min(area.width);
    let overlay_h = (lines.len() as u16 + 4).min(area.height);
    let x = area.x + area.width.saturating_sub(overlay_w) / 2;
    let y = area.y + area.height.saturating_sub(overlay_h) / 2;
    let overlay_area = Rect::new(x, y, overlay_w, overlay_h);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(255, 220, 80)))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let mut text = vec![Line::from("")];
    for (i, line) in lines.iter().enumerate() {
        let style = if i == 0 {
            Style::default().fg(Color::Rgb(255, 255, 255)).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Rgb(180, 180, 200))
        };
        text.push(Line::from(Span::styled(*line, style)));
    }

    let p = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    frame.render_widget(p, inner);
}
