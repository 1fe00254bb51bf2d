use ratatui::prelude::*;

use crate::config::GameConfig;
use crate::game::bricks::FULL_GRID;
use crate::game::{GameState, Phase};

fn separator() -> Span<'static> {
    Span::styled(" │ ", Style::default().fg(Color::DarkGray))
}

/// Score and difficulty line; blank on the splash screen
pub fn stats_line(state: &GameState, config: &GameConfig) -> Line<'static> {
    if state.phase() == Phase::Splash {
        return Line::default();
    }
    Line::from(vec![
        Span::styled(
            format!(" Score: {}", state.score()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        separator(),
        Span::styled(
            format!("Ball speed: {}", config.ball_speed().ceil() as u32),
            Style::default().fg(Color::Cyan),
        ),
        separator(),
        Span::styled(
            format!("Paddle speed: {}", config.paddle_speed().ceil() as u32),
            Style::default().fg(Color::Cyan),
        ),
        separator(),
        Span::styled(
            format!("Paddle length: {}", config.paddle_length() as u32),
            Style::default().fg(Color::Cyan),
        ),
        separator(),
        Span::styled(
            format!("Bricks: {}/{}", state.bricks().remaining(), FULL_GRID),
            Style::default().fg(Color::Green),
        ),
    ])
}

/// Key reminder for the current phase
pub fn help_line(phase: Phase) -> Line<'static> {
    let key = |text: &'static str| {
        Span::styled(text, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    };
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));

    let mut spans = vec![key(" ←→"), label(" Move Paddle")];
    match phase {
        Phase::Splash => spans.extend([separator(), key("SPACE"), label(" Start")]),
        Phase::Playing => spans.extend([separator(), key("P"), label(" Pause")]),
        Phase::Paused => spans.extend([separator(), key("SPACE"), label(" Resume")]),
        Phase::Won | Phase::Lost => spans.extend([separator(), key("SPACE"), label(" Play Again")]),
    }
    spans.extend([separator(), key("Q"), label(" Quit")]);
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Command;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_stats_hidden_on_splash() {
        let state = GameState::new(150.0, 200.0, 80.0);
        assert!(text(&stats_line(&state, &GameConfig::default())).is_empty());
    }

    #[test]
    fn test_stats_show_score_and_settings() {
        let config = GameConfig::default();
        let mut state = GameState::new(config.ball_speed(), config.paddle_speed(), config.paddle_length());
        state.apply(Command::StartOrRestart);
        let line = text(&stats_line(&state, &config));
        assert!(line.contains("Score: 0"));
        assert!(line.contains("Ball speed: 150"));
        assert!(line.contains("Paddle speed: 200"));
        assert!(line.contains("Paddle length: 80"));
        assert!(line.contains("Bricks: 54/54"));
    }

    #[test]
    fn test_help_line_follows_phase() {
        assert!(text(&help_line(Phase::Splash)).contains("Start"));
        assert!(text(&help_line(Phase::Paused)).contains("Resume"));
        assert!(text(&help_line(Phase::Lost)).contains("Play Again"));
    }
}
