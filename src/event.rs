use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::CommandSource;
use crate::game::Command;

/// Without release events a held arrow is only visible through auto-repeat.
/// The first repeat arrives after the keyboard's initial delay, later ones
/// much faster, so the hold window shrinks once repeats start.
const FIRST_PRESS_HOLD: Duration = Duration::from_millis(550);
const REPEAT_HOLD: Duration = Duration::from_millis(120);

/// Map one key event to a command. Arrow keys produce start/stop pairs from
/// press and release; everything else reacts to the initial press only.
pub fn translate(key: KeyEvent) -> Option<Command> {
    let down = matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat);
    match key.code {
        KeyCode::Left if down => Some(Command::MoveLeftStart),
        KeyCode::Left => Some(Command::MoveLeftStop),
        KeyCode::Right if down => Some(Command::MoveRightStart),
        KeyCode::Right => Some(Command::MoveRightStop),
        _ if key.kind != KeyEventKind::Press => None,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char(' ') => Some(Command::StartOrRestart),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

#[derive(Default)]
struct HeldKey {
    last_seen: Option<Instant>,
    repeating: bool,
}

impl HeldKey {
    fn press(&mut self, now: Instant) {
        self.repeating = self.last_seen.is_some();
        self.last_seen = Some(now);
    }

    fn release(&mut self) {
        *self = Self::default();
    }

    /// True once, when the key has gone quiet for longer than its window
    fn expire(&mut self, now: Instant) -> bool {
        let Some(last) = self.last_seen else { return false };
        let window = if self.repeating { REPEAT_HOLD } else { FIRST_PRESS_HOLD };
        if now.saturating_duration_since(last) > window {
            self.release();
            true
        } else {
            false
        }
    }
}

/// Drains crossterm's queue without blocking and turns key events into
/// commands. When the terminal cannot report key releases, movement stops
/// are synthesized from auto-repeat gaps.
pub struct EventHandler {
    reports_release: bool,
    left: HeldKey,
    right: HeldKey,
}

impl EventHandler {
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            left: HeldKey::default(),
            right: HeldKey::default(),
        }
    }

    fn on_key(&mut self, key: KeyEvent, now: Instant, out: &mut Vec<Command>) {
        let Some(command) = translate(key) else { return };
        if !self.reports_release {
            match command {
                Command::MoveLeftStart => self.left.press(now),
                Command::MoveRightStart => self.right.press(now),
                _ => {}
            }
        }
        out.push(command);
    }

    fn expire_held(&mut self, now: Instant, out: &mut Vec<Command>) {
        if self.reports_release {
            return;
        }
        if self.left.expire(now) {
            out.push(Command::MoveLeftStop);
        }
        if self.right.expire(now) {
            out.push(Command::MoveRightStop);
        }
    }
}

impl CommandSource for EventHandler {
    fn poll_commands(&mut self, out: &mut Vec<Command>) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.on_key(key, Instant::now(), out);
            }
        }
        self.expire_held(Instant::now(), out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
    }

    #[test]
    fn test_translate_game_keys() {
        assert_eq!(translate(press(KeyCode::Char(' '))), Some(Command::StartOrRestart));
        assert_eq!(translate(press(KeyCode::Char('p'))), Some(Command::TogglePause));
        assert_eq!(translate(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(
            translate(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(translate(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_translate_arrows_press_and_release() {
        assert_eq!(translate(press(KeyCode::Left)), Some(Command::MoveLeftStart));
        assert_eq!(translate(release(KeyCode::Left)), Some(Command::MoveLeftStop));
        assert_eq!(translate(press(KeyCode::Right)), Some(Command::MoveRightStart));
        assert_eq!(translate(release(KeyCode::Right)), Some(Command::MoveRightStop));
        assert_eq!(
            translate(KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Repeat)),
            Some(Command::MoveLeftStart)
        );
    }

    #[test]
    fn test_release_of_other_keys_is_ignored() {
        assert_eq!(translate(release(KeyCode::Char(' '))), None);
        assert_eq!(translate(release(KeyCode::Char('q'))), None);
    }

    #[test]
    fn test_native_release_never_synthesizes_stop() {
        let mut handler = EventHandler::new(true);
        let mut out = Vec::new();
        let t0 = Instant::now();
        handler.on_key(press(KeyCode::Left), t0, &mut out);
        handler.expire_held(t0 + Duration::from_secs(5), &mut out);
        assert_eq!(out, vec![Command::MoveLeftStart]);
    }

    #[test]
    fn test_fallback_stops_after_first_press_window() {
        let mut handler = EventHandler::new(false);
        let mut out = Vec::new();
        let t0 = Instant::now();
        handler.on_key(press(KeyCode::Right), t0, &mut out);

        handler.expire_held(t0 + Duration::from_millis(300), &mut out);
        assert_eq!(out, vec![Command::MoveRightStart]);

        handler.expire_held(t0 + Duration::from_millis(600), &mut out);
        assert_eq!(out, vec![Command::MoveRightStart, Command::MoveRightStop]);

        // Only once
        handler.expire_held(t0 + Duration::from_millis(900), &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_fallback_uses_short_window_while_repeating() {
        let mut handler = EventHandler::new(false);
        let mut out = Vec::new();
        let t0 = Instant::now();
        handler.on_key(press(KeyCode::Left), t0, &mut out);
        handler.on_key(press(KeyCode::Left), t0 + Duration::from_millis(500), &mut out);

        handler.expire_held(t0 + Duration::from_millis(580), &mut out);
        assert!(!out.contains(&Command::MoveLeftStop));

        handler.expire_held(t0 + Duration::from_millis(700), &mut out);
        assert_eq!(out.last(), Some(&Command::MoveLeftStop));
    }
}
