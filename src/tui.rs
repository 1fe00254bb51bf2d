use std::io::{self, Stdout};

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use log::{info, warn};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::Screen;
use crate::config::GameConfig;
use crate::game::GameState;
use crate::ui;

pub const WINDOW_TITLE: &str = "BREAKOUT!";

/// The terminal, held in raw mode on the alternate screen for as long as
/// this value lives.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    keyboard_enhanced: bool,
}

impl Tui {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                return Err(err);
            }
        };

        // Drop restores the terminal from here on
        let mut tui = Self {
            terminal,
            keyboard_enhanced: false,
        };
        execute!(tui.terminal.backend_mut(), EnterAlternateScreen, SetTitle(WINDOW_TITLE))?;
        tui.terminal.hide_cursor()?;

        if supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                tui.terminal.backend_mut(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            tui.keyboard_enhanced = true;
            info!("terminal reports key releases");
        } else {
            warn!("terminal cannot report key releases, paddle stops on auto-repeat gaps");
        }

        tui.terminal.clear()?;
        Ok(tui)
    }

    pub fn reports_key_release(&self) -> bool {
        self.keyboard_enhanced
    }
}

impl Screen for Tui {
    fn draw(&mut self, state: &GameState, config: &GameConfig) -> io::Result<()> {
        self.terminal.draw(|frame| ui::render(frame, state, config))?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            let _ = execute!(self.terminal.backend_mut(), PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
