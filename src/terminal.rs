use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use crate::error::GameError;
use crate::game::GameState;
use crate::input::{InputFrame, InputHandler};
use crate::presenter::{Ack, Presenter};
use crate::renderer;
use crate::ui::menu::{render_game_over_menu, render_welcome_menu};

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode, alternate screen, key release
/// reporting) for one session.
///
/// On drop, this type restores terminal state best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
    reports_release: bool,
}

impl TerminalSession {
    /// Enters raw mode, switches to alternate screen, and creates a ratatui terminal.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        let reports_release = supports_keyboard_enhancement().unwrap_or(false)
            && execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .is_ok();
        debug!(reports_release, "terminal session entered");

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self {
                terminal,
                reports_release,
            }),
            Err(error) => {
                let _ = cleanup_terminal_best_effort(reports_release);
                Err(error)
            }
        }
    }

    /// Returns true when the terminal reports key releases.
    #[must_use]
    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = cleanup_terminal_best_effort(self.reports_release);
    }
}

/// Restores the terminal; also used by the panic hook.
pub fn cleanup_terminal_best_effort(pop_enhancement: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    if pop_enhancement {
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    let _ = disable_raw_mode();
    execute!(stdout, Show, LeaveAlternateScreen)
}

/// Presenter drawing with ratatui and reading keys through crossterm.
pub struct TerminalPresenter {
    session: TerminalSession,
    input: InputHandler,
}

impl TerminalPresenter {
    pub fn new() -> Result<Self, GameError> {
        let session = TerminalSession::enter()?;
        let input = InputHandler::new(session.reports_release());

        Ok(Self { session, input })
    }
}

impl Presenter for TerminalPresenter {
    fn poll_input(&mut self) -> Result<InputFrame, GameError> {
        Ok(self.input.poll_frame()?)
    }

    fn render(&mut self, state: &GameState) -> Result<(), GameError> {
        self.session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, state))?;
        Ok(())
    }

    fn render_game_over(&mut self, score: u32) -> Result<Ack, GameError> {
        self.session.terminal_mut().draw(|frame| {
            let area = frame.area();
            render_game_over_menu(frame, area, score);
        })?;
        Ok(self.input.wait_for_key()?)
    }

    fn render_welcome(&mut self) -> Result<Ack, GameError> {
        self.session.terminal_mut().draw(|frame| {
            let area = frame.area();
            render_welcome_menu(frame, area);
        })?;
        Ok(self.input.wait_for_key()?)
    }
}
