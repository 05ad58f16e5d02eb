use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Holds the terminal in raw/alternate-screen mode.
///
/// The screen is restored exactly once: on drop, or from the panic hook if
/// the UI thread panics first.
pub struct TerminalGuard {
    restored: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn install_panic_hook(&self) {
        let restored = Arc::clone(&self.restored);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_once(&restored);
            previous(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_once(&self.restored);
    }
}

fn restore_once(restored: &AtomicBool) {
    if restored.swap(true, Ordering::SeqCst) {
        return;
    }
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

pub fn setup_terminal() -> io::Result<(DashboardTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard {
        restored: Arc::new(AtomicBool::new(false)),
    };
    guard.install_panic_hook();

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Clear(ClearType::All), Hide)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    Ok((terminal, guard))
}
