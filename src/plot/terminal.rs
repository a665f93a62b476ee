//! Interactive chart display.

use super::chart::ChartData;
use super::error::{PlotError, PlotResult};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, IsTerminal};
use tracing::debug;

/// Show `data` in the terminal's alternate screen until the user closes it.
///
/// Closes on `q`, `Esc`, `Enter` or `Ctrl+C`.
///
/// # Errors
///
/// Returns [`PlotError::NoTerminal`] when stdout is not a terminal,
/// [`PlotError::NothingToPlot`] when no series has points, and
/// [`PlotError::Io`] on terminal failures.
pub fn show(data: &ChartData) -> PlotResult<()> {
    check_drawable(data, io::stdout().is_terminal())?;

    let _screen = ScreenGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    run(&mut terminal, data)
}

fn check_drawable(data: &ChartData, is_terminal: bool) -> PlotResult<()> {
    if data.is_empty() {
        return Err(PlotError::NothingToPlot);
    }
    if !is_terminal {
        return Err(PlotError::NoTerminal);
    }
    Ok(())
}

/// Raw mode and the alternate screen, restored on drop.
struct ScreenGuard;

impl ScreenGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        // Every step runs even if an earlier one fails.
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}

fn run<B: Backend>(terminal: &mut Terminal<B>, data: &ChartData) -> PlotResult<()> {
    debug!(series = data.series().len(), "Showing chart");
    loop {
        terminal.draw(|frame| frame.render_widget(data.chart(), frame.area()))?;

        if let Event::Key(key) = event::read()? {
            if closes(key) {
                return Ok(());
            }
        }
    }
}

fn closes(key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
