//! Terminal lifecycle and the synchronous event loop
//!
//! One event is read and fully processed per iteration; every button
//! press is atomic from the engine's point of view, so no locking is
//! needed anywhere.

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use thiserror::Error;

use super::app::CalculatorApp;
use super::input::InputHandler;
use super::ui::{keypad_area, render};

/// Errors raised by the terminal front end
///
/// The engine itself cannot fail; everything here is terminal I/O.
#[derive(Debug, Error)]
pub enum TuiError {
    /// The underlying terminal operation failed
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Runs the calculator TUI until the user quits
pub fn run() -> Result<(), TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> Result<(), TuiError> {
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| render(&app, f))?;

        match event::read()? {
            Event::Key(key) => app.apply(input_handler.handle_key(key)),
            Event::Mouse(mouse) => {
                if matches!(mouse.kind, MouseEventKind::Down(_)) {
                    let size = terminal.size()?;
                    let frame = Rect::new(0, 0, size.width, size.height);
                    app.click(keypad_area(frame), mouse.column, mouse.row);
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
