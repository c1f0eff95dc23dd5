//! TUI rendering
//!
//! A readout strip on top, the keypad below it, and a one-line help
//! footer. The layout is also exposed through [`keypad_area`] so the
//! event loop can hit-test mouse clicks against the rendered keypad.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

const HELP_LINE: &str = " 0-9 . + - * / =  Enter =  Esc/c AC  q quit ";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUi::new(app), area);
}

/// Returns the rectangle the keypad is rendered into for a frame area
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    layout(area)[1]
}

fn layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Readout
            Constraint::Length(12), // Keypad
            Constraint::Min(1),     // Help footer
        ])
        .split(area)
        .to_vec()
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUi<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the readout strip
    fn render_readout(&self, area: Rect, buf: &mut Buffer) {
        let text = self.app.display();
        let paragraph = Paragraph::new(Span::styled(
            text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Display ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        paragraph.render(area, buf);
    }

    /// Renders the help footer
    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let help = Paragraph::new(Span::styled(
            HELP_LINE,
            Style::default().fg(Color::DarkGray),
        ));
        help.render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = layout(area);
        self.render_readout(chunks[0], buf);
        KeypadWidget::new(self.app.keypad()).render(chunks[1], buf);
        self.render_help(chunks[2], buf);
    }
}
