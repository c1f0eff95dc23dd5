//! The on-screen keypad
//!
//! The grid reproduces the classic pocket-calculator face:
//!
//! ```text
//! [AC] [+/-] [%] [÷]
//! [7]  [8]   [9] [×]
//! [4]  [5]   [6] [-]
//! [1]  [2]   [3] [+]
//! [0]  [.]   [=]
//! ```
//!
//! Buttons can be highlighted when the matching key is pressed and
//! located from a mouse click through [`Keypad::hit_test`]. Colors and
//! geometry are presentation detail; only grid content and hit-testing
//! carry behavior.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::Key;

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The key this button sends
    pub key: Key,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates an unpressed button for a key
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            pressed: false,
        }
    }

    /// Returns the button caption
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.key.label()
    }

    /// Sets the highlight state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad - rows of buttons in the classic layout
#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard four-function keypad
    #[must_use]
    pub fn new() -> Self {
        let layout: [&[Key]; 5] = [
            &[Key::Clear, Key::Negate, Key::Percent, Key::Divide],
            &[Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::Multiply],
            &[Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::Subtract],
            &[Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Add],
            &[Key::Digit(0), Key::Decimal, Key::Equals],
        ];
        let rows = layout
            .iter()
            .map(|row| row.iter().copied().map(KeypadButton::new).collect())
            .collect();
        Self { rows }
    }

    /// Returns the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the total number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Gets a button by grid position
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Finds the grid position of a key
    #[must_use]
    pub fn position_of(&self, key: Key) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|btn| btn.key == key)
                .map(|c| (r, c))
        })
    }

    /// Finds the grid position of a button by its caption
    #[must_use]
    pub fn position_of_label(&self, label: &str) -> Option<(usize, usize)> {
        Key::from_label(label).and_then(|key| self.position_of(key))
    }

    /// Highlights the button for a key, releasing every other button
    pub fn highlight(&mut self, key: Key) {
        self.release_all();
        for row in &mut self.rows {
            for btn in row {
                if btn.key == key {
                    btn.set_pressed(true);
                }
            }
        }
    }

    /// Releases every button
    pub fn release_all(&mut self) {
        for row in &mut self.rows {
            for btn in row {
                btn.set_pressed(false);
            }
        }
    }

    /// Iterates over the rows of buttons
    pub fn rows(&self) -> impl Iterator<Item = &[KeypadButton]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Maps a click position inside a rendered keypad to the key hit
    ///
    /// `area` is the rectangle the keypad was rendered into, border
    /// included. Clicks on the border or outside the grid return `None`.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Key> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border occupies one cell on every side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let row_height = (area.height - 2) / self.rows.len() as u16;
        if row_height == 0 {
            return None;
        }
        let row_idx = ((rel_y - 1) / row_height) as usize;
        let row = self.rows.get(row_idx)?;

        let btn_width = (area.width - 2) / row.len() as u16;
        if btn_width == 0 {
            return None;
        }
        let col_idx = ((rel_x - 1) / btn_width) as usize;

        row.get(col_idx).map(|btn| btn.key)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn button_style(btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match btn.key {
            Key::Digit(_) | Key::Decimal => Style::default().fg(Color::White),
            Key::Add | Key::Subtract | Key::Multiply | Key::Divide => {
                Style::default().fg(Color::Yellow)
            }
            Key::Equals => Style::default().fg(Color::Green),
            Key::Clear => Style::default().fg(Color::Red),
            Key::Negate | Key::Percent => Style::default().fg(Color::DarkGray),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let row_count = self.keypad.row_count() as u16;
        if inner.width < 8 || inner.height < row_count {
            return; // Too small to render the grid
        }

        let row_height = inner.height / row_count;

        for (r, row) in self.keypad.rows().enumerate() {
            let btn_width = inner.width / row.len() as u16;
            if btn_width < 4 {
                continue;
            }
            let y = inner.y + (r as u16 * row_height) + row_height / 2;
            for (c, btn) in row.iter().enumerate() {
                let x = inner.x + (c as u16 * btn_width);
                let caption = format!("[{}]", btn.label());
                let caption_width = caption.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(caption_width) / 2;
                if y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(
                        label_x,
                        y,
                        &Span::styled(caption, Self::button_style(btn)),
                        btn_width,
                    );
                }
            }
        }
    }
}
