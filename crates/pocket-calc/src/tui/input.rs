//! Keyboard input handling
//!
//! Maps crossterm key events onto the keypad vocabulary. Every event
//! becomes exactly one [`KeyAction`]; anything outside the vocabulary
//! is [`KeyAction::None`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Key;

/// Actions that keyboard input can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a calculator key
    Press(Key),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    ///
    /// Digits, `.`, the operator characters (`*`/`x` and `/` included),
    /// `%` and `=` press the matching keypad key; Enter presses "=";
    /// Esc and `c` press "AC"; `q` and Ctrl+C quit.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => Key::from_char(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(Key::Equals),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Delete => KeyAction::Press(Key::Clear),
            _ => KeyAction::None,
        }
    }
}
