//! TUI application state
//!
//! The app owns one [`Engine`] and mutates it only through key presses;
//! the readout is a pure read. View-only concerns (keypad highlight,
//! quit flag) live here, outside the engine.

use ratatui::layout::Rect;

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::core::{Engine, Key};

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// The calculator engine
    engine: Engine,
    /// Keypad highlight state
    keypad: Keypad,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a fresh app
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the readout text
    #[must_use]
    pub fn display(&self) -> String {
        self.engine.display()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a calculator key, highlighting the matching button
    pub fn press(&mut self, key: Key) {
        self.keypad.highlight(key);
        self.engine.press(key);
    }

    /// Applies a mapped input action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(key) => self.press(key),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Routes a mouse click inside the rendered keypad area
    ///
    /// Clicks that hit no button are ignored.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) {
        if let Some(key) = self.keypad.hit_test(keypad_area, x, y) {
            self.press(key);
        }
    }
}
