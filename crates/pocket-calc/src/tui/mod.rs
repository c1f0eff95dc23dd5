//! Terminal front end for the calculator
//!
//! A thin presentation layer: it converts key events and mouse clicks
//! into engine presses and redraws the readout after every one.

mod app;
mod input;
mod keypad;
mod runner;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use runner::{run, TuiError};
pub use ui::{keypad_area, render, CalculatorUi};
