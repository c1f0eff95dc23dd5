//! Core calculator module - the state machine behind the keypad
//!
//! Pure logic, no I/O: the presentation layer feeds key presses in
//! through [`Engine::press`] (or captions through [`Engine::tap`]) and
//! reads the readout back through [`Engine::display`].

mod engine;
mod key;

pub use engine::{Engine, PendingOp};
pub use key::Key;
