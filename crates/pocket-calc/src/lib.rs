//! Pocket Calc - a four-function keypad calculator
//!
//! The crate is split the way the calculator itself is: a pure
//! [`core::Engine`] state machine that owns the input buffer, the
//! accumulator and the pending operator, and an optional terminal
//! front end (feature `tui`, on by default) that does nothing but
//! translate taps into presses and repaint the readout.
//!
//! The engine is deliberately faithful to pocket-calculator behavior:
//! sequential (left-to-right) evaluation, a ten-character input cap,
//! silent rejection of invalid presses, and untrapped IEEE-754
//! division by zero.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut engine = Engine::new();
//! for label in ["7", "+", "3", "="] {
//!     engine.tap(label);
//! }
//! assert_eq!(engine.display(), "10");
//!
//! engine.tap("AC");
//! assert_eq!(engine.display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{Engine, Key, PendingOp};
    pub use crate::driver::{CalculatorDriver, EngineDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, InputHandler, KeyAction, Keypad};
}
