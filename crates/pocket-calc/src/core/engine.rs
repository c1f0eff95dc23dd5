//! The calculator engine - a sequential four-function state machine
//!
//! The engine owns three pieces of state: the decimal literal currently
//! being typed, the running accumulator, and the pending operator. One
//! entry point ([`Engine::press`]) mutates the state, one derived value
//! ([`Engine::display`]) reads it back. Nothing here can fail: invalid
//! input is silently ignored and division by zero flows through as an
//! IEEE-754 infinity.

use crate::core::key::Key;

/// The binary operation queued to apply to the next operand
///
/// `Idle` means nothing has been queued yet; `Completed` records that
/// the previous press was "=", which makes a following operator press
/// start a fresh chain from the displayed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingOp {
    /// No operation queued (initial state)
    #[default]
    Idle,
    /// Addition queued
    Add,
    /// Subtraction queued
    Subtract,
    /// Multiplication queued
    Multiply,
    /// Division queued
    Divide,
    /// The previous press was "="
    Completed,
}

/// The calculator engine state
///
/// A single instance is created at session start and mutated in place
/// by every key press; it is never persisted.
///
/// # Invariants
///
/// - `buffer` always parses as a non-negative decimal numeral ("0" when
///   nothing has been typed), contains at most one `.`, and never
///   exceeds [`Engine::MAX_INPUT`] characters.
/// - When nothing has been typed, [`Engine::display`] shows the
///   accumulator (initially `0`).
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    /// The decimal literal currently being typed
    buffer: String,
    /// Running result carried across operator presses
    accumulator: f64,
    /// Operation queued for the next operand
    pending: PendingOp,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Maximum length of the input buffer, in characters
    pub const MAX_INPUT: usize = 10;

    /// Creates a fresh engine: buffer `"0"`, accumulator `0`, nothing queued
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: String::from("0"),
            accumulator: 0.0,
            pending: PendingOp::Idle,
        }
    }

    /// Applies a single key press, fully processing it before returning
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Clear => self.reset(),
            // "+/-" and "%" are deliberate no-ops on this keypad
            Key::Negate | Key::Percent => {}
            Key::Digit(d) => self.push_digit(d),
            Key::Decimal => self.push_decimal(),
            Key::Add => self.queue_op(PendingOp::Add),
            Key::Subtract => self.queue_op(PendingOp::Subtract),
            Key::Multiply => self.queue_op(PendingOp::Multiply),
            Key::Divide => self.queue_op(PendingOp::Divide),
            Key::Equals => self.complete(),
        }
    }

    /// Applies a button press by its caption (the presentation boundary)
    ///
    /// Captions outside the keypad vocabulary are silently ignored.
    pub fn tap(&mut self, label: &str) {
        if let Some(key) = Key::from_label(label) {
            self.press(key);
        }
    }

    /// Returns the text to show on the readout
    ///
    /// While a literal is being typed it is shown verbatim; otherwise
    /// the accumulator is shown, as an integer when its fractional part
    /// is negligible. Non-finite results of a division by zero render
    /// as `f64`'s standard `inf`/`NaN` text.
    #[must_use]
    pub fn display(&self) -> String {
        if self.buffer == "0" {
            format_value(self.accumulator)
        } else {
            self.buffer.clone()
        }
    }

    /// Returns the literal currently being typed
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns the running accumulator
    #[must_use]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Returns the operation queued for the next operand
    #[must_use]
    pub fn pending(&self) -> PendingOp {
        self.pending
    }

    /// Resets to the fresh state, regardless of prior state
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.buffer.push('0');
        self.accumulator = 0.0;
        self.pending = PendingOp::Idle;
    }

    /// Appends a digit to the buffer
    ///
    /// A lone leading zero is replaced, presses past the length cap are
    /// ignored, and so is a `d` outside `0..=9`.
    fn push_digit(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return;
        };
        if self.buffer == "0" {
            self.buffer.clear();
            self.buffer.push(c);
        } else if self.buffer.len() < Self::MAX_INPUT {
            self.buffer.push(c);
        }
    }

    /// Appends the decimal point
    ///
    /// Ignored when the buffer already holds a point, is at the length
    /// cap, or still reads `"0"` - the last rule also blocks "0."
    /// literals, a restriction this keypad has always had.
    fn push_decimal(&mut self) {
        if self.buffer.contains('.') || self.buffer == "0" {
            return;
        }
        if self.buffer.len() < Self::MAX_INPUT {
            self.buffer.push('.');
        }
    }

    /// Handles one of the four binary operator keys
    ///
    /// With no new operand typed since the last operator or result, the
    /// press only retargets the queued operation. Otherwise the typed
    /// operand is folded into the accumulator using the operation that
    /// was queued *before* this press.
    fn queue_op(&mut self, op: PendingOp) {
        if self.buffer == "0" {
            self.pending = op;
            return;
        }
        let n = self.operand();
        self.buffer.clear();
        self.buffer.push('0');
        let previous = self.pending;
        self.pending = op;
        self.reduce(n, previous);
    }

    /// Handles the "=" key
    fn complete(&mut self) {
        let n = self.operand();
        self.buffer.clear();
        self.buffer.push('0');
        let op = self.pending;
        self.reduce(n, op);
        self.pending = PendingOp::Completed;
    }

    /// Folds an operand into the accumulator
    ///
    /// An accumulator of exactly `0` is treated as "nothing accumulated
    /// yet" and simply captures the operand. This conflates an empty
    /// accumulator with a running total that is legitimately zero
    /// (e.g. after `5 × 0 =`); that long-standing quirk is kept and
    /// pinned down by tests.
    fn reduce(&mut self, n: f64, op: PendingOp) {
        if self.accumulator == 0.0 {
            self.accumulator = n;
            return;
        }
        match op {
            PendingOp::Add => self.accumulator += n,
            PendingOp::Subtract => self.accumulator -= n,
            PendingOp::Multiply => self.accumulator *= n,
            // Division by zero is not trapped; IEEE-754 semantics apply
            PendingOp::Divide => self.accumulator /= n,
            PendingOp::Idle | PendingOp::Completed => {}
        }
    }

    /// Numeric value of the buffer
    fn operand(&self) -> f64 {
        // The buffer invariant keeps this parseable ("5." included)
        self.buffer.parse().unwrap_or(0.0)
    }
}

/// Formats an accumulator value for the readout
///
/// Integer rendering when the fractional part is negligible and the
/// magnitude fits an `i64` cast safely; otherwise the host float
/// formatting, which also covers `inf` and `NaN`.
fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract().abs() < f64::EPSILON && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
