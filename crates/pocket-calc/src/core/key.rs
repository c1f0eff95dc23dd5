//! The calculator's button vocabulary
//!
//! Every press the engine can receive is one of the seventeen keys on
//! the physical keypad. Modeling them as a closed enum keeps the engine
//! free of stringly-typed comparisons: the presentation layer converts
//! captions (or keyboard characters) into a `Key` exactly once, at the
//! boundary.

/// A single keypad key - the complete input vocabulary of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A digit key, `0` through `9`
    Digit(u8),
    /// The decimal point key (".")
    Decimal,
    /// The all-clear key ("AC")
    Clear,
    /// The sign-flip key ("+/-") - inert on this keypad
    Negate,
    /// The percent key ("%") - inert on this keypad
    Percent,
    /// Addition ("+")
    Add,
    /// Subtraction ("-")
    Subtract,
    /// Multiplication ("×")
    Multiply,
    /// Division ("÷")
    Divide,
    /// The equals key ("=")
    Equals,
}

impl Key {
    /// Returns the exact button caption for this key
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Digit(0) => "0",
            Self::Digit(1) => "1",
            Self::Digit(2) => "2",
            Self::Digit(3) => "3",
            Self::Digit(4) => "4",
            Self::Digit(5) => "5",
            Self::Digit(6) => "6",
            Self::Digit(7) => "7",
            Self::Digit(8) => "8",
            Self::Digit(9) => "9",
            Self::Digit(_) => "?",
            Self::Decimal => ".",
            Self::Clear => "AC",
            Self::Negate => "+/-",
            Self::Percent => "%",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Equals => "=",
        }
    }

    /// Parses a button caption back into a key
    ///
    /// This is the inverse of [`Key::label`]. The ASCII spellings `*`
    /// and `/` are accepted as aliases for the multiply/divide glyphs.
    /// Unknown captions return `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "AC" => Some(Self::Clear),
            "+/-" => Some(Self::Negate),
            "%" => Some(Self::Percent),
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" | "*" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            "=" => Some(Self::Equals),
            "." => Some(Self::Decimal),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_digit(10).map(|d| Self::Digit(d as u8)),
                    _ => None,
                }
            }
        }
    }

    /// Maps a keyboard character to a key (for terminal input)
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Decimal),
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | 'x' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            '=' => Some(Self::Equals),
            '%' => Some(Self::Percent),
            'c' | 'C' => Some(Self::Clear),
            _ => None,
        }
    }

    /// Returns true for the digit keys `0`-`9`
    #[must_use]
    pub const fn is_digit(&self) -> bool {
        matches!(self, Self::Digit(_))
    }

    /// Returns true for the four binary operator keys
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(
            self,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide
        )
    }

    /// Returns true for the keys that are deliberate no-ops
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        matches!(self, Self::Negate | Self::Percent)
    }
}
