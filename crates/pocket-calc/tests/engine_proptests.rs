//! Property-based tests for the engine at its public boundary
//!
//! Everything here drives the engine the way a front end would: by
//! button caption. The properties pin down the buffer invariants and
//! the silent-rejection input model.

use pocket_calc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Any caption from the keypad vocabulary
fn label_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        (0usize..10).prop_map(|d| ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"][d]),
        Just("."),
        Just("AC"),
        Just("+/-"),
        Just("%"),
        Just("+"),
        Just("-"),
        Just("×"),
        Just("÷"),
        Just("="),
    ]
}

/// An arbitrary tape of button presses
fn tape_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(label_strategy(), 0..80)
}

fn play(tape: &[&str]) -> Engine {
    let mut engine = Engine::new();
    for label in tape {
        engine.tap(label);
    }
    engine
}

// ===== Buffer invariants =====

proptest! {
    /// The buffer never exceeds the ten-character cap
    #[test]
    fn prop_buffer_capped(tape in tape_strategy()) {
        let mut engine = Engine::new();
        for label in tape {
            engine.tap(label);
            prop_assert!(engine.buffer().len() <= Engine::MAX_INPUT);
        }
    }

    /// The buffer never holds more than one decimal point
    #[test]
    fn prop_single_decimal_point(tape in tape_strategy()) {
        let mut engine = Engine::new();
        for label in tape {
            engine.tap(label);
            prop_assert!(engine.buffer().matches('.').count() <= 1);
        }
    }

    /// The buffer is always a valid non-negative decimal numeral
    #[test]
    fn prop_buffer_parses_non_negative(tape in tape_strategy()) {
        let engine = play(&tape);
        let parsed: f64 = engine.buffer().parse().unwrap();
        prop_assert!(parsed >= 0.0);
    }

    /// The buffer is never empty ("0" stands in for empty)
    #[test]
    fn prop_buffer_never_empty(tape in tape_strategy()) {
        let engine = play(&tape);
        prop_assert!(!engine.buffer().is_empty());
    }
}

// ===== Reset and readout properties =====

proptest! {
    /// "AC" restores the initial state from anywhere
    #[test]
    fn prop_clear_always_resets(tape in tape_strategy()) {
        let mut engine = play(&tape);
        engine.tap("AC");
        prop_assert_eq!(engine, Engine::new());
    }

    /// Reading the display twice without a press gives the same text
    #[test]
    fn prop_display_idempotent(tape in tape_strategy()) {
        let engine = play(&tape);
        prop_assert_eq!(engine.display(), engine.display());
    }

    /// The readout shows the buffer verbatim while a literal is typed
    #[test]
    fn prop_display_shows_typed_literal(tape in tape_strategy()) {
        let engine = play(&tape);
        if engine.buffer() != "0" {
            prop_assert_eq!(engine.display(), engine.buffer());
        }
    }

    /// The inert keys never change engine state
    #[test]
    fn prop_inert_keys_change_nothing(tape in tape_strategy()) {
        let mut engine = play(&tape);
        let before = engine.clone();
        engine.tap("+/-");
        engine.tap("%");
        prop_assert_eq!(engine, before);
    }

    /// Unknown captions never change engine state
    #[test]
    fn prop_unknown_labels_ignored(tape in tape_strategy(), junk in "[A-Za-z]{1,6}") {
        let mut engine = play(&tape);
        let before = engine.clone();
        if Key::from_label(&junk).is_none() {
            engine.tap(&junk);
            prop_assert_eq!(engine, before);
        }
    }
}

// ===== Digit entry properties =====

proptest! {
    /// Typed digit sequences are reproduced exactly, leading zero suppressed
    #[test]
    fn prop_digit_tape_reproduced(
        first in 1u32..=9,
        rest in prop::collection::vec(0u32..=9, 0..9),
    ) {
        let mut engine = Engine::new();
        let mut expected = first.to_string();
        engine.tap(&first.to_string());
        for d in rest {
            engine.tap(&d.to_string());
            expected.push(char::from_digit(d, 10).unwrap());
        }
        prop_assert_eq!(engine.buffer(), expected.as_str());
        prop_assert_eq!(engine.display(), expected);
    }

    /// Digit presses past the cap are no-ops
    #[test]
    fn prop_digits_past_cap_ignored(extra in prop::collection::vec(0u32..=9, 1..10)) {
        let mut engine = Engine::new();
        for _ in 0..Engine::MAX_INPUT {
            engine.tap("8");
        }
        let full = engine.buffer().to_string();
        for d in extra {
            engine.tap(&d.to_string());
        }
        prop_assert_eq!(engine.buffer(), full);
    }
}
