//! Unified calculator driver
//!
//! The same button-press scenarios must hold whether the engine is
//! driven directly or through the TUI front end. The [`CalculatorDriver`]
//! trait abstracts "tap a captioned button, read the readout", and the
//! verification functions below encode the scenarios once so every
//! front end runs the identical suite.

use crate::core::Engine;

/// Abstract driver for captioned button presses
///
/// # Example
///
/// ```
/// use pocket_calc::driver::{CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// for label in ["7", "+", "3", "="] {
///     driver.tap(label);
/// }
/// assert_eq!(driver.display(), "10");
/// ```
pub trait CalculatorDriver {
    /// Taps a button by its caption; unknown captions are ignored
    fn tap(&mut self, label: &str);

    /// Reads the current readout text
    fn display(&self) -> String;

    /// Resets to the fresh state (the "AC" button)
    fn reset(&mut self);
}

/// Driver that talks to the engine directly, with no front end
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: Engine,
}

impl EngineDriver {
    /// Creates a driver around a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
        }
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn tap(&mut self, label: &str) {
        self.engine.tap(label);
    }

    fn display(&self) -> String {
        self.engine.display()
    }

    fn reset(&mut self) {
        self.engine.reset();
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::Key;
    use crate::tui::CalculatorApp;

    /// Driver that routes presses through the TUI application state
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a driver around a fresh app
        #[must_use]
        pub fn new() -> Self {
            Self {
                app: CalculatorApp::new(),
            }
        }

        /// Returns the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn tap(&mut self, label: &str) {
            if let Some(key) = Key::from_label(label) {
                self.app.press(key);
            }
        }

        fn display(&self) -> String {
            self.app.display()
        }

        fn reset(&mut self) {
            self.app.press(Key::Clear);
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared verification scenarios =====
// These run against ANY CalculatorDriver implementation.

/// Taps a sequence of captions in order
pub fn tap_all<D: CalculatorDriver>(driver: &mut D, labels: &[&str]) {
    for label in labels {
        driver.tap(label);
    }
}

/// Verifies digit entry, leading-zero suppression and the length cap
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    tap_all(driver, &["0", "1", "2", "3"]);
    assert_eq!(driver.display(), "123");

    driver.reset();
    tap_all(driver, &["9"; 15]);
    assert_eq!(driver.display(), "9999999999");
    driver.reset();
}

/// Verifies the decimal point rules
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    tap_all(driver, &["5", ".", "5", ".", "2"]);
    assert_eq!(driver.display(), "5.52");

    driver.reset();
    driver.tap(".");
    assert_eq!(driver.display(), "0");
    driver.reset();
}

/// Verifies the four sequential arithmetic chains
pub fn verify_sequential_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    tap_all(driver, &["7", "+", "3", "="]);
    assert_eq!(driver.display(), "10");

    driver.reset();
    tap_all(driver, &["9", "-", "4", "="]);
    assert_eq!(driver.display(), "5");

    driver.reset();
    tap_all(driver, &["6", "×", "7", "="]);
    assert_eq!(driver.display(), "42");

    driver.reset();
    tap_all(driver, &["9", "÷", "2", "="]);
    assert_eq!(driver.display(), "4.5");
    driver.reset();
}

/// Verifies that a repeated operator only retargets the queued operation
pub fn verify_operator_retarget<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    tap_all(driver, &["9", "+", "+", "1", "="]);
    assert_eq!(driver.display(), "10");
    driver.reset();
}

/// Verifies that division by zero surfaces an infinity, not an error
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    tap_all(driver, &["1", "0", "÷", "0", "="]);
    assert_eq!(driver.display(), "inf");
    driver.reset();
}

/// Verifies that "=" with no prior input leaves the readout at zero
pub fn verify_equals_without_input<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.tap("=");
    assert_eq!(driver.display(), "0");
    driver.reset();
}

/// Verifies that "AC" recovers from any of the states above
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    tap_all(driver, &["1", "2", ".", "5", "+", "4"]);
    driver.tap("AC");
    assert_eq!(driver.display(), "0");
}

/// Verifies the inert keys leave the readout untouched
pub fn verify_inert_keys<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    tap_all(driver, &["4", "2"]);
    driver.tap("+/-");
    driver.tap("%");
    assert_eq!(driver.display(), "42");
    driver.reset();
}

/// Complete verification suite - runs every scenario
pub fn run_full_verification<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_decimal_entry(driver);
    verify_sequential_arithmetic(driver);
    verify_operator_retarget(driver);
    verify_division_by_zero(driver);
    verify_equals_without_input(driver);
    verify_clear(driver);
    verify_inert_keys(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== EngineDriver tests =====

    #[test]
    fn test_engine_driver_new() {
        let driver = EngineDriver::new();
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_engine_driver_default() {
        let driver = EngineDriver::default();
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_engine_driver_tap_and_display() {
        let mut driver = EngineDriver::new();
        tap_all(&mut driver, &["4", "2"]);
        assert_eq!(driver.display(), "42");
        assert_eq!(driver.engine().buffer(), "42");
    }

    #[test]
    fn test_engine_driver_reset() {
        let mut driver = EngineDriver::new();
        tap_all(&mut driver, &["4", "2", "+"]);
        driver.reset();
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_engine_driver_full_verification() {
        let mut driver = EngineDriver::new();
        run_full_verification(&mut driver);
    }

    // ===== TuiDriver tests =====

    #[cfg(feature = "tui")]
    mod tui_tests {
        use super::*;

        #[test]
        fn test_tui_driver_new() {
            let driver = TuiDriver::new();
            assert_eq!(driver.display(), "0");
        }

        #[test]
        fn test_tui_driver_tap_and_display() {
            let mut driver = TuiDriver::new();
            tap_all(&mut driver, &["7", "+", "3", "="]);
            assert_eq!(driver.display(), "10");
        }

        #[test]
        fn test_tui_driver_app_access() {
            let mut driver = TuiDriver::new();
            driver.app_mut().press(crate::core::Key::Digit(5));
            assert_eq!(driver.app().display(), "5");
        }

        #[test]
        fn test_tui_driver_full_verification() {
            let mut driver = TuiDriver::new();
            run_full_verification(&mut driver);
        }

        #[test]
        fn test_front_ends_agree() {
            let mut engine_driver = EngineDriver::new();
            let mut tui_driver = TuiDriver::new();
            let presses = ["1", "2", ".", "5", "×", "4", "=", "+", "8", "="];
            for label in presses {
                engine_driver.tap(label);
                tui_driver.tap(label);
                assert_eq!(engine_driver.display(), tui_driver.display());
            }
        }
    }
}
