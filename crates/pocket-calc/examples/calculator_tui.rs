//! Calculator TUI example
//!
//! Run with: cargo run --example calculator_tui

fn main() -> Result<(), pocket_calc::tui::TuiError> {
    pocket_calc::tui::run()
}
