//! Display formatting: what the screen shows for a given state.

use super::state::{CalculatorState, ZERO};

/// The display string for the current state. Pure read.
///
/// A trailing operator is shown as typed.
pub fn format(state: &CalculatorState) -> String {
    if state.just_evaluated {
        state.last_result.clone()
    } else if state.buffer.is_empty() {
        ZERO.to_string()
    } else {
        state.buffer.to_string()
    }
}

/// Render canonical symbols with the keypad's locale glyphs.
pub fn localize(display: &str) -> String {
    display
        .chars()
        .map(|c| match c {
            '*' => '×',
            '/' => '÷',
            '-' => '−',
            '.' => ',',
            other => other,
        })
        .collect()
}
