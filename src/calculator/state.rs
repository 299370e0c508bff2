use std::fmt;

use super::token::{DECIMAL_SEPARATOR, Operator};

/// Marker shown instead of a number when evaluation fails.
pub const ERROR_MARKER: &str = "Erro";

/// Result value of a fresh session.
pub const ZERO: &str = "0";

/// The in-progress, not-yet-evaluated expression.
///
/// Holds canonical characters only. It can also hold a previous result string
/// (`-7`, `0.5`, `Erro`) when an operator chains off an evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpressionBuffer(String);

impl ExpressionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last_char(&self) -> Option<char> {
        self.0.chars().next_back()
    }

    pub fn ends_with_operator(&self) -> bool {
        self.last_char().is_some_and(Operator::is_symbol)
    }

    pub fn push(&mut self, c: char) {
        self.0.push(c);
    }

    pub fn pop(&mut self) -> Option<char> {
        self.0.pop()
    }

    /// Text after the last operator, or the whole buffer if it has none.
    pub fn trailing_number(&self) -> &str {
        match self.0.rfind(Operator::is_symbol) {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    pub fn trailing_number_has_separator(&self) -> bool {
        self.trailing_number().contains(DECIMAL_SEPARATOR)
    }
}

impl From<&str> for ExpressionBuffer {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<char> for ExpressionBuffer {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

impl fmt::Display for ExpressionBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the engine remembers between key presses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculatorState {
    pub buffer: ExpressionBuffer,
    /// Display string of the last evaluation, or [`ERROR_MARKER`].
    pub last_result: String,
    /// True while the display shows a result rather than an editable expression.
    pub just_evaluated: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            buffer: ExpressionBuffer::new(),
            last_result: ZERO.to_string(),
            just_evaluated: false,
        }
    }
}
