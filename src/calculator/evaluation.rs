//! Expression evaluation.
//!
//! Sanitizes the buffer, then evaluates it with a small recursive-descent
//! parser supporting `+ - * / %` with the usual precedence and a unary sign.

use thiserror::Error;
use tracing::debug;

use super::sanitize::sanitize;
use super::state::{ERROR_MARKER, ZERO};

/// Why an expression could not produce a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Invalid {
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("unexpected character `{found}` at position {position}")]
    UnexpectedChar { found: char, position: usize },
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("malformed number at position {position}")]
    MalformedNumber { position: usize },
    #[error("result is not a finite number")]
    NonFinite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// Nothing left after sanitization. Resolves to `0`, not shown as an error.
    #[error("nothing to evaluate")]
    Empty,
    #[error("invalid expression: {reason}")]
    Invalid { reason: Invalid },
}

impl From<Invalid> for EvaluationError {
    fn from(reason: Invalid) -> Self {
        Self::Invalid { reason }
    }
}

/// Result of evaluating a calculator buffer.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    /// Successful calculation with a finite numeric result.
    Success {
        /// The buffer as it was before sanitization.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Canonical decimal rendering of `value`.
        display_result: String,
    },
    /// Evaluation failed. Displayed as [`ERROR_MARKER`].
    Error {
        expression: String,
        error: EvaluationError,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The result string, or the error marker.
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { .. } => ERROR_MARKER,
        }
    }
}

/// Evaluate a raw buffer into its canonical result string.
///
/// An empty expression (after sanitization) yields `"0"`. Every other failure
/// is [`EvaluationError::Invalid`].
pub fn evaluate(buffer: &str) -> Result<String, EvaluationError> {
    match compute(&sanitize(buffer)) {
        Ok(value) => Ok(format_result(value)),
        Err(EvaluationError::Empty) => Ok(ZERO.to_string()),
        Err(err) => Err(err),
    }
}

/// Evaluate a raw buffer, keeping the expression alongside the outcome.
pub fn evaluate_expression(buffer: &str) -> CalcResult {
    let expression = buffer.to_string();
    let sanitized = sanitize(buffer);

    match compute(&sanitized) {
        Ok(value) => CalcResult::Success {
            expression,
            display_result: format_result(value),
            value,
        },
        Err(EvaluationError::Empty) => CalcResult::Success {
            expression,
            value: 0.0,
            display_result: ZERO.to_string(),
        },
        Err(error) => {
            debug!(%error, buffer, sanitized = sanitized.as_str(), "Evaluation failed");
            CalcResult::Error { expression, error }
        }
    }
}

/// Evaluate an already sanitized, canonical expression.
pub fn compute(expression: &str) -> Result<f64, EvaluationError> {
    if expression.is_empty() {
        return Err(EvaluationError::Empty);
    }

    let mut parser = Parser::new(expression);
    let value = parser.expression()?;
    if let Some((position, found)) = parser.peek() {
        return Err(Invalid::UnexpectedChar { found, position }.into());
    }

    if !value.is_finite() {
        return Err(Invalid::NonFinite.into());
    }
    Ok(value)
}

/// Format a number canonically: shortest round-trip decimal, no exponent,
/// no trailing zeros, and no decimal point for integral values.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        // Also folds negative zero.
        ZERO.to_string()
    } else {
        value.to_string()
    }
}

/// Recursive-descent evaluator over the sanitized character stream.
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/' | '%') factor)*
/// factor     := ('+' | '-')? number
/// number     := digits ('.' digits?)? | '.' digits
/// ```
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<(usize, char)> {
        self.input[self.pos..].chars().next().map(|c| (self.pos, c))
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.input[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn expression(&mut self) -> Result<f64, Invalid> {
        let mut value = self.term()?;
        while let Some((_, op @ ('+' | '-'))) = self.peek() {
            self.bump();
            let rhs = self.term()?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, Invalid> {
        let mut value = self.factor()?;
        while let Some((_, op @ ('*' | '/' | '%'))) = self.peek() {
            self.bump();
            let rhs = self.factor()?;
            value = match op {
                '*' => value * rhs,
                '/' if rhs == 0.0 => return Err(Invalid::DivisionByZero),
                '/' => value / rhs,
                _ if rhs == 0.0 => return Err(Invalid::ModuloByZero),
                _ => value % rhs,
            };
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, Invalid> {
        match self.peek() {
            Some((_, '-')) => {
                self.bump();
                Ok(-self.number()?)
            }
            Some((_, '+')) => {
                self.bump();
                self.number()
            }
            _ => self.number(),
        }
    }

    fn number(&mut self) -> Result<f64, Invalid> {
        let start = self.pos;
        let mut digits = 0;
        let mut points = 0;

        while let Some((_, c)) = self.peek() {
            match c {
                '0'..='9' => digits += 1,
                '.' => points += 1,
                _ => break,
            }
            self.bump();
        }

        if self.pos == start {
            return match self.peek() {
                Some((position, found)) => Err(Invalid::UnexpectedChar { found, position }),
                None => Err(Invalid::UnexpectedEnd),
            };
        }
        if digits == 0 || points > 1 {
            return Err(Invalid::MalformedNumber { position: start });
        }

        self.input[start..self.pos]
            .parse::<f64>()
            .map_err(|_| Invalid::MalformedNumber { position: start })
    }
}
