//! Calculator module for accumulating and evaluating key-press expressions.
//!
//! This module provides functionality to:
//! - Parse key labels (including locale glyphs) into canonical tokens
//! - Normalize the expression buffer on every key press
//! - Sanitize and evaluate the buffer with an explicit arithmetic parser
//! - Format the current state for display

pub mod display;
mod engine;
pub mod evaluation;
pub mod input;
pub mod sanitize;
mod state;
pub mod token;

pub use engine::{Calculator, Press};
pub use evaluation::{CalcResult, EvaluationError, Invalid, evaluate, evaluate_expression};
pub use state::{CalculatorState, ERROR_MARKER, ExpressionBuffer, ZERO};
pub use token::{Operator, Token, UnknownKey, parse_keys};
