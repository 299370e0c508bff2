//! Input normalization: how each key press rewrites the expression buffer.
//!
//! The buffer never gains two adjacent operators, never gains a second decimal
//! separator within one number, and never starts with an operator typed into
//! an empty expression.

use tracing::{debug, trace};

use super::state::{CalculatorState, ExpressionBuffer, ZERO};
use super::token::{Operator, Token};

/// Apply one non-evaluating key press and return the next state.
///
/// `Token::Evaluate` is handled by the evaluator; passing it here leaves the
/// state unchanged.
pub fn apply(state: &CalculatorState, token: Token) -> CalculatorState {
    let next = match token {
        Token::Clear => CalculatorState::default(),
        Token::Backspace => backspace(state),
        Token::Digit(_) | Token::DecimalSeparator => match token.buffer_char() {
            Some(c) => push_number_char(state, token, c),
            None => {
                debug!(?token, "Ignoring out-of-range digit");
                state.clone()
            }
        },
        Token::Operator(op) => push_operator(state, op),
        Token::Evaluate => state.clone(),
    };

    trace!(
        ?token,
        before = state.buffer.as_str(),
        after = next.buffer.as_str(),
        "Applied key"
    );
    next
}

fn backspace(state: &CalculatorState) -> CalculatorState {
    // The display holds a result, not an editable expression.
    if state.just_evaluated {
        return CalculatorState::default();
    }

    let mut next = state.clone();
    next.buffer.pop();
    next
}

fn push_number_char(state: &CalculatorState, token: Token, c: char) -> CalculatorState {
    let mut next = state.clone();

    if state.just_evaluated {
        next.buffer = ExpressionBuffer::from(c);
        next.just_evaluated = false;
        return next;
    }

    if token == Token::DecimalSeparator && state.buffer.trailing_number_has_separator() {
        return next;
    }

    next.buffer.push(c);
    next
}

fn push_operator(state: &CalculatorState, op: Operator) -> CalculatorState {
    let mut next = state.clone();

    if state.just_evaluated {
        let mut buffer = if state.last_result != ZERO {
            ExpressionBuffer::from(state.last_result.as_str())
        } else {
            ExpressionBuffer::new()
        };
        buffer.push(op.symbol());
        next.buffer = buffer;
        next.just_evaluated = false;
        return next;
    }

    let mut buffer = state.buffer.clone();
    while let Some(last) = buffer.last_char().filter(|&c| Operator::is_symbol(c)) {
        if last == op.symbol() {
            return next;
        }
        buffer.pop();
    }

    // An expression cannot start with an operator.
    if !buffer.is_empty() {
        buffer.push(op.symbol());
    }
    next.buffer = buffer;
    next
}
