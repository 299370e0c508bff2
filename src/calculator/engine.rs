use tracing::debug;

use super::display;
use super::evaluation::evaluate_expression;
use super::input;
use super::state::CalculatorState;
use super::token::Token;

/// Response to a single key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Press {
    pub display: String,
}

/// One interactive calculator session.
///
/// Each key press is applied synchronously and atomically; `&mut self` keeps
/// a second press from interleaving with the first.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> String {
        display::format(&self.state)
    }

    /// Apply a key press and return the new display.
    pub fn press(&mut self, token: Token) -> Press {
        self.state = match token {
            Token::Evaluate => self.evaluate(),
            other => input::apply(&self.state, other),
        };
        Press {
            display: self.display(),
        }
    }

    /// Apply a key press given by its keypad label.
    ///
    /// Labels outside the key set leave the state untouched.
    pub fn press_key(&mut self, label: &str) -> Press {
        match label.parse::<Token>() {
            Ok(token) => self.press(token),
            Err(err) => {
                debug!(%err, "Ignoring key press");
                Press {
                    display: self.display(),
                }
            }
        }
    }

    fn evaluate(&self) -> CalculatorState {
        let result = evaluate_expression(self.state.buffer.as_str());
        debug!(
            expression = result.expression(),
            result = result.display(),
            "Evaluated"
        );

        // The buffer stays as the last expression; the next key decides what
        // happens to it.
        CalculatorState {
            buffer: self.state.buffer.clone(),
            last_result: result.display().to_string(),
            just_evaluated: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::token::Operator;

    #[test]
    fn test_press_returns_display() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press(Token::Digit(4)).display, "4");
        assert_eq!(calc.press(Token::Operator(Operator::Mul)).display, "4*");
        assert_eq!(calc.press(Token::Digit(2)).display, "4*2");
        assert_eq!(calc.press(Token::Evaluate).display, "8");
        assert!(calc.state().just_evaluated);
        assert_eq!(calc.state().buffer.as_str(), "4*2");
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let mut calc = Calculator::new();
        calc.press_key("3");
        let before = calc.state().clone();
        assert_eq!(calc.press_key("sqrt").display, "3");
        assert_eq!(calc.state(), &before);
    }

    #[test]
    fn test_error_sets_just_evaluated() {
        let mut calc = Calculator::new();
        for key in ["5", "÷", "0", "="] {
            calc.press_key(key);
        }
        assert_eq!(calc.display(), "Erro");
        assert!(calc.state().just_evaluated);
        assert_eq!(calc.press_key("2").display, "2");
    }

    #[test]
    fn test_evaluate_empty_buffer() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press(Token::Evaluate).display, "0");
        assert!(calc.state().just_evaluated);
    }
}
