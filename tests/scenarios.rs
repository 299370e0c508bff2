use keycalc::calculator::{Calculator, Operator, Token, evaluate, parse_keys};

/// Press every key in `keys` and collect the display after each one.
fn displays(calc: &mut Calculator, keys: &str) -> Vec<String> {
    parse_keys(keys)
        .into_iter()
        .map(|key| calc.press(key.unwrap()).display)
        .collect()
}

fn final_display(keys: &str) -> String {
    let mut calc = Calculator::new();
    displays(&mut calc, keys).pop().unwrap_or_else(|| calc.display())
}

#[test]
fn addition_sequence() {
    let mut calc = Calculator::new();
    assert_eq!(displays(&mut calc, "1 2 + 3 ="), ["1", "12", "12+", "12+3", "15"]);
}

#[test]
fn division_by_zero_shows_error() {
    assert_eq!(final_display("5 ÷ 0 ="), "Erro");
}

#[test]
fn chaining_off_a_result() {
    let mut calc = Calculator::new();
    assert_eq!(displays(&mut calc, "7 ="), ["7", "7"]);
    assert_eq!(displays(&mut calc, "+"), ["7+"]);
    assert_eq!(calc.state().buffer.as_str(), "7+");
    assert_eq!(displays(&mut calc, "3 ="), ["7+3", "10"]);
}

#[test]
fn leading_zero_decimal() {
    assert_eq!(final_display("0 , 5 ="), "0.5");
}

#[test]
fn backspace_after_evaluate_clears() {
    assert_eq!(final_display("9 = ⌫"), "0");
}

#[test]
fn clear_always_shows_zero() {
    for keys in ["", "1 2 3", "5 ÷ 0 =", "7 + 3 =", "4 ×", "1 , 2"] {
        let mut calc = Calculator::new();
        displays(&mut calc, keys);
        assert_eq!(calc.press(Token::Clear).display, "0", "after {keys:?}");
    }
}

#[test]
fn repeated_operator_is_idempotent() {
    assert_eq!(final_display("3 + +"), "3+");
    assert_eq!(final_display("3 +"), "3+");
}

#[test]
fn consecutive_operators_keep_only_the_last() {
    let keys = ["+", "−", "×", "÷", "%"];
    for first in keys {
        for second in keys {
            for third in keys {
                let mut calc = Calculator::new();
                displays(&mut calc, &format!("4 2 {first} {second} {third}"));
                let buffer = calc.state().buffer.as_str().to_string();
                let expected = Operator::from_char(third.chars().next().unwrap())
                    .unwrap()
                    .symbol();
                assert_eq!(buffer, format!("42{expected}"));
            }
        }
    }
}

#[test]
fn never_two_separators_in_one_number() {
    let sequences = [
        "1 . . 2 .",
        "1 , 2 , 3 + 4 . 5 . 6",
        ". . .",
        "1 . 2 + . 3 . × 4 . .",
        "9 = . . 1 .",
    ];
    for keys in sequences {
        let mut calc = Calculator::new();
        displays(&mut calc, keys);
        let buffer = calc.state().buffer.as_str().to_string();
        for run in buffer.split(|c| Operator::from_char(c).is_some()) {
            assert!(
                run.matches('.').count() <= 1,
                "{keys:?} produced {buffer:?}"
            );
        }
    }
}

#[test]
fn trailing_operator_is_stripped_on_evaluate() {
    assert_eq!(evaluate("3+").unwrap(), "3");
    assert_eq!(final_display("3 + ="), "3");
}

#[test]
fn operator_after_error_chains_marker() {
    let mut calc = Calculator::new();
    displays(&mut calc, "5 ÷ 0 = +");
    assert_eq!(calc.display(), "Erro+");
    assert_eq!(displays(&mut calc, "1 ="), ["Erro+1", "Erro"]);
}

#[test]
fn precedence_through_key_presses() {
    assert_eq!(final_display("2 + 3 × 4 ="), "14");
    assert_eq!(final_display("1 0 − 4 − 3 ="), "3");
    assert_eq!(final_display("7 % 4 ="), "3");
}

#[test]
fn negative_result_chains() {
    let mut calc = Calculator::new();
    displays(&mut calc, "2 − 5 =");
    assert_eq!(calc.display(), "-3");
    assert_eq!(displays(&mut calc, "× 2 ="), ["-3*", "-3*2", "-6"]);
}
