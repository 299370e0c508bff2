//! Buffer sanitization before evaluation.
//!
//! Rewrites a raw buffer into a canonical arithmetic string: glyphs become
//! ASCII symbols, dangling operators and separators are trimmed, and each
//! numeric run is left with at most one decimal point and no redundant
//! leading zeros.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// A maximal run of digits and decimal points.
    static ref NUMERIC_RUN: Regex = Regex::new(r"[0-9.]+").unwrap();
}

/// Operator or decimal-separator characters, in either spelling.
fn is_symbol(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%' | '.' | ',')
}

/// Run every sanitization step in order.
pub fn sanitize(buffer: &str) -> String {
    let translated = translate_glyphs(buffer);
    let trimmed = strip_leading_symbols(strip_trailing_symbols(&translated));
    let single_point = collapse_decimal_points(trimmed);
    strip_leading_zeros(&single_point).into_owned()
}

/// `÷ → /`, `× → *`, `− → -`, `, → .`
pub fn translate_glyphs(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '÷' => '/',
            '×' => '*',
            '−' => '-',
            ',' => '.',
            other => other,
        })
        .collect()
}

/// Drop trailing operators and separators until the string ends in something else.
pub fn strip_trailing_symbols(input: &str) -> &str {
    input.trim_end_matches(is_symbol)
}

/// Drop the first character while it and the second are both symbols.
///
/// A single leading sign such as `-5` survives.
pub fn strip_leading_symbols(input: &str) -> &str {
    let mut rest = input;
    loop {
        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (Some(first), Some(second)) if is_symbol(first) && is_symbol(second) => {
                rest = &rest[first.len_utf8()..];
            }
            _ => return rest,
        }
    }
}

/// Keep only the last decimal point of each numeric run: `1.2.3 → 12.3`.
pub fn collapse_decimal_points(input: &str) -> Cow<'_, str> {
    NUMERIC_RUN.replace_all(input, |caps: &Captures| {
        let run = &caps[0];
        match run.rfind('.') {
            Some(last) => run
                .char_indices()
                .filter(|&(i, c)| c != '.' || i == last)
                .map(|(_, c)| c)
                .collect::<String>(),
            None => run.to_string(),
        }
    })
}

/// Strip redundant leading zeros from the integer part of each numeric run.
///
/// `007 → 7` and `00.5 → 0.5`, while a lone `0` stays. Digits after the
/// decimal point are left alone so `0.05` keeps its value.
pub fn strip_leading_zeros(input: &str) -> Cow<'_, str> {
    NUMERIC_RUN.replace_all(input, |caps: &Captures| {
        let run = &caps[0];
        let (integer, fraction) = run.split_at(run.find('.').unwrap_or(run.len()));
        let stripped = integer.trim_start_matches('0');
        if stripped.is_empty() && !integer.is_empty() {
            format!("0{fraction}")
        } else {
            format!("{stripped}{fraction}")
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_translation() {
        assert_eq!(translate_glyphs("6÷3×2−1,5"), "6/3*2-1.5");
    }

    #[test]
    fn test_trailing_symbols_stripped() {
        assert_eq!(sanitize("3+"), "3");
        assert_eq!(sanitize("3+."), "3");
        assert_eq!(sanitize("12×"), "12");
        assert_eq!(sanitize("+"), "");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_doubled_leading_symbols_stripped() {
        assert_eq!(strip_leading_symbols("+-5"), "-5");
        assert_eq!(strip_leading_symbols("*/+5"), "+5");
        assert_eq!(strip_leading_symbols("-5"), "-5");
        assert_eq!(strip_leading_symbols("-"), "-");
    }

    #[test]
    fn test_decimal_points_collapsed_per_run() {
        assert_eq!(collapse_decimal_points("1.2.3"), "12.3");
        assert_eq!(collapse_decimal_points("1.2+3.4"), "1.2+3.4");
        assert_eq!(collapse_decimal_points("..5"), ".5");
    }

    #[test]
    fn test_leading_zeros_stripped() {
        assert_eq!(strip_leading_zeros("007"), "7");
        assert_eq!(strip_leading_zeros("00.5"), "0.5");
        assert_eq!(strip_leading_zeros("0"), "0");
        assert_eq!(strip_leading_zeros("100+0"), "100+0");
        assert_eq!(strip_leading_zeros("0.05"), "0.05");
        assert_eq!(strip_leading_zeros(".5"), ".5");
        assert_eq!(strip_leading_zeros("3*0009"), "3*9");
    }

    #[test]
    fn test_full_pipeline() {
        assert_eq!(sanitize("0,5"), "0.5");
        assert_eq!(sanitize("05×1.2.3−"), "5*12.3");
        assert_eq!(sanitize("Erro+"), "Erro");
    }
}
