//! Canonical key tokens and parsing of UI key labels.
//!
//! The engine works on canonical ASCII symbols only. Locale glyphs such as
//! `×`, `÷`, `−` and `,` are accepted here and never reach the buffer.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical decimal separator stored in the buffer.
pub const DECIMAL_SEPARATOR: char = '.';

/// Locale spelling of the decimal separator.
pub const DECIMAL_GLYPH: char = ',';

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Mod,
    ];

    /// Canonical symbol stored in the buffer.
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
        }
    }

    /// Locale glyph shown on the keypad.
    pub const fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '−',
            Self::Mul => '×',
            Self::Div => '÷',
            Self::Mod => '%',
        }
    }

    /// Accepts either the canonical symbol or the locale glyph.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Sub),
            '*' | '×' => Some(Self::Mul),
            '/' | '÷' => Some(Self::Div),
            '%' => Some(Self::Mod),
            _ => None,
        }
    }

    /// Only canonical symbols count: the buffer never holds glyphs.
    pub fn is_symbol(c: char) -> bool {
        matches!(c, '+' | '-' | '*' | '/' | '%')
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One discrete unit of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// A digit in `0..=9`. Build through [`Token::digit`] to keep it in range.
    Digit(u8),
    DecimalSeparator,
    Operator(Operator),
    Clear,
    Backspace,
    Evaluate,
}

impl Token {
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self::Digit(d))
    }

    /// The character this token appends to the buffer, if any.
    pub fn buffer_char(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::DecimalSeparator => Some(DECIMAL_SEPARATOR),
            Self::Operator(op) => Some(op.symbol()),
            Self::Clear | Self::Backspace | Self::Evaluate => None,
        }
    }

    /// Parse a single key label as sent by the keypad.
    pub fn from_key(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if let Some(token) = named_key(trimmed) {
            return Some(token);
        }

        let mut chars = trimmed.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::from_char(c)
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Self::digit(c as u8 - b'0'),
            DECIMAL_SEPARATOR | DECIMAL_GLYPH => Some(Self::DecimalSeparator),
            '=' => Some(Self::Evaluate),
            '⌫' => Some(Self::Backspace),
            // Keypads commonly label multiplication with a plain letter.
            'x' | 'X' => Some(Self::Operator(Operator::Mul)),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }
}

fn named_key(label: &str) -> Option<Token> {
    match label.to_ascii_lowercase().as_str() {
        "ac" | "c" | "clear" => Some(Token::Clear),
        "back" | "backspace" | "bs" | "⌫" => Some(Token::Backspace),
        "enter" | "eval" => Some(Token::Evaluate),
        _ => None,
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::DecimalSeparator => write!(f, "{DECIMAL_SEPARATOR}"),
            Self::Operator(op) => write!(f, "{}", op.glyph()),
            Self::Clear => write!(f, "AC"),
            Self::Backspace => write!(f, "⌫"),
            Self::Evaluate => write!(f, "="),
        }
    }
}

/// A key label outside the recognized key set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown key `{0}`")]
pub struct UnknownKey(pub String);

impl FromStr for Token {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UnknownKey(s.to_string()))
    }
}

/// Split a line of keypad input into tokens.
///
/// Words are separated by whitespace. A word naming a key (`AC`, `back`, ...)
/// is one token; any other word is read one character per key, so `12+3=`
/// and `1 2 + 3 =` are equivalent.
pub fn parse_keys(input: &str) -> Vec<Result<Token, UnknownKey>> {
    let mut keys = Vec::new();
    for word in input.split_whitespace() {
        if let Some(token) = named_key(word) {
            keys.push(Ok(token));
            continue;
        }
        for c in word.chars() {
            keys.push(Token::from_char(c).ok_or_else(|| UnknownKey(c.to_string())));
        }
    }
    keys
}
