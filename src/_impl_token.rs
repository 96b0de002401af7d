//! The lexer works on the input with all whitespace removed. At every position, it first
//! tries the fixed operator and bracket patterns (longest first), then constants and
//! variable names. Positions reported in tokens and errors still refer to the original input.

use crate::errors::LexError;
use crate::{Token, TokenKind};
use log::debug;
use std::fmt::{Display, Error, Formatter};

/// **(internal)** Fixed token patterns. Longer patterns must come first,
/// so that `<=>` is never consumed as a partial `=>`.
const FIXED_TOKENS: [(&str, TokenKind); 9] = [
    ("<=>", TokenKind::Equivalency),
    ("=>", TokenKind::Implication),
    ("&", TokenKind::And),
    ("|", TokenKind::Or),
    ("!", TokenKind::Not),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("[", TokenKind::LBracket),
    ("]", TokenKind::RBracket),
];

/// **(internal)** Number of characters included in the `LexError` diagnostics.
const ERROR_CONTEXT: usize = 5;

impl TokenKind {
    /// True for `(` and `[`.
    pub fn is_opening_bracket(self) -> bool {
        matches!(self, TokenKind::LParen | TokenKind::LBracket)
    }

    /// True for `)` and `]`.
    pub fn is_closing_bracket(self) -> bool {
        matches!(self, TokenKind::RParen | TokenKind::RBracket)
    }

    /// For a bracket, return the bracket that closes/opens it.
    pub fn matching_bracket(self) -> Option<TokenKind> {
        match self {
            TokenKind::LParen => Some(TokenKind::RParen),
            TokenKind::RParen => Some(TokenKind::LParen),
            TokenKind::LBracket => Some(TokenKind::RBracket),
            TokenKind::RBracket => Some(TokenKind::LBracket),
            _ => None,
        }
    }

    /// Number of operands of an operator token, `None` if this is not an operator.
    pub fn arity(self) -> Option<usize> {
        match self {
            TokenKind::Not => Some(1),
            TokenKind::And
            | TokenKind::Or
            | TokenKind::Implication
            | TokenKind::Equivalency => Some(2),
            _ => None,
        }
    }

    /// The textual form of a fixed token, `None` for values and variables.
    pub fn symbol(self) -> Option<&'static str> {
        FIXED_TOKENS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(symbol, _)| *symbol)
    }
}

impl Token {
    /// Create a new token. `Value` tokens must use `"0"` or `"1"` as text.
    pub fn new(kind: TokenKind, text: &str, position: usize) -> Token {
        Token {
            kind,
            text: text.to_string(),
            position,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character offset of this token in the original input.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.text)
    }
}

/// Split the given `text` into a sequence of `Token`s.
///
/// Whitespace is removed before scanning, hence `a b` is a single variable `ab`.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    let data: Vec<(usize, char)> = text
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .collect();

    let mut output = Vec::new();
    let mut i = 0;
    while i < data.len() {
        let (position, c) = data[i];
        if let Some((pattern, kind)) = FIXED_TOKENS
            .iter()
            .find(|(pattern, _)| starts_with(&data[i..], pattern))
        {
            output.push(Token::new(*kind, pattern, position));
            i += pattern.chars().count();
        } else if c == '0' || c == '1' {
            output.push(Token::new(TokenKind::Value, &c.to_string(), position));
            i += 1;
        } else if c.is_ascii_alphabetic() {
            let start = i;
            while i < data.len() && data[i].1.is_ascii_alphabetic() {
                i += 1;
            }
            let name: String = data[start..i].iter().map(|(_, c)| *c).collect();
            output.push(Token::new(TokenKind::Variable, &name, position));
        } else {
            return Err(LexError {
                position,
                offending_text: data[i..]
                    .iter()
                    .take(ERROR_CONTEXT)
                    .map(|(_, c)| *c)
                    .collect(),
            });
        }
    }

    debug!("Tokenized `{}` into {} tokens.", text, output.len());
    Ok(output)
}

/// **(internal)** Check that the (whitespace-free) `data` begin with the given `pattern`.
fn starts_with(data: &[(usize, char)], pattern: &str) -> bool {
    let mut data = data.iter();
    pattern
        .chars()
        .all(|p| matches!(data.next(), Some((_, c)) if *c == p))
}
