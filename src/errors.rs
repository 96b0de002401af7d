//! Error types produced while parsing expressions, evaluating them and generating tables.
//!
//! Parsing errors (`LexError`, `SyntaxError`) are caused by user input. The remaining
//! evaluation errors can only appear when an expression is evaluated against an assignment
//! that was not derived from it, or when a tree is assembled by hand with wrong operand counts.

use crate::TokenKind;
use thiserror::Error;

/// The input contains a character sequence that does not start any valid token.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("Invalid symbol at position {position}: `{offending_text}`.")]
pub struct LexError {
    /// Character offset of the unrecognised sequence in the original input.
    pub position: usize,
    /// At most five characters starting at `position` (whitespace removed).
    pub offending_text: String,
}

/// An internal operator node was constructed with a wrong number of operands.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("Invalid tree topology at `{operator:?}` node: expected {expected} operand(s), found {found}.")]
pub struct MalformedTreeError {
    pub operator: TokenKind,
    pub expected: usize,
    pub found: usize,
}

/// The token sequence does not describe a valid expression.
///
/// All positions are character offsets in the original input.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SyntaxError {
    #[error("Expected an expression at position {position}, found nothing.")]
    EmptySpan { position: usize },
    #[error("Invalid {operator:?} syntax at position {position}: missing left operand.")]
    InvalidOperatorSyntax { operator: TokenKind, position: usize },
    #[error("Invalid NOT syntax at position {position}.")]
    InvalidNotSyntax { position: usize },
    #[error("Invalid syntax at position {position}: unexpected `{text}`.")]
    UnexpectedTokens { position: usize, text: String },
    #[error("Unbalanced bracket at position {position}.")]
    UnbalancedBracket { position: usize },
    #[error("Expression nesting at position {position} exceeds the maximal depth {limit}.")]
    TooDeep { position: usize, limit: usize },
    #[error(transparent)]
    MalformedTree(#[from] MalformedTreeError),
}

/// Any error that can be returned by `parse`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Expression evaluation failed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EvalError {
    #[error("Variable `{name}` has no value in the given assignment.")]
    UnboundVariable { name: String },
}

/// Table generation failed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TableError {
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("Cannot generate a table for {count} variables (at most {limit} allowed).")]
    TooManyVariables { count: usize, limit: usize },
    #[error("Cannot allocate a table with {rows} rows.")]
    OutOfMemory { rows: usize },
    /// Only reported when the `shields_up` feature is enabled.
    #[error("Table row has {found} columns, but the header has {expected}.")]
    ColumnMismatch { expected: usize, found: usize },
    /// Only reported when the `shields_up` feature is enabled.
    #[error("Assignment has {found} values, but there are {expected} variables.")]
    AssignmentMismatch { expected: usize, found: usize },
}

/// A named function record could not be created, read or written.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Record on line {line} is missing the `{field}` field.")]
    MissingField { line: usize, field: &'static str },
    #[error("Invalid record {field}: `{value}`.")]
    InvalidField { field: &'static str, value: String },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
