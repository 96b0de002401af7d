//! # Truth tables
//!
//! This crate parses textual Boolean expressions and computes their complete
//! [truth tables](https://en.wikipedia.org/wiki/Truth_table).
//!
//! An expression can use variables (`[a-zA-Z]+`, case-sensitive), constants `0` and `1` and
//! the following operators, listed from the loosest to the tightest binding:
//!
//!  - `<=>` (equivalence),
//!  - `=>` (material implication),
//!  - `|` (disjunction),
//!  - `&` (conjunction),
//!  - `!` (negation).
//!
//! Binary operators associate to the right, so `a => b => c` is read as `a => (b => c)`.
//! Sub-expressions can be grouped using `(...)` or `[...]`. The two kinds of brackets
//! behave the same during evaluation, but every `[...]` group also gets its own column
//! in the generated table, labelled by its source text.
//!
//! ```rust
//! use truth_tables::{generate_table, parse};
//!
//! let parsed = parse("[a & b] => c").unwrap();
//! let table = generate_table(parsed.expression(), parsed.variables()).unwrap();
//!
//! assert_eq!(vec!["a", "b", "c", "a&b", "V"], table.header().to_vec());
//! assert_eq!(8, table.num_rows());
//! // The first row assigns `true` to every variable.
//! assert_eq!(vec![1u8, 1, 1, 1, 1], table.rows()[0]);
//! // The second row differs only in the last variable.
//! assert_eq!(vec![1u8, 1, 0, 1, 0], table.rows()[1]);
//! ```
//!
//! The rows always enumerate all `2^n` assignments of the `n` variables. Variables are
//! ordered case-insensitively and the first variable is the most significant "bit" of the
//! row, with `true` preceding `false`.
//!

use fxhash::{FxHashMap, FxHashSet};

pub mod errors;
pub mod expression;
pub mod named_function;

/// **(internal)** Implementation of the `Token` lexer.
mod _impl_token;

/// **(internal)** Implementation of the `ParsedExpression` and the `parse` entry point.
mod _impl_parsed_expression;

/// **(internal)** Implementation of the `VariableOrder`.
mod _impl_variable_order;

/// **(internal)** Implementation of the `Assignment` and `AssignmentIterator`.
mod _impl_assignment;

/// **(internal)** Implementation of the `TaggedValues`.
mod _impl_tagged_values;

/// **(internal)** Implementation of the `TableGenerator`.
mod _impl_table_generator;

/// **(internal)** Implementation of the `TableContent`.
mod _impl_table_content;

/// **(internal)** Several complex test scenarios for the whole parse/generate pipeline.
#[cfg(test)]
mod _test_truth_table;

/// Several basic utility methods for testing expressions.
#[cfg(test)]
mod _test_util;

pub use _impl_parsed_expression::parse;
pub use _impl_table_generator::{generate_table, max_table_variables};
pub use _impl_token::tokenize;
pub use errors::{
    EvalError, LexError, MalformedTreeError, ParseError, RecordError, SyntaxError, TableError,
};
pub use expression::Expression;
pub use named_function::NamedFunction;

/// Name of the last table column, holding the value of the whole expression.
pub const RESULT_COLUMN: &str = "V";

/// Suggested upper bound on the number of variables for which a table is generated.
///
/// A table with `n` variables has `2^n` rows. Generators do not apply this limit unless
/// it is requested using `TableGenerator::with_variable_limit`.
pub const DEFAULT_VARIABLE_LIMIT: usize = 20;

/// Maximal nesting depth of a parsed expression.
///
/// Every operator and every group adds one level. Deeper inputs are rejected with
/// `SyntaxError::TooDeep`. Trees built manually using the `Expression::mk_*` constructors
/// should respect the same bound, since evaluation and printing are recursive.
pub const MAX_DEPTH: usize = 256;

/// Kinds of tokens that can appear in a Boolean expression.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    And,         // '&'
    Or,          // '|'
    Not,         // '!'
    Implication, // '=>'
    Equivalency, // '<=>'
    LParen,      // '('
    RParen,      // ')'
    LBracket,    // '['
    RBracket,    // ']'
    Value,       // '0' or '1'
    Variable,    // 'name'
}

/// A single token of a Boolean expression.
///
/// For `TokenKind::Value`, the text is always normalised to `"0"` or `"1"`. The `position`
/// is the character offset of the token in the original input (including whitespace).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    position: usize,
}

/// A successfully parsed expression together with the set of its free variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedExpression {
    expression: Expression,
    variables: FxHashSet<String>,
}

/// Fixes the column order of a set of variables.
///
/// Variables are sorted case-insensitively and each one is assigned the index of its
/// table column. This index is then used to address values in an `Assignment`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableOrder {
    var_names: Vec<String>,
    var_index_mapping: FxHashMap<String, usize>,
}

/// Exactly describes one assignment of Boolean values to the variables of a `VariableOrder`
/// (one table row).
#[derive(Clone, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Assignment(Vec<bool>);

/// Exhaustively iterates over all assignments with a certain number of variables, in
/// table order (`true` before `false`, first variable most significant).
///
/// Be aware of the exponential time complexity of such operation!
#[derive(Clone, Debug)]
pub struct AssignmentIterator {
    next_assignment: Option<Assignment>,
}

/// Values of the tagged (`[...]`) groups computed during one evaluation.
///
/// The values are stored in the order in which `Expression::tagged_labels` reports
/// the labels, so duplicate labels keep separate values.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TaggedValues {
    entries: Vec<(String, bool)>,
}

/// Complete content of a truth table: one header row and `2^n` data rows.
///
/// Header is `variables ++ tagged group labels ++ ["V"]`. Every data row contains `0`/`1`
/// values in the same column order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableContent {
    header: Vec<String>,
    rows: Vec<Vec<u8>>,
}

/// Configurable generator of `TableContent`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TableGenerator {
    variable_limit: Option<usize>,
}
