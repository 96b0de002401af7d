//! Expressions are explicit trees representing Boolean formulas.
//!
//! They are usually obtained using `crate::parse`, but can be also assembled directly:
//!
//! ```rust
//! use truth_tables::Expression;
//! use truth_tables::expression::Expression::*;
//!
//! // [a & b] => c
//! let e = Expression::mk_implies(
//!     Expression::mk_group(Expression::mk_and(Variable("a".into()), Variable("b".into())), true),
//!     Variable("c".into()),
//! );
//! assert_eq!(vec!["a&b"], e.tagged_labels());
//! ```

/// **(internal)** Constructors, evaluation and display of expressions.
mod _impl_expression;

/// **(internal)** Builds expression trees from token sequences.
mod _impl_tree_builder;

pub(crate) use _impl_tree_builder::build;

/// Recursive type for the expression tree.
///
/// Every node owns its children. A `Group` node is created for every `(...)` or `[...]`
/// in the source. Only `[...]` groups are `tagged`, meaning their value is reported as
/// a separate table column named by `label`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expression {
    Value(bool),
    Variable(String),
    Not(Box<Expression>),
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
    Implies(Box<Expression>, Box<Expression>),
    Equivalent(Box<Expression>, Box<Expression>),
    Group {
        inner: Box<Expression>,
        tagged: bool,
        label: String,
    },
}
