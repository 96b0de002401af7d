use super::Expression;
use super::Expression::*;
use crate::errors::{EvalError, MalformedTreeError};
use crate::{Assignment, TaggedValues, TokenKind, VariableOrder};
use fxhash::FxHashSet;
use std::fmt::{Display, Error, Formatter};

/// Basic constructors for expression trees.
impl Expression {
    pub fn mk_value(value: bool) -> Expression {
        Value(value)
    }

    pub fn mk_variable(name: &str) -> Expression {
        Variable(name.to_string())
    }

    pub fn mk_not(inner: Expression) -> Expression {
        Not(Box::new(inner))
    }

    pub fn mk_and(left: Expression, right: Expression) -> Expression {
        And(Box::new(left), Box::new(right))
    }

    pub fn mk_or(left: Expression, right: Expression) -> Expression {
        Or(Box::new(left), Box::new(right))
    }

    pub fn mk_implies(antecedent: Expression, consequent: Expression) -> Expression {
        Implies(Box::new(antecedent), Box::new(consequent))
    }

    pub fn mk_equivalent(left: Expression, right: Expression) -> Expression {
        Equivalent(Box::new(left), Box::new(right))
    }

    /// Wrap `inner` into a group. The label of the group is the compact source text
    /// of `inner` (see `Expression::source_text`).
    pub fn mk_group(inner: Expression, tagged: bool) -> Expression {
        let label = inner.source_text();
        Self::mk_labelled_group(inner, tagged, label)
    }

    /// Wrap `inner` into a group with an explicit `label`.
    pub fn mk_labelled_group(inner: Expression, tagged: bool, label: String) -> Expression {
        Group {
            inner: Box::new(inner),
            tagged,
            label,
        }
    }

    /// Create an operator node from an operator token kind and its operands.
    ///
    /// Fails with `MalformedTreeError` when `kind` is not an operator, or when the number of
    /// `operands` does not match the arity of the operator.
    pub fn from_operator(
        kind: TokenKind,
        operands: Vec<Expression>,
    ) -> Result<Expression, MalformedTreeError> {
        let expected = kind.arity().unwrap_or(0);
        let error = MalformedTreeError {
            operator: kind,
            expected,
            found: operands.len(),
        };
        if expected == 0 || operands.len() != expected {
            return Err(error);
        }
        let mut operands = operands.into_iter();
        match (kind, operands.next(), operands.next()) {
            (TokenKind::Not, Some(inner), None) => Ok(Self::mk_not(inner)),
            (TokenKind::And, Some(l), Some(r)) => Ok(Self::mk_and(l, r)),
            (TokenKind::Or, Some(l), Some(r)) => Ok(Self::mk_or(l, r)),
            (TokenKind::Implication, Some(l), Some(r)) => Ok(Self::mk_implies(l, r)),
            (TokenKind::Equivalency, Some(l), Some(r)) => Ok(Self::mk_equivalent(l, r)),
            _ => Err(error),
        }
    }
}

/// Evaluation and inspection.
impl Expression {
    /// Evaluate this expression in the given `assignment`, interpreted using `order`.
    ///
    /// Fails with `EvalError::UnboundVariable` if the expression uses a variable that is not
    /// part of the `order` or has no value in the `assignment`.
    pub fn eval_in(
        &self,
        order: &VariableOrder,
        assignment: &Assignment,
    ) -> Result<bool, EvalError> {
        self.eval_recursive(order, assignment, &mut None)
    }

    /// Same as `eval_in`, but also returns the values of all tagged groups.
    ///
    /// Both operands of every binary operator are always evaluated, hence the result contains
    /// one value for every label reported by `tagged_labels`, in the same order.
    pub fn eval_tagged(
        &self,
        order: &VariableOrder,
        assignment: &Assignment,
    ) -> Result<(bool, TaggedValues), EvalError> {
        let mut tagged = TaggedValues::default();
        let value = self.eval_recursive(order, assignment, &mut Some(&mut tagged))?;
        Ok((value, tagged))
    }

    /// **(internal)** Post-order evaluation. Tagged groups record their value after
    /// their inner expression is evaluated.
    fn eval_recursive(
        &self,
        order: &VariableOrder,
        assignment: &Assignment,
        tagged: &mut Option<&mut TaggedValues>,
    ) -> Result<bool, EvalError> {
        match self {
            Value(value) => Ok(*value),
            Variable(name) => order
                .index_of(name)
                .and_then(|index| assignment.get(index))
                .ok_or_else(|| EvalError::UnboundVariable { name: name.clone() }),
            Not(inner) => Ok(!inner.eval_recursive(order, assignment, tagged)?),
            And(l, r) => Self::eval_operands(l, r, order, assignment, tagged).map(|(l, r)| l && r),
            Or(l, r) => Self::eval_operands(l, r, order, assignment, tagged).map(|(l, r)| l || r),
            Implies(l, r) => {
                Self::eval_operands(l, r, order, assignment, tagged).map(|(l, r)| !(l && !r))
            }
            Equivalent(l, r) => {
                Self::eval_operands(l, r, order, assignment, tagged).map(|(l, r)| l == r)
            }
            Group {
                inner,
                tagged: is_tagged,
                label,
            } => {
                let value = inner.eval_recursive(order, assignment, tagged)?;
                if *is_tagged {
                    if let Some(tagged) = tagged {
                        tagged.push(label, value);
                    }
                }
                Ok(value)
            }
        }
    }

    /// **(internal)** Evaluate both operands of a binary operator, left first.
    fn eval_operands(
        left: &Expression,
        right: &Expression,
        order: &VariableOrder,
        assignment: &Assignment,
        tagged: &mut Option<&mut TaggedValues>,
    ) -> Result<(bool, bool), EvalError> {
        let left = left.eval_recursive(order, assignment, tagged)?;
        let right = right.eval_recursive(order, assignment, tagged)?;
        Ok((left, right))
    }

    /// Labels of all tagged groups, in the order in which they become table columns:
    /// operands before the operator, left before right, inner groups before outer groups.
    ///
    /// Duplicate labels are preserved.
    pub fn tagged_labels(&self) -> Vec<&str> {
        let mut labels = Vec::new();
        self.push_tagged_labels(&mut labels);
        labels
    }

    fn push_tagged_labels<'a>(&'a self, labels: &mut Vec<&'a str>) {
        match self {
            Value(_) | Variable(_) => {}
            Not(inner) => inner.push_tagged_labels(labels),
            And(l, r) | Or(l, r) | Implies(l, r) | Equivalent(l, r) => {
                l.push_tagged_labels(labels);
                r.push_tagged_labels(labels);
            }
            Group {
                inner,
                tagged,
                label,
            } => {
                inner.push_tagged_labels(labels);
                if *tagged {
                    labels.push(label);
                }
            }
        }
    }

    /// The set of all variable names used in this expression.
    pub fn variables(&self) -> FxHashSet<String> {
        let mut variables = FxHashSet::default();
        self.push_variables(&mut variables);
        variables
    }

    fn push_variables(&self, variables: &mut FxHashSet<String>) {
        match self {
            Value(_) => {}
            Variable(name) => {
                variables.insert(name.clone());
            }
            Not(inner) | Group { inner, .. } => inner.push_variables(variables),
            And(l, r) | Or(l, r) | Implies(l, r) | Equivalent(l, r) => {
                l.push_variables(variables);
                r.push_variables(variables);
            }
        }
    }

    /// Compact source text of this expression: no whitespace, both kinds of groups written
    /// using `(...)`. Other parentheses are only added where the operator priority requires
    /// them, so parsing the text gives an expression with the same meaning.
    ///
    /// For a parsed expression, this is exactly the input with whitespace removed and
    /// `[`/`]` replaced by `(`/`)`.
    pub fn source_text(&self) -> String {
        match self {
            Value(value) => (if *value { "1" } else { "0" }).to_string(),
            Variable(name) => name.clone(),
            Not(inner) => format!("!{}", inner.source_operand(self.priority())),
            And(l, r) | Or(l, r) | Implies(l, r) | Equivalent(l, r) => {
                let symbol = match self {
                    And(..) => "&",
                    Or(..) => "|",
                    Implies(..) => "=>",
                    _ => "<=>",
                };
                // Binary operators split at their leftmost occurrence, so only the right
                // operand can repeat the same operator without parentheses.
                format!(
                    "{}{}{}",
                    l.source_operand(self.priority() + 1),
                    symbol,
                    r.source_operand(self.priority())
                )
            }
            Group { inner, .. } => format!("({})", inner.source_text()),
        }
    }

    /// **(internal)** Source text of an operand, in parentheses if it binds looser than
    /// `min_priority`.
    fn source_operand(&self, min_priority: u8) -> String {
        if self.priority() < min_priority {
            format!("({})", self.source_text())
        } else {
            self.source_text()
        }
    }

    /// **(internal)** Binding strength of the root of this expression.
    fn priority(&self) -> u8 {
        match self {
            Equivalent(..) => 1,
            Implies(..) => 2,
            Or(..) => 3,
            And(..) => 4,
            Not(..) => 5,
            Value(_) | Variable(_) | Group { .. } => 6,
        }
    }

    /// **(internal)** Write a binary operator without the outer parentheses.
    fn fmt_bare(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            And(l, r) => write!(f, "{} & {}", l, r),
            Or(l, r) => write!(f, "{} | {}", l, r),
            Implies(l, r) => write!(f, "{} => {}", l, r),
            Equivalent(l, r) => write!(f, "{} <=> {}", l, r),
            _ => write!(f, "{}", self),
        }
    }
}

/// Fully parenthesised form of the expression. Untagged groups are implied by the
/// parentheses of binary operators, tagged groups are written as `[...]`.
impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Value(value) => write!(f, "{}", if *value { 1 } else { 0 }),
            Variable(name) => write!(f, "{}", name),
            Not(inner) => write!(f, "!{}", inner),
            And(..) | Or(..) | Implies(..) | Equivalent(..) => {
                write!(f, "(")?;
                self.fmt_bare(f)?;
                write!(f, ")")
            }
            Group {
                inner,
                tagged: true,
                ..
            } => {
                write!(f, "[")?;
                inner.fmt_bare(f)?;
                write!(f, "]")
            }
            Group { inner, .. } => write!(f, "{}", inner),
        }
    }
}
