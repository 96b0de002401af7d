use crate::errors::ParseError;
use crate::expression::{build, Expression};
use crate::{tokenize, ParsedExpression, VariableOrder};
use fxhash::FxHashSet;
use std::str::FromStr;

/// Takes a `&str` and turns it into a `ParsedExpression` or `ParseError` if the string is
/// not a valid expression.
///
/// No partial results are produced: on error, neither the tree nor the variables are
/// available.
pub fn parse(text: &str) -> Result<ParsedExpression, ParseError> {
    let tokens = tokenize(text)?;
    let (expression, variables) = build(&tokens)?;
    Ok(ParsedExpression {
        expression,
        variables,
    })
}

impl ParsedExpression {
    /// The root of the parsed expression tree.
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// The set of all variable names used in the expression.
    pub fn variables(&self) -> &FxHashSet<String> {
        &self.variables
    }

    /// Variables of the expression in table column order.
    pub fn variable_order(&self) -> VariableOrder {
        VariableOrder::new(&self.variables)
    }

    pub fn into_parts(self) -> (Expression, FxHashSet<String>) {
        (self.expression, self.variables)
    }
}

impl FromStr for ParsedExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for ParsedExpression {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value)
    }
}
