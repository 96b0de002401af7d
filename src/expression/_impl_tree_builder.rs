//!
//! Tree building proceeds recursively over spans of the token sequence. A span is first
//! checked for an enclosing bracket pair, which is stripped and turned into a group. Then,
//! operators are tried in the order of their priority: `<=>`, `=>`, `|`, `&` and `!`.
//! The leftmost occurrence of the operator outside of any brackets splits the span into
//! operands, which are built by the same procedure. The remaining single-token spans
//! are constants and variables.
//!
//! Every span adds one level of recursion, so the nesting depth is bounded by `MAX_DEPTH`.

use super::Expression;
use crate::errors::SyntaxError;
use crate::{Token, TokenKind, MAX_DEPTH};
use fxhash::FxHashSet;
use log::{debug, trace};

/// **(internal)** Operators ordered from the loosest to the tightest binding.
const OPERATOR_PRIORITY: [TokenKind; 5] = [
    TokenKind::Equivalency,
    TokenKind::Implication,
    TokenKind::Or,
    TokenKind::And,
    TokenKind::Not,
];

/// Build an `Expression` tree from a sequence of `tokens`. Also returns the set of all
/// variable names that appear in the expression.
pub(crate) fn build(tokens: &[Token]) -> Result<(Expression, FxHashSet<String>), SyntaxError> {
    check_brackets(tokens)?;
    let mut builder = TreeBuilder {
        tokens,
        variables: FxHashSet::default(),
        depth: 0,
    };
    let expression = builder.build_span(0, tokens.len())?;
    debug!(
        "Built expression `{}` with {} variable(s).",
        expression,
        builder.variables.len()
    );
    Ok((expression, builder.variables))
}

/// **(internal)** Verify that every closing bracket matches the kind of the last unclosed
/// opening bracket and that all brackets are closed.
fn check_brackets(tokens: &[Token]) -> Result<(), SyntaxError> {
    let mut stack: Vec<&Token> = Vec::new();
    for token in tokens {
        if token.kind().is_opening_bracket() {
            stack.push(token);
        } else if token.kind().is_closing_bracket() {
            match stack.pop() {
                Some(open) if open.kind().matching_bracket() == Some(token.kind()) => {}
                _ => {
                    return Err(SyntaxError::UnbalancedBracket {
                        position: token.position(),
                    })
                }
            }
        }
    }
    if let Some(open) = stack.pop() {
        Err(SyntaxError::UnbalancedBracket {
            position: open.position(),
        })
    } else {
        Ok(())
    }
}

/// **(internal)** Reconstruct the source text of the given span, with `[`/`]` replaced
/// by `(`/`)`.
fn span_label(span: &[Token]) -> String {
    span.iter()
        .map(|token| match token.kind() {
            TokenKind::LBracket => "(",
            TokenKind::RBracket => ")",
            _ => token.text(),
        })
        .collect()
}

/// **(internal)** Holds the tokens and the variables collected while building, together
/// with the current nesting depth.
struct TreeBuilder<'a> {
    tokens: &'a [Token],
    variables: FxHashSet<String>,
    depth: usize,
}

impl TreeBuilder<'_> {
    fn build_span(&mut self, start: usize, end: usize) -> Result<Expression, SyntaxError> {
        if self.depth >= MAX_DEPTH {
            return Err(SyntaxError::TooDeep {
                position: self.position_at(start),
                limit: MAX_DEPTH,
            });
        }
        self.depth += 1;
        let result = self.build_span_content(start, end);
        self.depth -= 1;
        result
    }

    fn build_span_content(&mut self, start: usize, end: usize) -> Result<Expression, SyntaxError> {
        trace!(
            "Building span {}..{}: `{}`",
            start,
            end,
            span_label(&self.tokens[start..end])
        );
        if let Some(group) = self.try_build_group(start, end)? {
            Ok(group)
        } else if let Some(operator) = self.try_build_operator(start, end)? {
            Ok(operator)
        } else {
            self.build_leaf(start, end)
        }
    }

    /// Strip an enclosing `(...)` or `[...]` pair and build a group from its content.
    fn try_build_group(
        &mut self,
        start: usize,
        end: usize,
    ) -> Result<Option<Expression>, SyntaxError> {
        let tokens = self.tokens;
        let span = &tokens[start..end];
        let tagged = if is_enclosed(span, TokenKind::LParen, TokenKind::RParen) {
            false
        } else if is_enclosed(span, TokenKind::LBracket, TokenKind::RBracket) {
            true
        } else {
            return Ok(None);
        };
        let label = span_label(&span[1..(span.len() - 1)]);
        let inner = self.build_span(start + 1, end - 1)?;
        Ok(Some(Expression::mk_labelled_group(inner, tagged, label)))
    }

    /// Split the span at the leftmost top-level occurrence of the loosest operator.
    fn try_build_operator(
        &mut self,
        start: usize,
        end: usize,
    ) -> Result<Option<Expression>, SyntaxError> {
        for operator in OPERATOR_PRIORITY.iter().cloned() {
            if let Some(index) = self.index_of_top_level(start, end, operator) {
                let position = self.tokens[index].position();
                let operands = if operator == TokenKind::Not {
                    if index != start {
                        return Err(SyntaxError::InvalidNotSyntax { position });
                    }
                    vec![self.build_span(index + 1, end)?]
                } else {
                    if index == start {
                        return Err(SyntaxError::InvalidOperatorSyntax { operator, position });
                    }
                    vec![
                        self.build_span(start, index)?,
                        self.build_span(index + 1, end)?,
                    ]
                };
                return Ok(Some(Expression::from_operator(operator, operands)?));
            }
        }
        Ok(None)
    }

    /// Constants and variables. Anything else remaining at this point is invalid.
    fn build_leaf(&mut self, start: usize, end: usize) -> Result<Expression, SyntaxError> {
        let tokens = self.tokens;
        let span = &tokens[start..end];
        match span {
            [] => Err(SyntaxError::EmptySpan {
                position: self.position_at(start),
            }),
            [token] if token.kind() == TokenKind::Value => {
                Ok(Expression::mk_value(token.text() == "1"))
            }
            [token] if token.kind() == TokenKind::Variable => {
                self.variables.insert(token.text().to_string());
                Ok(Expression::mk_variable(token.text()))
            }
            _ => Err(SyntaxError::UnexpectedTokens {
                position: self.position_at(start),
                text: span_label(span),
            }),
        }
    }

    /// **(internal)** Index of the first `operator` token in the span which is not nested
    /// in any brackets.
    fn index_of_top_level(&self, start: usize, end: usize, operator: TokenKind) -> Option<usize> {
        let mut depth = 0;
        for index in start..end {
            let kind = self.tokens[index].kind();
            if kind.is_opening_bracket() {
                depth += 1;
            } else if kind.is_closing_bracket() {
                depth -= 1;
            } else if kind == operator && depth == 0 {
                return Some(index);
            }
        }
        None
    }

    /// **(internal)** Position of the token at `index` or the end of the input if there is
    /// no such token.
    fn position_at(&self, index: usize) -> usize {
        if let Some(token) = self.tokens.get(index) {
            token.position()
        } else if let Some(last) = self.tokens.last() {
            last.position() + last.text().chars().count()
        } else {
            0
        }
    }
}

/// **(internal)** True if the whole span is wrapped in a single `open`/`close` pair, i.e.
/// the nesting returns to zero only at the last token.
fn is_enclosed(span: &[Token], open: TokenKind, close: TokenKind) -> bool {
    match (span.first(), span.last()) {
        (Some(first), Some(last))
            if span.len() >= 2 && first.kind() == open && last.kind() == close =>
        {
            let mut nest = 0;
            for (i, token) in span.iter().enumerate() {
                if token.kind() == open {
                    nest += 1;
                } else if token.kind() == close {
                    nest -= 1;
                }
                if nest == 0 && i != span.len() - 1 {
                    return false;
                }
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;
    use test_log::test;

    fn build_str(text: &str) -> Result<Expression, SyntaxError> {
        build(&tokenize(text).unwrap()).map(|(expression, _)| expression)
    }

    fn display(text: &str) -> String {
        build_str(text).unwrap().to_string()
    }

    #[test]
    fn build_operator_priority() {
        assert_eq!(
            "((((!a & !b) | !c) => !d) <=> !e)",
            display("!a & !b | !c => !d <=> !e")
        );
        assert_eq!(
            "(a <=> ((b | (c & d)) => e))",
            display("a <=> b | c & d => e")
        );
    }

    #[test]
    fn build_operator_associativity() {
        assert_eq!("(a & (b & c))", display("a & b & c"));
        assert_eq!("(a | (b | c))", display("a | b | c"));
        assert_eq!("(a => (b => c))", display("a => b => c"));
        assert_eq!("(a <=> (b <=> c))", display("a <=> b <=> c"));
    }

    #[test]
    fn build_groups() {
        assert_eq!("((a & (b | c)) => a)", display("a&(b|c)=>a"));
        assert_eq!("((a | b) & c)", display("(a | b) & c"));
        assert_eq!("!!(a | 1)", display("!!(a | 1)"));
        assert_eq!("([a | b] & [!c])", display("[a | b] & [!c]"));
        // Both groups are kept as separate nodes.
        let e = build_str("((a))").unwrap();
        assert!(matches!(
            e,
            Expression::Group { ref inner, tagged: false, .. }
                if matches!(**inner, Expression::Group { tagged: false, .. })
        ));
    }

    #[test]
    fn build_root_is_loosest_operator() {
        let e = build_str("a&(b|c)=>a").unwrap();
        assert!(matches!(e, Expression::Implies(..)));
        let e = build_str("!a&b").unwrap();
        assert!(matches!(e, Expression::And(..)));
    }

    #[test]
    fn build_tagged_group_labels() {
        let e = build_str("[a & [b | c]] | [ !0 ]").unwrap();
        assert_eq!(vec!["b|c", "a&(b|c)", "!0"], e.tagged_labels());
        // Labels of parsed groups agree with the labels of manually created groups.
        let manual = Expression::mk_group(
            Expression::mk_and(
                Expression::mk_variable("a"),
                Expression::mk_group(
                    Expression::mk_or(Expression::mk_variable("b"), Expression::mk_variable("c")),
                    true,
                ),
            ),
            true,
        );
        assert_eq!(vec!["b|c", "a&(b|c)"], manual.tagged_labels());
    }

    #[test]
    fn build_collects_variables() {
        let (_, variables) = build(&tokenize("a & (B | a) => [c]").unwrap()).unwrap();
        let mut variables: Vec<String> = variables.into_iter().collect();
        variables.sort();
        assert_eq!(vec!["B", "a", "c"], variables);
        let (_, variables) = build(&tokenize("1 | !0").unwrap()).unwrap();
        assert!(variables.is_empty());
    }

    #[test]
    fn build_values() {
        assert_eq!(Expression::mk_value(true), build_str("1").unwrap());
        assert_eq!(Expression::mk_value(false), build_str("0").unwrap());
    }

    #[test]
    fn build_invalid_operator_syntax() {
        assert_eq!(
            Err(SyntaxError::InvalidOperatorSyntax {
                operator: TokenKind::And,
                position: 2
            }),
            build_str("a&&b")
        );
        assert_eq!(
            Err(SyntaxError::InvalidOperatorSyntax {
                operator: TokenKind::Implication,
                position: 0
            }),
            build_str("=>a")
        );
        assert_eq!(Err(SyntaxError::EmptySpan { position: 2 }), build_str("a&"));
    }

    #[test]
    fn build_invalid_not_syntax() {
        assert_eq!(Err(SyntaxError::EmptySpan { position: 1 }), build_str("!"));
        assert_eq!(
            Err(SyntaxError::InvalidNotSyntax { position: 1 }),
            build_str("a!b")
        );
    }

    #[test]
    fn build_invalid_brackets() {
        assert_eq!(
            Err(SyntaxError::UnbalancedBracket { position: 0 }),
            build_str("(a")
        );
        assert_eq!(
            Err(SyntaxError::UnbalancedBracket { position: 1 }),
            build_str("a)")
        );
        assert_eq!(
            Err(SyntaxError::UnbalancedBracket { position: 2 }),
            build_str("(a]")
        );
        assert_eq!(
            Err(SyntaxError::UnbalancedBracket { position: 7 }),
            build_str("a & (b))")
        );
        assert_eq!(Err(SyntaxError::EmptySpan { position: 1 }), build_str("()"));
    }

    #[test]
    fn build_nesting_depth() {
        // Each `!` and each group is one level, the leaf is the last one.
        let deepest = format!("{}a", "!".repeat(MAX_DEPTH - 1));
        assert!(build_str(&deepest).is_ok());
        let too_deep = format!("{}a", "!".repeat(MAX_DEPTH));
        assert_eq!(
            Err(SyntaxError::TooDeep {
                position: MAX_DEPTH,
                limit: MAX_DEPTH
            }),
            build_str(&too_deep)
        );

        let negations = format!("{}a", "!".repeat(20 * MAX_DEPTH));
        assert!(matches!(
            build_str(&negations),
            Err(SyntaxError::TooDeep { .. })
        ));
        let groups = format!("{}a{}", "[(".repeat(MAX_DEPTH), ")]".repeat(MAX_DEPTH));
        assert!(matches!(
            build_str(&groups),
            Err(SyntaxError::TooDeep { .. })
        ));
        let chain = vec!["a"; 4 * MAX_DEPTH].join(" => ");
        assert!(matches!(
            build_str(&chain),
            Err(SyntaxError::TooDeep { .. })
        ));
    }

    #[test]
    fn build_invalid_shapes() {
        assert_eq!(Err(SyntaxError::EmptySpan { position: 0 }), build_str(""));
        assert_eq!(
            Err(SyntaxError::UnexpectedTokens {
                position: 0,
                text: "a(b)".to_string()
            }),
            build_str("a(b)")
        );
        assert!(matches!(
            build_str("a & 0 1"),
            Err(SyntaxError::UnexpectedTokens { position: 4, .. })
        ));
        assert!(build_str("(a)(b)").is_err());
    }
}
