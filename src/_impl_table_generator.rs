use crate::errors::TableError;
use crate::expression::Expression;
use crate::{Assignment, TableContent, TableGenerator, VariableOrder, RESULT_COLUMN};
use fxhash::FxHashSet;
use log::debug;
use std::mem::size_of;

/// Generate the truth table of `expression` using the default `TableGenerator`, which only
/// applies the limit given by `max_table_variables`.
///
/// The `variables` should be the set returned by the parser for the same expression.
pub fn generate_table(
    expression: &Expression,
    variables: &FxHashSet<String>,
) -> Result<TableContent, TableError> {
    TableGenerator::new().generate(expression, variables)
}

/// The largest number of variables for which the rows of a table can still be addressed
/// in memory on this platform.
pub fn max_table_variables() -> usize {
    let row_size = size_of::<Vec<u8>>();
    let mut result = 0;
    while result + 1 < usize::BITS as usize {
        let rows = 1usize << (result + 1);
        match rows.checked_mul(row_size) {
            Some(bytes) if bytes <= isize::MAX as usize => result += 1,
            _ => break,
        }
    }
    result
}

impl TableGenerator {
    /// Create a generator without a variable limit (only `max_table_variables` applies).
    pub fn new() -> TableGenerator {
        TableGenerator {
            variable_limit: None,
        }
    }

    /// Change the maximal number of variables (see also `DEFAULT_VARIABLE_LIMIT`). Limits
    /// above `max_table_variables` are lowered to it.
    pub fn with_variable_limit(mut self, limit: Option<usize>) -> TableGenerator {
        self.variable_limit = limit;
        self
    }

    pub fn variable_limit(&self) -> Option<usize> {
        self.variable_limit
    }

    /// **(internal)** Fail if a table with `num_vars` variables should not be generated.
    fn check_variable_count(&self, num_vars: usize) -> Result<(), TableError> {
        let hard_limit = max_table_variables();
        let limit = self.variable_limit.unwrap_or(hard_limit).min(hard_limit);
        if num_vars > limit {
            Err(TableError::TooManyVariables {
                count: num_vars,
                limit,
            })
        } else {
            Ok(())
        }
    }

    /// Generate the table content of `expression` over the given `variables`.
    ///
    /// Rows enumerate all assignments of the variables (sorted case-insensitively) with
    /// the first variable as the most significant bit and `true` preceding `false`.
    pub fn generate(
        &self,
        expression: &Expression,
        variables: &FxHashSet<String>,
    ) -> Result<TableContent, TableError> {
        let order = VariableOrder::new(variables);
        let num_vars = order.num_vars();
        self.check_variable_count(num_vars)?;

        let labels = expression.tagged_labels();
        let mut header: Vec<String> = order.names().to_vec();
        header.extend(labels.iter().map(|label| label.to_string()));
        header.push(RESULT_COLUMN.to_string());

        let num_rows = 1usize << num_vars;
        debug!(
            "Generating {} rows with {} column(s) for `{}`.",
            num_rows,
            header.len(),
            expression
        );
        let rows = generate_rows(expression, &order, num_rows)?;

        if cfg!(feature = "shields_up") {
            if let Some(row) = rows.iter().find(|row| row.len() != header.len()) {
                return Err(TableError::ColumnMismatch {
                    expected: header.len(),
                    found: row.len(),
                });
            }
        }

        Ok(TableContent { header, rows })
    }
}

impl Default for TableGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// **(internal)** Evaluate one table row: variable values, tagged group values, result.
fn evaluate_row(
    expression: &Expression,
    order: &VariableOrder,
    assignment: &Assignment,
) -> Result<Vec<u8>, TableError> {
    if cfg!(feature = "shields_up") && assignment.num_vars() != order.num_vars() {
        return Err(TableError::AssignmentMismatch {
            expected: order.num_vars(),
            found: assignment.num_vars(),
        });
    }
    let (result, tagged) = expression.eval_tagged(order, assignment)?;
    let mut row: Vec<u8> = assignment.values().iter().map(|v| u8::from(*v)).collect();
    row.extend(tagged.values().into_iter().map(u8::from));
    row.push(u8::from(result));
    Ok(row)
}

/// **(internal)** Allocate space for all rows up front, so that a table which does not fit
/// into memory is reported as an error.
#[cfg(not(feature = "parallel"))]
fn reserve_rows(num_rows: usize) -> Result<Vec<Vec<u8>>, TableError> {
    let mut rows = Vec::new();
    rows.try_reserve_exact(num_rows)
        .map_err(|_| TableError::OutOfMemory { rows: num_rows })?;
    Ok(rows)
}

#[cfg(not(feature = "parallel"))]
fn generate_rows(
    expression: &Expression,
    order: &VariableOrder,
    num_rows: usize,
) -> Result<Vec<Vec<u8>>, TableError> {
    let mut rows = reserve_rows(num_rows)?;
    for assignment in crate::AssignmentIterator::new(order.num_vars()) {
        rows.push(evaluate_row(expression, order, &assignment)?);
    }
    Ok(rows)
}

/// Every row is computed from its own index, so the indexed parallel iterator writes each
/// row into its canonical position.
#[cfg(feature = "parallel")]
fn generate_rows(
    expression: &Expression,
    order: &VariableOrder,
    num_rows: usize,
) -> Result<Vec<Vec<u8>>, TableError> {
    use rayon::prelude::*;
    let num_vars = order.num_vars();
    (0..num_rows)
        .into_par_iter()
        .map(|row| evaluate_row(expression, order, &Assignment::from_row_index(num_vars, row)))
        .collect()
}
