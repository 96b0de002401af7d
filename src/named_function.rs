//! Named functions are expressions stored under a user-chosen name, one record per line:
//!
//! ```text
//! name:expression:variable,variable,...
//! ```
//!
//! The variable list is taken from the parser (in table column order), so a stored record
//! always describes the columns of its table.
//!
//! ```rust
//! use truth_tables::{parse, NamedFunction};
//! use truth_tables::named_function::{read_records, write_record};
//!
//! let text = "a&(b|c)=>a";
//! let function = NamedFunction::from_parsed("func", text, &parse(text).unwrap()).unwrap();
//!
//! let mut file: Vec<u8> = Vec::new();
//! write_record(&mut file, &function).unwrap();
//! assert_eq!(b"func:a&(b|c)=>a:a,b,c\n".to_vec(), file);
//!
//! let loaded = read_records(file.as_slice()).unwrap();
//! assert_eq!(vec![function], loaded);
//! ```

use crate::errors::RecordError;
use crate::{parse, ParsedExpression};
use std::fmt::{Display, Error, Formatter};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// **(internal)** Separates record fields.
const FIELD_SEPARATOR: char = ':';

/// **(internal)** Separates variable names in the last record field.
const VARIABLE_SEPARATOR: &str = ",";

/// A named Boolean expression together with the names of its variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedFunction {
    name: String,
    expression: String,
    variables: Vec<String>,
}

impl NamedFunction {
    /// Create a new record. Neither `name` nor `expression` can contain `:` or line breaks.
    /// Variables must be non-empty and also cannot contain `,`.
    pub fn new(
        name: &str,
        expression: &str,
        variables: Vec<String>,
    ) -> Result<NamedFunction, RecordError> {
        check_field("name", name)?;
        check_field("expression", expression)?;
        for variable in &variables {
            check_variable(variable)?;
        }
        Ok(NamedFunction {
            name: name.to_string(),
            expression: expression.to_string(),
            variables,
        })
    }

    /// Create a record for an expression `text` that was parsed into `parsed`. The variables
    /// are stored in table column order.
    pub fn from_parsed(
        name: &str,
        text: &str,
        parsed: &ParsedExpression,
    ) -> Result<NamedFunction, RecordError> {
        let variables = parsed.variable_order().names().to_vec();
        Self::new(name, text, variables)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Parse the stored expression.
    pub fn parse(&self) -> Result<ParsedExpression, RecordError> {
        Ok(parse(&self.expression)?)
    }

    /// **(internal)** Parse one record line. `line` is only used for error reporting.
    fn from_line(data: &str, line: usize) -> Result<NamedFunction, RecordError> {
        let mut fields = data.splitn(3, FIELD_SEPARATOR);
        let name = fields.next().unwrap_or_default();
        let expression = fields
            .next()
            .ok_or(RecordError::MissingField {
                line,
                field: "expression",
            })?;
        let variables = fields.next().ok_or(RecordError::MissingField {
            line,
            field: "variables",
        })?;
        let variables = if variables.is_empty() {
            Vec::new()
        } else {
            variables
                .split(VARIABLE_SEPARATOR)
                .map(|v| v.to_string())
                .collect()
        };
        Ok(NamedFunction {
            name: name.to_string(),
            expression: expression.to_string(),
            variables,
        })
    }
}

/// **(internal)** Reject values that would break the record format.
fn check_field(field: &'static str, value: &str) -> Result<(), RecordError> {
    if value.contains(FIELD_SEPARATOR) || value.contains('\n') || value.contains('\r') {
        Err(RecordError::InvalidField {
            field,
            value: value.to_string(),
        })
    } else {
        Ok(())
    }
}

/// **(internal)** Variables are additionally joined by `VARIABLE_SEPARATOR`.
fn check_variable(value: &str) -> Result<(), RecordError> {
    check_field("variable", value)?;
    if value.is_empty() || value.contains(VARIABLE_SEPARATOR) {
        Err(RecordError::InvalidField {
            field: "variable",
            value: value.to_string(),
        })
    } else {
        Ok(())
    }
}

/// The record line without the trailing newline.
impl Display for NamedFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(
            f,
            "{}{}{}{}{}",
            self.name,
            FIELD_SEPARATOR,
            self.expression,
            FIELD_SEPARATOR,
            self.variables.join(VARIABLE_SEPARATOR)
        )
    }
}

impl FromStr for NamedFunction {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedFunction::from_line(s.trim_end_matches(&['\r', '\n'][..]), 1)
    }
}

/// Append one newline-terminated record to the `output`.
pub fn write_record<W: Write>(output: &mut W, function: &NamedFunction) -> Result<(), RecordError> {
    writeln!(output, "{}", function)?;
    Ok(())
}

/// Read all records from the `input`. Empty lines are skipped.
pub fn read_records<R: BufRead>(input: R) -> Result<Vec<NamedFunction>, RecordError> {
    let mut result = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        result.push(NamedFunction::from_line(line, index + 1)?);
    }
    Ok(result)
}

/// Read all records with the given `name` from the `input`, in their original order.
pub fn find_by_name<R: BufRead>(input: R, name: &str) -> Result<Vec<NamedFunction>, RecordError> {
    Ok(read_records(input)?
        .into_iter()
        .filter(|function| function.name() == name)
        .collect())
}
