use crate::TableContent;
use std::fmt::{Display, Error, Formatter};

impl TableContent {
    /// Column names: variables, tagged group labels and the result column `V`.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows (header excluded), each containing one `0`/`1` value per column.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Number of data rows (header excluded).
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.header.len()
    }

    /// Values of the whole expression, one per row.
    pub fn result_column(&self) -> Vec<bool> {
        self.rows
            .iter()
            .map(|row| row.last().map(|v| *v == 1).unwrap_or(false))
            .collect()
    }

    /// Values of the first column with the given name, one per row.
    pub fn column(&self, name: &str) -> Option<Vec<u8>> {
        let index = self.header.iter().position(|column| column == name)?;
        Some(self.rows.iter().map(|row| row[index]).collect())
    }
}

/// Render the table as a grid with columns separated by ` | ` and aligned to the width
/// of their names.
impl Display for TableContent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        writeln!(f, "{}", self.header.join(" | "))?;
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write!(f, "{}", separator.join("-+-"))?;
        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(widths.iter())
                .map(|(value, width)| format!("{:^width$}", value, width = *width))
                .collect();
            write!(f, "\n{}", cells.join(" | "))?;
        }
        Ok(())
    }
}
