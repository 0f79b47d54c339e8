use thiserror::Error;

use crate::config::ReportConfig;

/// Printed in place of the report when the range holds no rows.
pub const NO_DATA: &str = "No data found.";

/// The rows cannot be projected onto the selected columns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// A selected column lies beyond the end of a row.
    #[error("row {row} has {width} columns, cannot select column {column}.")]
    MissingColumn {
        /// Zero-based row number.
        row: usize,
        /// The selected column index.
        column: u32,
        /// The number of cells in the row.
        width: usize,
    },
}

/// Projects rows onto a list of column indices.
///
/// ### Example
/// ```
/// use column_report::Report;
///
/// let report = Report::new("Name, Major", vec![0, 2]);
/// let rows = vec![vec!["Alexandra".to_string(), "Female".to_string(), "English".to_string()]];
///
/// assert_eq!(
///     report.render(&rows).unwrap(),
///     vec!["Name, Major:".to_string(), "Alexandra, English".to_string()]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    header: String,
    indices: Vec<u32>,
}

impl Report {
    /// Create a report printing `header`, then the columns at `indices` (in that order) of each row.
    pub fn new(header: impl Into<String>, indices: Vec<u32>) -> Self {
        Self {
            header: header.into(),
            indices,
        }
    }

    /// Render the report lines.
    ///
    /// Without any rows, this is the single line [`NO_DATA`].
    pub fn render(&self, rows: &[Vec<String>]) -> Result<Vec<String>, ReportError> {
        if rows.is_empty() {
            return Ok(vec![NO_DATA.to_string()]);
        }

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(format!("{}:", self.header));

        for (row, cells) in rows.iter().enumerate() {
            let selected = self
                .indices
                .iter()
                .map(|column| {
                    cells
                        .get(*column as usize)
                        .map(String::as_str)
                        .ok_or(ReportError::MissingColumn {
                            row,
                            column: *column,
                            width: cells.len(),
                        })
                })
                .collect::<Result<Vec<&str>, ReportError>>()?;
            lines.push(selected.join(", "));
        }

        Ok(lines)
    }
}

impl From<&ReportConfig> for Report {
    fn from(config: &ReportConfig) -> Self {
        Report::new(config.report_header.clone(), config.report_indices.clone())
    }
}

/// Split tab separated text into rows of cells.
/// Blank lines are skipped.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}
