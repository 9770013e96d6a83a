//! Tabular blocks with a fixed header row
//!
//! The header count is fixed when the table is created. Rows are checked
//! against it on insertion, so rendering never sees a ragged table.

use serde::{Deserialize, Serialize};

use crate::component::TexComponent;
use crate::error::{BuildError, Result};

/// Alignment used when none is given
pub const DEFAULT_ALIGN: &str = "c";

fn default_align() -> String {
    DEFAULT_ALIGN.to_string()
}

/// A `tabular` environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableRepr")]
pub struct Table {
    headers: Vec<String>,
    align: String,
    rows: Vec<Vec<String>>,
}

/// Unchecked serialized shape of a [`Table`]
#[derive(Deserialize)]
struct TableRepr {
    headers: Vec<String>,
    #[serde(default = "default_align")]
    align: String,
    #[serde(default)]
    rows: Vec<Vec<String>>,
}

impl TryFrom<TableRepr> for Table {
    type Error = BuildError;

    fn try_from(repr: TableRepr) -> Result<Self> {
        let mut table = Table::with_align(repr.headers, repr.align);
        for row in repr.rows {
            table.add_row(row)?;
        }
        Ok(table)
    }
}

impl Table {
    /// Create a centered table with the given headers
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_align(headers, DEFAULT_ALIGN)
    }

    /// Create a table with an explicit column alignment
    pub fn with_align<I, S>(headers: I, align: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            align: align.into(),
            rows: Vec::new(),
        }
    }

    /// Append a data row.
    ///
    /// Fails with [`BuildError::LengthMismatch`] unless the row has exactly
    /// one cell per header; the table is unchanged on error.
    pub fn add_row<I, S>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        if row.len() != self.headers.len() {
            return Err(BuildError::LengthMismatch {
                expected: self.headers.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn align(&self) -> &str {
        &self.align
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Column spec: the alignment once per header, `|`-separated
    pub fn column_spec(&self) -> String {
        vec![self.align.as_str(); self.headers.len()].join("|")
    }
}

impl TexComponent for Table {
    fn render(&self) -> String {
        let header_row = format!("{} \\\\ \\hline", self.headers.join(" & "));
        let body_rows = self
            .rows
            .iter()
            .map(|row| format!("{} \\\\", row.join(" & ")))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "\\begin{{tabular}}{{{}}}\n\\hline {} \n{}\n\\end{{tabular}}\n",
            self.column_spec(),
            header_row,
            body_rows
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_render() {
        let mut table = Table::new(["Header 1", "Header 2"]);
        table.add_row(["Cell 1", "Cell 2"]).unwrap();
        table.add_row(["Cell 3", "Cell 4"]).unwrap();
        assert_eq!(
            table.render(),
            "\\begin{tabular}{c|c}\n\\hline Header 1 & Header 2 \\\\ \\hline \nCell 1 & Cell 2 \\\\\nCell 3 & Cell 4 \\\\\n\\end{tabular}\n"
        );
    }

    #[test]
    fn test_column_spec_repeats_alignment() {
        assert_eq!(Table::with_align(["a", "b", "c"], "l").column_spec(), "l|l|l");
        // Multi-character alignments are repeated as a unit
        assert_eq!(Table::with_align(["a", "b"], "cc").column_spec(), "cc|cc");
    }

    #[test]
    fn test_add_row_length_mismatch() {
        let mut table = Table::new(["a", "b"]);
        let err = table.add_row(["only one"]).unwrap_err();
        assert_eq!(
            err,
            BuildError::LengthMismatch {
                expected: 2,
                found: 1
            }
        );
        assert!(table.rows().is_empty());
        assert!(!table.render().contains("only one"));
    }

    #[test]
    fn test_table_without_rows() {
        let table = Table::new(["x"]);
        assert_eq!(
            table.render(),
            "\\begin{tabular}{c}\n\\hline x \\\\ \\hline \n\n\\end{tabular}\n"
        );
    }

    #[test]
    fn test_deserialize_checks_rows() {
        let ok: Table = serde_json::from_str(r#"{"headers": ["a", "b"], "rows": [["1", "2"]]}"#)
            .unwrap();
        assert_eq!(ok.rows().len(), 1);
        assert_eq!(ok.align(), "c");

        let bad = serde_json::from_str::<Table>(r#"{"headers": ["a", "b"], "rows": [["1"]]}"#);
        let message = bad.unwrap_err().to_string();
        assert!(message.contains("Row length mismatch"), "{}", message);
    }
}
