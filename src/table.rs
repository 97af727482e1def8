use tracing::debug;

use crate::input::{parse_delimited, InputError};

// Canonical row identifier position within a parsed data row. Keys are
// assumed unique per loaded table; colliding keys merge in the selection set.
pub const ROW_KEY_COLUMN: usize = 1;

#[derive(Debug, Clone)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_text(text: &str) -> Result<Table, InputError> {
        let mut rows = parse_delimited(text);
        if rows.is_empty() {
            return Err(InputError::EmptyInput(
                "parsed table has no rows".to_string(),
            ));
        }

        let header = rows
            .remove(0)
            .into_iter()
            .map(|h| h.trim().to_string())
            .collect::<Vec<_>>();
        for row in &mut rows {
            for field in row.iter_mut() {
                let trimmed = field.trim();
                if trimmed.len() != field.len() {
                    let owned = trimmed.to_string();
                    *field = owned;
                }
            }
        }

        debug!(
            n_columns = header.len(),
            n_rows = rows.len(),
            "table parsed"
        );
        Ok(Table { header, rows })
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.header.len()
    }
}

pub fn row_key(row: &[String]) -> &str {
    row.get(ROW_KEY_COLUMN).map(String::as_str).unwrap_or("")
}

#[cfg(test)]
#[path = "../tests/src_inline/table.rs"]
mod tests;
