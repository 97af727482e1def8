use serde::Serialize;

use crate::selection::SelectionSet;
use crate::semantics::{ColumnSemantics, GroupColumns};
use crate::table::row_key;
use crate::views::{parse_cell, ViewError};

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapMatrix {
    // Rows follow table order (selected rows only); columns are WT-group
    // headers followed by KO-group headers.
    pub matrix: Vec<Vec<f64>>,
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
}

// Row-normalized intensity matrix over the selected rows of the full table.
// Each row is z-scored against its own mean and population standard
// deviation; missing cells and sd == 0 both map to 0.
pub fn build_heatmap<R: AsRef<[String]>>(
    rows: &[R],
    header: &[String],
    semantics: &ColumnSemantics,
    selection: &SelectionSet,
) -> Result<HeatmapMatrix, ViewError> {
    if selection.is_empty() {
        return Err(ViewError::NoSelection);
    }

    let groups = GroupColumns::resolve(header);
    if groups.is_empty() {
        return Err(ViewError::NoGroupColumns);
    }

    let value_cols = groups
        .wt
        .iter()
        .chain(groups.ko.iter())
        .copied()
        .collect::<Vec<_>>();
    let column_labels = value_cols
        .iter()
        .map(|&i| header[i].clone())
        .collect::<Vec<_>>();

    let mut matrix = Vec::new();
    let mut row_labels = Vec::new();

    for row in rows {
        let row = row.as_ref();
        let key = row_key(row);
        if !selection.contains(key) {
            continue;
        }

        let raw = value_cols
            .iter()
            .map(|&ci| parse_cell(row, ci))
            .collect::<Vec<_>>();
        matrix.push(z_scores(&raw));

        let label = semantics
            .symbol
            .and_then(|i| row.get(i))
            .cloned()
            .unwrap_or_else(|| key.to_string());
        row_labels.push(label);
    }

    Ok(HeatmapMatrix {
        matrix,
        row_labels,
        column_labels,
    })
}

fn z_scores(raw: &[Option<f64>]) -> Vec<f64> {
    let valid = raw.iter().flatten().copied().collect::<Vec<_>>();
    if valid.is_empty() {
        return vec![0.0; raw.len()];
    }

    let n = valid.len() as f64;
    let mean = valid.iter().sum::<f64>() / n;
    let sd = (valid.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();

    raw.iter()
        .map(|v| match v {
            Some(v) if sd != 0.0 => (v - mean) / sd,
            _ => 0.0,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/views/heatmap.rs"]
mod tests;
