use serde::Serialize;

use crate::semantics::{ColumnSemantics, GroupColumns};
use crate::views::{parse_cell, ViewError};

#[derive(Debug, Clone, Serialize)]
pub struct BoxPlotValues {
    pub symbol: String,
    pub wt_values: Vec<f64>,
    pub ko_values: Vec<f64>,
}

// Paired-group value extraction for one gene, over the entire table
// (selection and filters do not apply here). The symbol match is
// case-insensitive; the first matching row wins. Non-finite cells are
// dropped, not substituted.
pub fn extract_box_plot<R: AsRef<[String]>>(
    rows: &[R],
    header: &[String],
    semantics: &ColumnSemantics,
    gene: &str,
) -> Result<BoxPlotValues, ViewError> {
    let symbol_idx = semantics.symbol.ok_or(ViewError::ColumnMissing("symbol"))?;

    let groups = GroupColumns::resolve(header);
    if groups.wt.is_empty() || groups.ko.is_empty() {
        return Err(ViewError::NoGroupColumns);
    }

    let wanted = gene.trim().to_lowercase();
    let row = rows
        .iter()
        .map(AsRef::as_ref)
        .find(|row| {
            row.get(symbol_idx)
                .is_some_and(|s| s.to_lowercase() == wanted)
        })
        .ok_or_else(|| ViewError::GeneNotFound(gene.to_string()))?;

    let collect = |cols: &[usize]| -> Vec<f64> {
        cols.iter().filter_map(|&ci| parse_cell(row, ci)).collect()
    };

    Ok(BoxPlotValues {
        symbol: row[symbol_idx].clone(),
        wt_values: collect(&groups.wt),
        ko_values: collect(&groups.ko),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/views/boxplot.rs"]
mod tests;
