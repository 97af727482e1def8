use serde::Serialize;

use crate::filter::PADJ_CUTOFF;
use crate::semantics::{find_log2fc_column, ColumnSemantics};
use crate::views::{parse_cell, ViewError};

#[derive(Debug, Clone, Serialize)]
pub struct VolcanoPoint {
    pub log2fc: f64,
    pub neg_log10_padj: f64,
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VolcanoSeries {
    pub significant: Vec<VolcanoPoint>,
    pub background: Vec<VolcanoPoint>,
    // Horizontal guide at the significance cutoff, for the caller to draw.
    pub reference_line: f64,
}

// Significance scatter over the currently visible rows. Rows with a
// non-finite fold change or p-value, or p <= 0 (log undefined), are dropped.
pub fn build_volcano<R: AsRef<[String]>>(
    rows: &[R],
    header: &[String],
    semantics: &ColumnSemantics,
) -> Result<VolcanoSeries, ViewError> {
    let padj_idx = semantics.padj.ok_or(ViewError::ColumnMissing("padj"))?;
    let lfc_idx = find_log2fc_column(header).ok_or(ViewError::ColumnMissing("log2FC"))?;

    let mut significant = Vec::new();
    let mut background = Vec::new();

    for row in rows {
        let row = row.as_ref();
        let (Some(lfc), Some(padj)) = (parse_cell(row, lfc_idx), parse_cell(row, padj_idx)) else {
            continue;
        };
        if padj <= 0.0 {
            continue;
        }

        let symbol = semantics
            .symbol
            .and_then(|i| row.get(i))
            .cloned()
            .unwrap_or_default();
        let point = VolcanoPoint {
            log2fc: lfc,
            neg_log10_padj: -padj.log10(),
            symbol,
        };
        if padj < PADJ_CUTOFF {
            significant.push(point);
        } else {
            background.push(point);
        }
    }

    Ok(VolcanoSeries {
        significant,
        background,
        reference_line: -PADJ_CUTOFF.log10(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/views/volcano.rs"]
mod tests;
