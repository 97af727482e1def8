use thiserror::Error;

pub mod boxplot;
pub mod heatmap;
pub mod volcano;

pub use boxplot::{extract_box_plot, BoxPlotValues};
pub use heatmap::{build_heatmap, HeatmapMatrix};
pub use volcano::{build_volcano, VolcanoPoint, VolcanoSeries};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("required column not found: {0}")]
    ColumnMissing(&'static str),
    #[error("no rows selected")]
    NoSelection,
    #[error("no WT / KO group columns found")]
    NoGroupColumns,
    #[error("gene not found: {0}")]
    GeneNotFound(String),
}

// Strict numeric cell parsing: anything that is not a finite number after a
// full-string parse is missing, never zero.
pub(crate) fn parse_cell(row: &[String], idx: usize) -> Option<f64> {
    let v = row.get(idx)?.trim().parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}
