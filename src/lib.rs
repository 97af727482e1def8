pub mod filter;
pub mod geneset;
pub mod input;
pub mod report;
pub mod selection;
pub mod semantics;
pub mod session;
pub mod table;
pub mod views;

pub use filter::{FilterKind, FilterState, PADJ_CUTOFF};
pub use geneset::{GeneSet, GeneSetCache, GeneSetConfig, GeneSetError, GeneSetSource};
pub use input::InputError;
pub use selection::SelectionSet;
pub use semantics::{ColumnSemantics, GroupColumns};
pub use session::Session;
pub use table::{Table, ROW_KEY_COLUMN};
pub use views::{BoxPlotValues, HeatmapMatrix, ViewError, VolcanoSeries};
