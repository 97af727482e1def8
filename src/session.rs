use std::sync::Arc;

use tracing::info;

use crate::filter::{row_visible, FilterKind, FilterState};
use crate::geneset::{GeneSetCache, GeneSetError};
use crate::input::InputError;
use crate::selection::SelectionSet;
use crate::semantics::ColumnSemantics;
use crate::table::{row_key, Table};
use crate::views::{
    build_heatmap, build_volcano, extract_box_plot, BoxPlotValues, HeatmapMatrix, ViewError,
    VolcanoSeries,
};

// One session per loaded file. Table, column semantics, filter toggles and
// selection all live and die with it; the gene-set cache is shared across
// sessions because sets are keyed by identity, not by table.
pub struct Session {
    table: Table,
    semantics: ColumnSemantics,
    filters: FilterState,
    selection: SelectionSet,
    gene_sets: Arc<GeneSetCache>,
}

impl Session {
    pub fn load(text: &str, gene_sets: Arc<GeneSetCache>) -> Result<Session, InputError> {
        let table = Table::from_text(text)?;
        let semantics = ColumnSemantics::resolve(&table.header);
        info!(
            n_rows = table.n_rows(),
            n_columns = table.n_columns(),
            "session loaded"
        );
        Ok(Session {
            table,
            semantics,
            filters: FilterState::new(),
            selection: SelectionSet::new(),
            gene_sets,
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn semantics(&self) -> &ColumnSemantics {
        &self.semantics
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn gene_sets(&self) -> &Arc<GeneSetCache> {
        &self.gene_sets
    }

    pub fn is_visible(&self, row: &[String]) -> bool {
        row_visible(&self.filters, &self.semantics, &self.selection, row)
    }

    pub fn visible_rows(&self) -> Vec<&[String]> {
        self.table
            .rows
            .iter()
            .map(Vec::as_slice)
            .filter(|row| self.is_visible(row))
            .collect()
    }

    pub fn toggle_filter(&mut self, kind: FilterKind) -> bool {
        self.filters.toggle(kind)
    }

    // Loads the set on first use (coalesced in the cache), then flips the
    // membership filter. Returns the new enabled state.
    pub fn toggle_gene_set_filter(&mut self, key: &str) -> Result<bool, GeneSetError> {
        let set = self.gene_sets.ensure_loaded(key)?;
        Ok(self.filters.toggle_gene_set(set))
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn toggle_selection(&mut self, key: &str, included: bool) {
        self.selection.toggle(key, included);
    }

    pub fn select_all_visible(&mut self) {
        let keys = self
            .visible_rows()
            .into_iter()
            .map(|row| row_key(row).to_string())
            .collect::<Vec<_>>();
        self.selection.select_all(keys);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn volcano(&self) -> Result<VolcanoSeries, ViewError> {
        build_volcano(&self.visible_rows(), &self.table.header, &self.semantics)
    }

    pub fn heatmap(&self) -> Result<HeatmapMatrix, ViewError> {
        build_heatmap(
            &self.table.rows,
            &self.table.header,
            &self.semantics,
            &self.selection,
        )
    }

    pub fn box_plot(&self, gene: &str) -> Result<BoxPlotValues, ViewError> {
        extract_box_plot(&self.table.rows, &self.table.header, &self.semantics, gene)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/session.rs"]
mod tests;
