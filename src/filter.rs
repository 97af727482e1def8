use std::collections::BTreeMap;
use std::sync::Arc;

use crate::geneset::GeneSet;
use crate::selection::SelectionSet;
use crate::semantics::ColumnSemantics;
use crate::table::row_key;

pub const PADJ_CUTOFF: f64 = 0.05;

// Lowercased substrings that mark pseudogene-like entries.
const PSEUDO_SYMBOL_MARKER: &str = "-ps";
const PSEUDO_DESCRIPTION_MARKERS: &[&str] = &["riken cdna", "predicted", "cdna sequence"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Selection,
    Significance,
    Pseudogene,
}

// The filter vocabulary is closed: three fixed toggles plus one membership
// filter per configured gene set. Enabled filters combine by AND, so
// evaluation is commutative and order-independent.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub selection: bool,
    pub significance: bool,
    pub pseudogene: bool,
    // Presence means enabled; the loaded set rides along so evaluation
    // never touches the cache.
    pub gene_sets: BTreeMap<String, Arc<GeneSet>>,
}

impl FilterState {
    pub fn new() -> FilterState {
        FilterState::default()
    }

    // Returns the new enabled state.
    pub fn toggle(&mut self, kind: FilterKind) -> bool {
        let flag = match kind {
            FilterKind::Selection => &mut self.selection,
            FilterKind::Significance => &mut self.significance,
            FilterKind::Pseudogene => &mut self.pseudogene,
        };
        *flag = !*flag;
        *flag
    }

    pub fn toggle_gene_set(&mut self, set: Arc<GeneSet>) -> bool {
        if self.gene_sets.remove(&set.key).is_some() {
            false
        } else {
            self.gene_sets.insert(set.key.clone(), set);
            true
        }
    }

    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    pub fn any_enabled(&self) -> bool {
        self.selection || self.significance || self.pseudogene || !self.gene_sets.is_empty()
    }
}

// True iff every enabled filter accepts the row. Filters whose semantic
// column did not resolve are inert; data irregularities degrade (a cell that
// does not parse as a finite number fails the significance test) instead of
// erroring.
pub fn row_visible(
    state: &FilterState,
    semantics: &ColumnSemantics,
    selection: &SelectionSet,
    row: &[String],
) -> bool {
    if state.selection && !selection.contains(row_key(row)) {
        return false;
    }

    if state.significance {
        if let Some(idx) = semantics.padj {
            match parse_cell(row, idx) {
                Some(padj) if padj < PADJ_CUTOFF => {}
                _ => return false,
            }
        }
    }

    if state.pseudogene && is_pseudo_like(semantics, row) {
        return false;
    }

    for set in state.gene_sets.values() {
        if let Some(idx) = semantics.symbol {
            let raw = row.get(idx).map(String::as_str).unwrap_or("");
            if !symbol_matches_set(raw, set) {
                return false;
            }
        }
    }

    true
}

fn parse_cell(row: &[String], idx: usize) -> Option<f64> {
    let v = row.get(idx)?.trim().parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}

fn is_pseudo_like(semantics: &ColumnSemantics, row: &[String]) -> bool {
    let field_lower = |idx: Option<usize>| -> String {
        idx.and_then(|i| row.get(i))
            .map(|s| s.to_lowercase())
            .unwrap_or_default()
    };

    let symbol = field_lower(semantics.symbol);
    if symbol.contains(PSEUDO_SYMBOL_MARKER) {
        return true;
    }

    let description = field_lower(semantics.description);
    PSEUDO_DESCRIPTION_MARKERS
        .iter()
        .any(|marker| description.contains(marker))
}

// The raw symbol field can hold several symbols ("Foxp3; Gata3"); one exact
// token match is enough. Comparison is case-sensitive.
fn symbol_matches_set(raw: &str, set: &GeneSet) -> bool {
    let raw = crate::input::geneset::normalize_symbol(raw);
    raw.split(token_separator)
        .filter(|t| !t.is_empty())
        .any(|t| set.contains(t))
}

fn token_separator(c: char) -> bool {
    matches!(c, ';' | ',' | '/' | '|') || c.is_whitespace()
}

#[cfg(test)]
#[path = "../tests/src_inline/filter.rs"]
mod tests;
