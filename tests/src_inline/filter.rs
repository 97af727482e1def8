use std::sync::Arc;

use super::*;

fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|s| s.to_string()).collect()
}

// Header: id, symbol, padj, description
fn semantics() -> ColumnSemantics {
    ColumnSemantics {
        padj: Some(2),
        symbol: Some(1),
        description: Some(3),
    }
}

fn gene_set(key: &str, genes: &[&str]) -> Arc<GeneSet> {
    Arc::new(GeneSet::from_symbols(key, genes.iter().copied()))
}

#[test]
fn test_no_filters_accepts_everything() {
    let state = FilterState::new();
    let selection = SelectionSet::new();
    assert!(!state.any_enabled());
    assert!(row_visible(
        &state,
        &semantics(),
        &selection,
        &row(&["x", "", "garbage", ""])
    ));
}

#[test]
fn test_selection_filter() {
    let mut state = FilterState::new();
    assert!(state.toggle(FilterKind::Selection));
    let mut selection = SelectionSet::new();
    selection.toggle("Foxp3", true);

    assert!(row_visible(
        &state,
        &semantics(),
        &selection,
        &row(&["G1", "Foxp3", "0.5", ""])
    ));
    assert!(!row_visible(
        &state,
        &semantics(),
        &selection,
        &row(&["G2", "Gata3", "0.001", ""])
    ));
}

#[test]
fn test_significance_boundaries() {
    let mut state = FilterState::new();
    state.toggle(FilterKind::Significance);
    let selection = SelectionSet::new();

    let visible = |padj: &str| {
        row_visible(
            &state,
            &semantics(),
            &selection,
            &row(&["G1", "Foxp3", padj, ""]),
        )
    };
    assert!(visible("0.049"));
    assert!(!visible("0.05"));
    assert!(!visible("NaN"));
    assert!(!visible("inf"));
    assert!(!visible("not-a-number"));
    assert!(!visible(""));
}

#[test]
fn test_significance_inert_without_padj_column() {
    let mut state = FilterState::new();
    state.toggle(FilterKind::Significance);
    let selection = SelectionSet::new();
    let semantics = ColumnSemantics {
        padj: None,
        ..semantics()
    };
    assert!(row_visible(
        &state,
        &semantics,
        &selection,
        &row(&["G1", "Foxp3", "0.9", ""])
    ));
}

#[test]
fn test_pseudogene_markers() {
    let mut state = FilterState::new();
    state.toggle(FilterKind::Pseudogene);
    let selection = SelectionSet::new();

    let visible = |symbol: &str, desc: &str| {
        row_visible(
            &state,
            &semantics(),
            &selection,
            &row(&["G1", symbol, "0.01", desc]),
        )
    };
    assert!(!visible("Gapdh-ps3", "glyceraldehyde"));
    assert!(!visible("Gm123", "RIKEN cDNA 2310001"));
    assert!(!visible("Gm124", "PREDICTED gene"));
    assert!(!visible("Gm125", "cDNA sequence BC0123"));
    assert!(visible("Foxp3", "forkhead box P3"));
}

#[test]
fn test_pseudogene_missing_columns_never_exclude() {
    let mut state = FilterState::new();
    state.toggle(FilterKind::Pseudogene);
    let selection = SelectionSet::new();
    let semantics = ColumnSemantics::default();
    assert!(row_visible(
        &state,
        &semantics,
        &selection,
        &row(&["G1", "anything-ps", "x", "predicted"])
    ));
}

#[test]
fn test_gene_set_token_match_is_case_sensitive() {
    let selection = SelectionSet::new();

    let mut state = FilterState::new();
    state.toggle_gene_set(gene_set("TF", &["Gata3"]));
    assert!(row_visible(
        &state,
        &semantics(),
        &selection,
        &row(&["G1", "Foxp3; Gata3", "0.5", ""])
    ));

    let mut state = FilterState::new();
    state.toggle_gene_set(gene_set("TF", &["gata3"]));
    assert!(!row_visible(
        &state,
        &semantics(),
        &selection,
        &row(&["G1", "Foxp3; Gata3", "0.5", ""])
    ));
}

#[test]
fn test_gene_set_token_separators() {
    let selection = SelectionSet::new();
    let mut state = FilterState::new();
    state.toggle_gene_set(gene_set("TF", &["Shh"]));

    for field in ["Shh", "a,Shh", "a/Shh", "a|Shh", "a Shh", "a;  Shh", "\u{feff}Shh"] {
        assert!(
            row_visible(
                &state,
                &semantics(),
                &selection,
                &row(&["G1", field, "", ""])
            ),
            "field {field:?} should match"
        );
    }
    assert!(!row_visible(
        &state,
        &semantics(),
        &selection,
        &row(&["G1", "Shh2", "", ""])
    ));
}

#[test]
fn test_gene_set_empty_symbol_field_rejected() {
    let selection = SelectionSet::new();
    let mut state = FilterState::new();
    state.toggle_gene_set(gene_set("TF", &["Shh"]));
    assert!(!row_visible(
        &state,
        &semantics(),
        &selection,
        &row(&["G1", "   ", "", ""])
    ));
}

#[test]
fn test_gene_set_inert_without_symbol_column() {
    let selection = SelectionSet::new();
    let mut state = FilterState::new();
    state.toggle_gene_set(gene_set("TF", &["Shh"]));
    let semantics = ColumnSemantics {
        symbol: None,
        ..semantics()
    };
    assert!(row_visible(
        &state,
        &semantics,
        &selection,
        &row(&["G1", "NotInSet", "", ""])
    ));
}

#[test]
fn test_two_gene_sets_both_must_match() {
    let selection = SelectionSet::new();
    let mut state = FilterState::new();
    state.toggle_gene_set(gene_set("TF", &["Gata3"]));
    state.toggle_gene_set(gene_set("Hedgehog", &["Shh"]));

    assert!(row_visible(
        &state,
        &semantics(),
        &selection,
        &row(&["G1", "Gata3; Shh", "", ""])
    ));
    assert!(!row_visible(
        &state,
        &semantics(),
        &selection,
        &row(&["G1", "Gata3", "", ""])
    ));
}

#[test]
fn test_toggle_gene_set_twice_disables() {
    let mut state = FilterState::new();
    assert!(state.toggle_gene_set(gene_set("TF", &["Gata3"])));
    assert!(!state.toggle_gene_set(gene_set("TF", &["Gata3"])));
    assert!(state.gene_sets.is_empty());
}

#[test]
fn test_conjunction_is_order_independent() {
    let mut selection = SelectionSet::new();
    selection.toggle("Foxp3", true);
    selection.toggle("Gata3-ps1", true);

    let rows = [
        row(&["G1", "Foxp3", "0.01", "forkhead box P3"]),
        row(&["G2", "Foxp3", "0.2", "forkhead box P3"]),
        row(&["G3", "Gata3-ps1", "0.001", "predicted"]),
        row(&["G4", "Gata3", "0.001", ""]),
    ];

    let mut forward = FilterState::new();
    forward.toggle(FilterKind::Selection);
    forward.toggle(FilterKind::Significance);
    forward.toggle(FilterKind::Pseudogene);

    let mut reverse = FilterState::new();
    reverse.toggle(FilterKind::Pseudogene);
    reverse.toggle(FilterKind::Significance);
    reverse.toggle(FilterKind::Selection);

    for r in &rows {
        assert_eq!(
            row_visible(&forward, &semantics(), &selection, r),
            row_visible(&reverse, &semantics(), &selection, r),
        );
    }
    // Only G1 survives all three.
    assert!(row_visible(&forward, &semantics(), &selection, &rows[0]));
    assert!(!row_visible(&forward, &semantics(), &selection, &rows[1]));
    assert!(!row_visible(&forward, &semantics(), &selection, &rows[2]));
    assert!(!row_visible(&forward, &semantics(), &selection, &rows[3]));
}

#[test]
fn test_clear_resets_everything() {
    let mut state = FilterState::new();
    state.toggle(FilterKind::Selection);
    state.toggle(FilterKind::Significance);
    state.toggle_gene_set(gene_set("TF", &["Gata3"]));
    state.clear();
    assert!(!state.any_enabled());
}
