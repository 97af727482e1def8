use serde::Serialize;

use crate::session::Session;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool_name: String,
    pub tool_version: String,
    pub input_path: String,

    pub n_rows: usize,
    pub n_columns: usize,
    pub padj_column: Option<usize>,
    pub symbol_column: Option<usize>,
    pub description_column: Option<usize>,

    pub filters_enabled: Vec<String>,
    pub n_visible: usize,
    pub n_selected: usize,
}

impl RunSummary {
    pub fn from_session(session: &Session, input_path: &str) -> RunSummary {
        let semantics = session.semantics();
        let filters = session.filters();

        let mut filters_enabled = Vec::new();
        if filters.selection {
            filters_enabled.push("selection".to_string());
        }
        if filters.significance {
            filters_enabled.push("significance".to_string());
        }
        if filters.pseudogene {
            filters_enabled.push("pseudogene-exclusion".to_string());
        }
        for key in filters.gene_sets.keys() {
            filters_enabled.push(format!("gene-set:{key}"));
        }

        RunSummary {
            tool_name: "degtable".to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            input_path: input_path.to_string(),
            n_rows: session.table().n_rows(),
            n_columns: session.table().n_columns(),
            padj_column: semantics.padj,
            symbol_column: semantics.symbol,
            description_column: semantics.description,
            filters_enabled,
            n_visible: session.visible_rows().len(),
            n_selected: session.selection().len(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
