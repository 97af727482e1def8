use std::sync::Arc;

use super::*;
use crate::filter::FilterKind;
use crate::geneset::{GeneSetCache, GeneSetConfig, GeneSetSource};
use crate::session::Session;

const TABLE: &str = "\
id,symbol,padj
ENS1,Foxp3,0.01
ENS2,Gata3,0.2
";

struct StaticSource;

impl GeneSetSource for StaticSource {
    fn fetch(&self, _locator: &str) -> Result<String, String> {
        Ok("Foxp3\n".to_string())
    }
}

fn make_session() -> Session {
    let cache = Arc::new(GeneSetCache::new(
        vec![GeneSetConfig::new("TF", "tf.csv")],
        Box::new(StaticSource),
    ));
    Session::load(TABLE, cache).unwrap()
}

#[test]
fn test_summary_reflects_session_state() {
    let mut session = make_session();
    session.toggle_selection("Foxp3", true);
    session.toggle_filter(FilterKind::Significance);
    session.toggle_gene_set_filter("TF").unwrap();

    let summary = RunSummary::from_session(&session, "deg.csv");
    assert_eq!(summary.tool_name, "degtable");
    assert_eq!(summary.input_path, "deg.csv");
    assert_eq!(summary.n_rows, 2);
    assert_eq!(summary.n_columns, 3);
    assert_eq!(summary.padj_column, Some(2));
    assert_eq!(summary.symbol_column, Some(1));
    assert_eq!(summary.description_column, None);
    assert_eq!(
        summary.filters_enabled,
        vec!["significance".to_string(), "gene-set:TF".to_string()]
    );
    assert_eq!(summary.n_visible, 1);
    assert_eq!(summary.n_selected, 1);
}

#[test]
fn test_summary_serializes_to_json() {
    let summary = RunSummary::from_session(&make_session(), "deg.csv");
    let json = crate::report::json::render_json(&summary).unwrap();
    assert!(json.contains("\"tool_name\": \"degtable\""));
    assert!(json.contains("\"n_rows\": 2"));
}
