use crate::report::RunSummary;

fn column_label(idx: Option<usize>) -> String {
    match idx {
        Some(i) => format!("column {i}"),
        None => "not found".to_string(),
    }
}

pub fn render_summary_text(summary: &RunSummary) -> String {
    let mut out = String::new();

    out.push_str("Expression Table Filter Report\n");
    out.push_str("==============================\n\n");

    out.push_str("1. Input\n");
    out.push_str(&format!("File: {}\n", summary.input_path));
    out.push_str(&format!(
        "Dimensions: {} rows x {} columns\n\n",
        summary.n_rows, summary.n_columns
    ));

    out.push_str("2. Resolved columns\n");
    out.push_str(&format!("padj: {}\n", column_label(summary.padj_column)));
    out.push_str(&format!(
        "symbol: {}\n",
        column_label(summary.symbol_column)
    ));
    out.push_str(&format!(
        "description: {}\n\n",
        column_label(summary.description_column)
    ));

    out.push_str("3. Filters\n");
    if summary.filters_enabled.is_empty() {
        out.push_str("Enabled: none\n");
    } else {
        out.push_str(&format!(
            "Enabled: {}\n",
            summary.filters_enabled.join(", ")
        ));
    }
    out.push_str(&format!(
        "Visible rows: {} of {}\n",
        summary.n_visible, summary.n_rows
    ));
    out.push_str(&format!("Selected rows: {}\n", summary.n_selected));

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
