use std::collections::HashSet;

use crate::input::parse_delimited;

// Gene symbols are compared exactly (case-sensitive) after normalization.
pub fn normalize_symbol(raw: &str) -> &str {
    raw.strip_prefix('\u{feff}').unwrap_or(raw).trim()
}

// A gene-list file is a single-column delimited file; the first field of
// every non-empty row is one symbol.
pub fn parse_gene_list(text: &str) -> HashSet<String> {
    let mut genes = HashSet::new();
    for row in parse_delimited(text) {
        if let Some(first) = row.first() {
            let symbol = normalize_symbol(first);
            if !symbol.is_empty() {
                genes.insert(symbol.to_string());
            }
        }
    }
    genes
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/geneset.rs"]
mod tests;
