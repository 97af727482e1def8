use tracing::debug;

// Header vocabularies vary across DE exports; matching is case-insensitive
// and exact after trimming. First matching header wins.
const SYMBOL_NAMES: &[&str] = &["symbol", "gene", "gene_symbol"];
const DESCRIPTION_NAMES: &[&str] = &["description", "gene_name", "annotation"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnSemantics {
    pub padj: Option<usize>,
    pub symbol: Option<usize>,
    pub description: Option<usize>,
}

impl ColumnSemantics {
    pub fn resolve(header: &[String]) -> ColumnSemantics {
        let lower = header
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect::<Vec<_>>();

        let semantics = ColumnSemantics {
            padj: lower.iter().position(|h| h == "padj"),
            symbol: lower.iter().position(|h| SYMBOL_NAMES.contains(&h.as_str())),
            description: lower
                .iter()
                .position(|h| DESCRIPTION_NAMES.contains(&h.as_str())),
        };
        debug!(
            padj = ?semantics.padj,
            symbol = ?semantics.symbol,
            description = ?semantics.description,
            "column semantics resolved"
        );
        semantics
    }
}

pub fn find_log2fc_column(header: &[String]) -> Option<usize> {
    header.iter().position(|h| {
        let h = h.trim().to_lowercase();
        h.contains("log2fc") || h == "logfc" || h.contains("log2 fold")
    })
}

// Condition-group value columns, identified by header substring. Header order
// is preserved within each group; a header matching both lands in both.
#[derive(Debug, Clone, Default)]
pub struct GroupColumns {
    pub wt: Vec<usize>,
    pub ko: Vec<usize>,
}

impl GroupColumns {
    pub fn resolve(header: &[String]) -> GroupColumns {
        let mut groups = GroupColumns::default();
        for (i, h) in header.iter().enumerate() {
            let h = h.to_lowercase();
            if h.contains("wt") {
                groups.wt.push(i);
            }
            if h.contains("ko") {
                groups.ko.push(i);
            }
        }
        groups
    }

    pub fn is_empty(&self) -> bool {
        self.wt.is_empty() && self.ko.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/semantics.rs"]
mod tests;
