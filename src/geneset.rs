use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::info;

use crate::input::geneset::parse_gene_list;

#[derive(Debug, Error)]
pub enum GeneSetError {
    #[error("unknown gene set: {0}")]
    UnknownSet(String),
    #[error("failed to fetch gene set {key}: {message}")]
    FetchFailed { key: String, message: String },
    #[error("gene set {0} contains no usable symbols")]
    EmptySet(String),
}

#[derive(Debug, Clone)]
pub struct GeneSetConfig {
    pub key: String,
    pub locator: String,
}

impl GeneSetConfig {
    pub fn new(key: impl Into<String>, locator: impl Into<String>) -> GeneSetConfig {
        GeneSetConfig {
            key: key.into(),
            locator: locator.into(),
        }
    }
}

#[derive(Debug)]
pub struct GeneSet {
    pub key: String,
    genes: HashSet<String>,
}

impl GeneSet {
    pub fn from_symbols<I, S>(key: impl Into<String>, symbols: I) -> GeneSet
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GeneSet {
            key: key.into(),
            genes: symbols.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.genes.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

// Retrieval is an external concern; the CLI reads files, a UI layer would
// fetch over HTTP, tests hand in strings.
pub trait GeneSetSource: Send + Sync {
    fn fetch(&self, locator: &str) -> Result<String, String>;
}

// Sets are keyed by identity, not by table, so the cache outlives any one
// loaded table. Each key is fetched and parsed at most once per cache
// lifetime; concurrent callers for an unpopulated key coalesce on the
// per-key cell instead of fetching twice.
pub struct GeneSetCache {
    locators: HashMap<String, String>,
    source: Box<dyn GeneSetSource>,
    sets: Mutex<HashMap<String, Arc<OnceCell<Arc<GeneSet>>>>>,
}

impl GeneSetCache {
    pub fn new(configs: Vec<GeneSetConfig>, source: Box<dyn GeneSetSource>) -> GeneSetCache {
        GeneSetCache {
            locators: configs
                .into_iter()
                .map(|c| (c.key, c.locator))
                .collect(),
            source,
            sets: Mutex::new(HashMap::new()),
        }
    }

    pub fn configured_keys(&self) -> Vec<String> {
        let mut keys = self.locators.keys().cloned().collect::<Vec<_>>();
        keys.sort();
        keys
    }

    pub fn get(&self, key: &str) -> Option<Arc<GeneSet>> {
        let sets = self.sets.lock().expect("gene set cache lock poisoned");
        sets.get(key).and_then(|cell| cell.get().cloned())
    }

    pub fn ensure_loaded(&self, key: &str) -> Result<Arc<GeneSet>, GeneSetError> {
        let locator = self
            .locators
            .get(key)
            .ok_or_else(|| GeneSetError::UnknownSet(key.to_string()))?
            .clone();

        let cell = {
            let mut sets = self.sets.lock().expect("gene set cache lock poisoned");
            sets.entry(key.to_string())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        // get_or_try_init runs the fetch outside the map lock; a second
        // caller for the same key blocks on the cell, not on a second fetch.
        let set = cell.get_or_try_init(|| {
            let text = self
                .source
                .fetch(&locator)
                .map_err(|message| GeneSetError::FetchFailed {
                    key: key.to_string(),
                    message,
                })?;
            let genes = parse_gene_list(&text);
            if genes.is_empty() {
                return Err(GeneSetError::EmptySet(key.to_string()));
            }
            info!(key, n_genes = genes.len(), "gene set loaded");
            Ok(Arc::new(GeneSet {
                key: key.to_string(),
                genes,
            }))
        })?;
        Ok(Arc::clone(set))
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/geneset.rs"]
mod tests;
