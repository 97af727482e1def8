use std::collections::HashSet;

// Explicit per-row choices made by the user. Lives as long as the loaded
// table; re-filtering never touches it.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    keys: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> SelectionSet {
        SelectionSet::default()
    }

    pub fn toggle(&mut self, key: &str, included: bool) {
        if included {
            self.keys.insert(key.to_string());
        } else {
            self.keys.remove(key);
        }
    }

    pub fn select_all<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            self.keys.insert(key.into());
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/selection.rs"]
mod tests;
