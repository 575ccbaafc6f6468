//! Place-type distribution counts for run summaries.

use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct TypeTally {
    counts: HashMap<String, usize>,
}

impl TypeTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every type in `types` once.
    pub fn add<I, S>(&mut self, types: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for t in types {
            *self.counts.entry(t.as_ref().to_owned()).or_insert(0) += 1;
        }
    }

    /// Number of distinct types seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[must_use]
    pub fn count(&self, place_type: &str) -> usize {
        self.counts.get(place_type).copied().unwrap_or(0)
    }

    /// The `n` most common types, highest count first; ties by name.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }

    /// Logs the `n` most common types at info level, tagged with `scope`.
    pub fn log_top(&self, n: usize, scope: &str) {
        for (place_type, count) in self.top(n) {
            tracing::info!(scope, place_type, count, "type distribution");
        }
    }
}
