//! Cross-strand deduplication of place identifiers.
//!
//! One [`PlaceCollector`] is threaded through every strand of a discovery
//! run. The first strand to offer an identifier owns its position in the
//! output; later offers of the same identifier are dropped.

use std::collections::HashSet;

use crate::types::PlaceSummary;

/// Per-page accounting returned by [`PlaceCollector::offer_page`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageTally {
    pub received: usize,
    pub added: usize,
    pub duplicates: usize,
}

/// Ordered set of unique place summaries.
///
/// `places` and `seen` always hold the same identifiers.
#[derive(Debug, Default)]
pub struct PlaceCollector {
    seen: HashSet<String>,
    places: Vec<PlaceSummary>,
}

impl PlaceCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `summary` if its identifier has not been seen. Returns `true`
    /// when it was appended.
    pub fn offer(&mut self, summary: PlaceSummary) -> bool {
        if self.seen.contains(&summary.place_id) {
            return false;
        }
        self.seen.insert(summary.place_id.clone());
        self.places.push(summary);
        true
    }

    /// Offers every summary of one page, in page order.
    pub fn offer_page(&mut self, summaries: Vec<PlaceSummary>) -> PageTally {
        let mut tally = PageTally {
            received: summaries.len(),
            ..PageTally::default()
        };
        for summary in summaries {
            if self.offer(summary) {
                tally.added += 1;
            } else {
                tally.duplicates += 1;
            }
        }
        tally
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    #[must_use]
    pub fn into_places(self) -> Vec<PlaceSummary> {
        self.places
    }
}
