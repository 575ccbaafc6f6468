//! Paginated search strands and multi-strand discovery.
//!
//! A strand follows `next_page_token` until the API stops returning one,
//! the shared collector reaches the unique-result cap, or a request fails.
//! Failures end the strand, never the run: every strand produces a
//! [`StrandReport`] describing how it ended.

use std::time::Duration;

use placesweep_core::SearchStrand;

use crate::client::PlacesClient;
use crate::collector::PlaceCollector;
use crate::error::PlacesError;
use crate::types::PlaceSummary;

/// Upper bound on pages per strand. The API serves at most three pages per
/// query; the bound only matters if a token ever cycles.
pub const MAX_PAGES_PER_STRAND: usize = 10;

#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Stop once this many unique places have been collected.
    pub max_results: usize,
    /// Wait before requesting each follow-up page.
    pub page_token_delay: Duration,
}

/// Why a strand stopped requesting pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrandEnd {
    /// The last page had no continuation token.
    Exhausted,
    /// The collector held `max_results` places before the next request.
    CapReached,
    /// [`MAX_PAGES_PER_STRAND`] pages were fetched.
    PageLimit,
    /// The API answered with a non-success status.
    ApiStatus { status: String, message: String },
    /// Transport or parse failure.
    Failed(String),
}

impl StrandEnd {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, StrandEnd::ApiStatus { .. } | StrandEnd::Failed(_))
    }
}

#[derive(Debug, Clone)]
pub struct StrandReport {
    pub label: String,
    pub pages: usize,
    /// Summaries returned by the API, duplicates included.
    pub received: usize,
    pub added: usize,
    pub duplicates: usize,
    pub end: StrandEnd,
}

/// Result of running a list of strands through one collector.
#[derive(Debug)]
pub struct Discovery {
    /// Unique places in first-seen order.
    pub places: Vec<PlaceSummary>,
    /// One report per strand that was started.
    pub reports: Vec<StrandReport>,
    /// Strands left unstarted because the cap was reached.
    pub skipped_strands: usize,
}

impl Discovery {
    /// Summaries received across all strands, duplicates included.
    #[must_use]
    pub fn raw_results(&self) -> usize {
        self.reports.iter().map(|r| r.received).sum()
    }

    #[must_use]
    pub fn failed_strands(&self) -> usize {
        self.reports.iter().filter(|r| r.end.is_error()).count()
    }
}

/// Runs one strand to completion, offering every result to `collector`.
///
/// The cap is checked before each request, so a strand stops as soon as
/// the collector holds `limits.max_results` places even when a
/// continuation token is available.
pub async fn run_strand(
    client: &PlacesClient,
    strand: &SearchStrand,
    collector: &mut PlaceCollector,
    limits: &SearchLimits,
) -> StrandReport {
    let mut report = StrandReport {
        label: strand.label.clone(),
        pages: 0,
        received: 0,
        added: 0,
        duplicates: 0,
        end: StrandEnd::Exhausted,
    };
    let mut page_token: Option<String> = None;

    loop {
        if collector.len() >= limits.max_results {
            report.end = StrandEnd::CapReached;
            break;
        }
        if report.pages >= MAX_PAGES_PER_STRAND {
            tracing::warn!(strand = %strand.label, pages = report.pages, "page limit reached");
            report.end = StrandEnd::PageLimit;
            break;
        }
        if page_token.is_some() && !limits.page_token_delay.is_zero() {
            tokio::time::sleep(limits.page_token_delay).await;
        }

        let page = match client
            .text_search_page(strand, page_token.as_deref())
            .await
        {
            Ok(page) => page,
            Err(PlacesError::ApiStatus { status, message }) => {
                tracing::warn!(strand = %strand.label, %status, %message, "search API error");
                report.end = StrandEnd::ApiStatus { status, message };
                break;
            }
            Err(e) => {
                tracing::warn!(strand = %strand.label, error = %e, "search request failed");
                report.end = StrandEnd::Failed(e.to_string());
                break;
            }
        };

        report.pages += 1;
        let tally = collector.offer_page(page.results);
        report.received += tally.received;
        report.added += tally.added;
        report.duplicates += tally.duplicates;

        tracing::info!(
            strand = %strand.label,
            page = report.pages,
            received = tally.received,
            duplicates = tally.duplicates,
            total = collector.len(),
            "search page"
        );

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => {
                report.end = StrandEnd::Exhausted;
                break;
            }
        }
    }

    report
}

/// Runs `strands` in order against one shared collector.
///
/// Stops starting new strands once the collector holds
/// `limits.max_results` places.
pub async fn discover(
    client: &PlacesClient,
    strands: &[SearchStrand],
    limits: &SearchLimits,
) -> Discovery {
    let mut collector = PlaceCollector::new();
    let mut reports = Vec::with_capacity(strands.len());

    for (index, strand) in strands.iter().enumerate() {
        if collector.len() >= limits.max_results {
            let skipped_strands = strands.len() - index;
            tracing::info!(
                max_results = limits.max_results,
                skipped_strands,
                "result cap reached; skipping remaining strands"
            );
            return Discovery {
                places: collector.into_places(),
                reports,
                skipped_strands,
            };
        }

        tracing::info!(strand = %strand.label, query = %strand.query, "starting strand");
        let report = run_strand(client, strand, &mut collector, limits).await;
        reports.push(report);
    }

    Discovery {
        places: collector.into_places(),
        reports,
        skipped_strands: 0,
    }
}
