//! Batch expansion of place identifiers into CSV rows.
//!
//! Each identifier yields its own `Result`: a row on success, a
//! [`SkippedPlace`] on failure. Only a failure to write the output file
//! aborts the batch.

use std::io::Write;
use std::time::Duration;

use placesweep_core::fields::request_fields;

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::export::PlaceCsvWriter;
use crate::row::detail_row;
use crate::tally::TypeTally;

/// Progress is logged after every this-many identifiers.
const PROGRESS_EVERY: usize = 10;

#[derive(Debug, Clone)]
pub struct DetailOptions {
    pub language: String,
    pub include_coordinates: bool,
    /// Wait before each request after the first.
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPlace {
    /// 1-based position in the input list.
    pub sr: usize,
    pub place_id: String,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub requested: usize,
    pub written: usize,
    pub skipped: Vec<SkippedPlace>,
    /// Category counts across written rows.
    pub categories: TypeTally,
}

/// Fetches one place and builds its row.
///
/// Returns the row together with the place's category list so the caller
/// can tally it.
///
/// # Errors
///
/// Propagates any [`PlacesError`] from [`PlacesClient::place_details`].
pub async fn fetch_detail_row(
    client: &PlacesClient,
    sr: usize,
    place_id: &str,
    options: &DetailOptions,
) -> Result<(Vec<String>, Vec<String>), PlacesError> {
    let fields = request_fields(options.include_coordinates);
    let details = client
        .place_details(place_id, &fields, &options.language)
        .await?;
    let row = detail_row(sr, &details, options.include_coordinates);
    Ok((row, details.types.unwrap_or_default()))
}

/// Expands every identifier in `place_ids` into a row of `writer`, in input
/// order. `SR` is the identifier's 1-based position in `place_ids`, so
/// skipped identifiers leave gaps.
///
/// # Errors
///
/// Returns [`PlacesError::Csv`] or [`PlacesError::Io`] if a row cannot be
/// written. Fetch failures are recorded in [`BatchSummary::skipped`].
pub async fn expand_details<W: Write>(
    client: &PlacesClient,
    place_ids: &[String],
    options: &DetailOptions,
    writer: &mut PlaceCsvWriter<W>,
) -> Result<BatchSummary, PlacesError> {
    let total = place_ids.len();
    let mut summary = BatchSummary {
        requested: total,
        ..BatchSummary::default()
    };

    for (index, place_id) in place_ids.iter().enumerate() {
        let sr = index + 1;
        if index > 0 && !options.delay.is_zero() {
            tokio::time::sleep(options.delay).await;
        }

        match fetch_detail_row(client, sr, place_id, options).await {
            Ok((row, types)) => {
                writer.write_row(&row)?;
                summary.categories.add(&types);
                summary.written += 1;
            }
            Err(e) => {
                tracing::warn!(sr, %place_id, error = %e, "skipping place");
                summary.skipped.push(SkippedPlace {
                    sr,
                    place_id: place_id.clone(),
                    reason: e.to_string(),
                });
            }
        }

        if sr % PROGRESS_EVERY == 0 {
            let remaining = u32::try_from(total - sr).unwrap_or(u32::MAX);
            let eta = options.delay.saturating_mul(remaining);
            tracing::info!(
                processed = sr,
                total,
                written = summary.written,
                eta_secs = eta.as_secs(),
                "detail progress"
            );
        }
    }

    Ok(summary)
}
