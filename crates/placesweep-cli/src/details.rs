//! `details` and `run` command handlers.

use std::path::Path;

use placesweep_places::{
    expand_details, read_place_ids, write_place_ids, BatchSummary, DetailOptions, PlaceCsvWriter,
    PlacesClient, SearchLimits,
};

use crate::discover::{discover_from_plan, TOP_TYPES};

/// Expands the identifiers listed in `input` into a CSV file at `output`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the CSV cannot be
/// written. Places whose details fail to load are logged and skipped.
pub(crate) async fn run_details(
    client: &PlacesClient,
    input: &Path,
    output: &Path,
    options: &DetailOptions,
) -> anyhow::Result<()> {
    let place_ids = read_place_ids(input)?;
    tracing::info!(input = %input.display(), count = place_ids.len(), "loaded place ids");
    export_details(client, &place_ids, output, options).await
}

/// Discovers places and writes their details without an intermediate file,
/// unless `ids_output` asks for one.
///
/// # Errors
///
/// Returns an error if the plan cannot be loaded or an output file cannot be
/// written.
pub(crate) async fn run_pipeline(
    client: &PlacesClient,
    plan_path: &Path,
    limits: &SearchLimits,
    options: &DetailOptions,
    output: &Path,
    ids_output: Option<&Path>,
) -> anyhow::Result<()> {
    let discovery = discover_from_plan(client, plan_path, limits).await?;
    let place_ids: Vec<String> = discovery
        .places
        .into_iter()
        .map(|place| place.place_id)
        .collect();

    if let Some(path) = ids_output {
        let written = write_place_ids(path, place_ids.iter().map(String::as_str))?;
        tracing::info!(path = %path.display(), written, "wrote place ids");
    }

    export_details(client, &place_ids, output, options).await
}

async fn export_details(
    client: &PlacesClient,
    place_ids: &[String],
    output: &Path,
    options: &DetailOptions,
) -> anyhow::Result<()> {
    let mut writer = PlaceCsvWriter::create(output, options.include_coordinates)?;
    let summary = expand_details(client, place_ids, options, &mut writer).await?;
    log_summary(&summary);
    println!(
        "wrote {} of {} places to {}",
        writer.rows_written(),
        summary.requested,
        output.display()
    );
    Ok(())
}

fn log_summary(summary: &BatchSummary) {
    summary.categories.log_top(TOP_TYPES, "details");
    tracing::info!(
        requested = summary.requested,
        written = summary.written,
        skipped = summary.skipped.len(),
        "detail export complete"
    );
}
