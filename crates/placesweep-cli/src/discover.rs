//! `discover` and `plan` command handlers.

use std::path::Path;

use placesweep_core::DiscoveryPlan;
use placesweep_places::{
    discover, write_place_ids, Discovery, PlacesClient, SearchLimits, TypeTally,
};

/// Types listed in the post-run distribution log.
pub(crate) const TOP_TYPES: usize = 10;

/// Loads the plan at `plan_path` and runs every strand it expands to.
///
/// # Errors
///
/// Returns an error if the plan cannot be loaded. Strand failures are
/// reported in the returned [`Discovery`], not propagated.
pub(crate) async fn discover_from_plan(
    client: &PlacesClient,
    plan_path: &Path,
    limits: &SearchLimits,
) -> anyhow::Result<Discovery> {
    let plan = placesweep_core::load_plan(plan_path)?;
    let strands = plan.strands();
    tracing::info!(
        plan = %plan_path.display(),
        location = %plan.location,
        strands = strands.len(),
        max_results = limits.max_results,
        "starting discovery"
    );

    let discovery = discover(client, &strands, limits).await;
    log_discovery(&discovery);
    Ok(discovery)
}

/// Runs discovery and writes the unique identifiers to `output`.
///
/// # Errors
///
/// Returns an error if the plan cannot be loaded or the output file cannot
/// be written.
pub(crate) async fn run_discover(
    client: &PlacesClient,
    plan_path: &Path,
    limits: &SearchLimits,
    output: &Path,
) -> anyhow::Result<()> {
    let discovery = discover_from_plan(client, plan_path, limits).await?;
    let written = write_place_ids(output, discovery.places.iter().map(|p| p.place_id.as_str()))?;
    println!("wrote {written} place ids to {}", output.display());
    Ok(())
}

/// Prints the strands a plan expands to. With `init`, the built-in plan is
/// written to `plan_path` first.
///
/// # Errors
///
/// Returns an error if `init` is set and the file already exists, or if the
/// plan cannot be loaded or fails validation.
pub(crate) fn run_plan(plan_path: &Path, init: bool) -> anyhow::Result<()> {
    if init {
        placesweep_core::write_plan(plan_path, &DiscoveryPlan::default())?;
        println!("wrote default plan to {}", plan_path.display());
    }

    let plan = placesweep_core::load_plan(plan_path)?;
    let strands = plan.strands();

    println!("{} ({} strands)", plan.location, strands.len());
    for (index, strand) in strands.iter().enumerate() {
        let mut line = format!("{:>4}  {:<32} {}", index + 1, strand.label, strand.query);
        if let Some(radius) = strand.radius_m {
            line.push_str(&format!("  radius={radius}m"));
        }
        if let Some(place_type) = &strand.place_type {
            line.push_str(&format!("  type={place_type}"));
        }
        println!("{line}");
    }
    Ok(())
}

fn log_discovery(discovery: &Discovery) {
    for report in &discovery.reports {
        tracing::info!(
            strand = %report.label,
            pages = report.pages,
            received = report.received,
            added = report.added,
            duplicates = report.duplicates,
            end = ?report.end,
            "strand finished"
        );
    }

    let mut types = TypeTally::new();
    for place in &discovery.places {
        types.add(&place.types);
    }
    types.log_top(TOP_TYPES, "discovery");

    tracing::info!(
        raw = discovery.raw_results(),
        unique = discovery.places.len(),
        failed_strands = discovery.failed_strands(),
        skipped_strands = discovery.skipped_strands,
        "discovery complete"
    );
}
