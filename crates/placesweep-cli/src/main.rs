mod details;
mod discover;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use placesweep_core::{AppConfig, DEFAULT_PLAN_PATH};
use placesweep_places::{DetailOptions, PlacesClient, SearchLimits};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "placesweep-cli")]
#[command(about = "Discover places with the Google Places API and export their details to CSV")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the discovery plan and write unique place identifiers
    Discover {
        /// Discovery plan file (overrides `PLACESWEEP_PLAN_PATH`)
        #[arg(long)]
        plan: Option<PathBuf>,
        /// Unique identifiers to collect before stopping
        #[arg(long)]
        max_results: Option<usize>,
        /// Identifier list to write, one per line
        #[arg(long, default_value = "place_ids.txt")]
        output: PathBuf,
    },
    /// Fetch details for every identifier in a list and write them to CSV
    Details {
        /// Identifier list, one per line
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "places.csv")]
        output: PathBuf,
        /// Omit the Latitude and Longitude columns
        #[arg(long)]
        no_coordinates: bool,
    },
    /// Discover places and write their details in one pass
    Run {
        #[arg(long)]
        plan: Option<PathBuf>,
        #[arg(long)]
        max_results: Option<usize>,
        #[arg(long, default_value = "places.csv")]
        output: PathBuf,
        /// Also keep the discovered identifiers in this file
        #[arg(long)]
        ids_output: Option<PathBuf>,
    },
    /// Print the search strands a plan expands to, without calling the API
    Plan {
        #[arg(long, env = "PLACESWEEP_PLAN_PATH", default_value = DEFAULT_PLAN_PATH)]
        plan: PathBuf,
        /// Write the built-in Yaounde plan to the plan path first
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // The dry run needs no credentials.
    if let Commands::Plan { plan, init } = &cli.command {
        init_tracing("info")?;
        return discover::run_plan(plan, *init);
    }

    let config = placesweep_core::load_app_config_from_env()?;
    init_tracing(&config.log_level)?;
    tracing::debug!(?config, "configuration loaded");
    let client = build_client(&config)?;

    match cli.command {
        Commands::Discover {
            plan,
            max_results,
            output,
        } => {
            let plan_path = plan.unwrap_or_else(|| config.plan_path.clone());
            let limits = search_limits(&config, max_results);
            discover::run_discover(&client, &plan_path, &limits, &output).await
        }
        Commands::Details {
            input,
            output,
            no_coordinates,
        } => {
            let options = detail_options(&config, no_coordinates);
            details::run_details(&client, &input, &output, &options).await
        }
        Commands::Run {
            plan,
            max_results,
            output,
            ids_output,
        } => {
            let plan_path = plan.unwrap_or_else(|| config.plan_path.clone());
            let limits = search_limits(&config, max_results);
            let options = detail_options(&config, false);
            details::run_pipeline(
                &client,
                &plan_path,
                &limits,
                &options,
                &output,
                ids_output.as_deref(),
            )
            .await
        }
        Commands::Plan { .. } => Ok(()),
    }
}

/// Initialise the global subscriber. `RUST_LOG` wins over `fallback_level`.
fn init_tracing(fallback_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}

fn build_client(config: &AppConfig) -> anyhow::Result<PlacesClient> {
    PlacesClient::with_base_url(
        &config.api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.api_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build Places client: {e}"))
}

fn search_limits(config: &AppConfig, max_results: Option<usize>) -> SearchLimits {
    SearchLimits {
        max_results: max_results.unwrap_or(config.max_results),
        page_token_delay: Duration::from_millis(config.page_token_delay_ms),
    }
}

fn detail_options(config: &AppConfig, no_coordinates: bool) -> DetailOptions {
    DetailOptions {
        language: config.language.clone(),
        include_coordinates: config.include_coordinates && !no_coordinates,
        delay: Duration::from_millis(config.detail_delay_ms),
    }
}

#[cfg(test)]
mod tests;
