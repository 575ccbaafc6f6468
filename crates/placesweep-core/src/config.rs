use crate::app_config::AppConfig;
use crate::ConfigError;

pub(crate) const DEFAULT_API_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

/// Plan file used when `PLACESWEEP_PLAN_PATH` is unset.
pub const DEFAULT_PLAN_PATH: &str = "./config/discovery.yaml";

/// Load application configuration from environment variables already in the process.
///
/// Does NOT load `.env` files; the binary does that before parsing its
/// arguments so clap `env` defaults see them too.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let api_key = require("GOOGLE_MAPS_API_KEY")?;

    let api_base_url = or_default("PLACESWEEP_API_BASE_URL", DEFAULT_API_BASE_URL);
    let log_level = or_default("PLACESWEEP_LOG_LEVEL", "info");
    let plan_path = PathBuf::from(or_default("PLACESWEEP_PLAN_PATH", DEFAULT_PLAN_PATH));
    let request_timeout_secs = parse_u64("PLACESWEEP_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PLACESWEEP_USER_AGENT", "placesweep/0.1 (place-discovery)");
    let page_token_delay_ms = parse_u64("PLACESWEEP_PAGE_TOKEN_DELAY_MS", "3000")?;
    let detail_delay_ms = parse_u64("PLACESWEEP_DETAIL_DELAY_MS", "200")?;
    let max_results = parse_usize("PLACESWEEP_MAX_RESULTS", "300")?;
    let language = or_default("PLACESWEEP_LANGUAGE", "en");
    let include_coordinates = parse_bool(
        "PLACESWEEP_INCLUDE_COORDINATES",
        &or_default("PLACESWEEP_INCLUDE_COORDINATES", "true"),
    )?;

    Ok(AppConfig {
        api_key,
        api_base_url,
        log_level,
        plan_path,
        request_timeout_secs,
        user_agent,
        page_token_delay_ms,
        detail_delay_ms,
        max_results,
        language,
        include_coordinates,
    })
}

/// Parse a boolean flag. Accepts `true/false`, `1/0`, `yes/no` in any case.
fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
