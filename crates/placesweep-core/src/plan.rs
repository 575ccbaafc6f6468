//! Discovery plan: which search strands to run and in what order.
//!
//! A plan is read from YAML (see `config/discovery.yaml`) and expands into an
//! ordered list of [`SearchStrand`]s: text terms first, then grid cells, then
//! place-type categories. Strand order decides which strand "owns" a place
//! that several strands return.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::generate_grid;
use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Bounding box swept with location-biased searches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Query sent for every grid cell.
    pub query: String,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
    /// Ground distance between adjacent grid points.
    pub step_km: f64,
    /// Search radius around each grid point, in metres.
    #[serde(default = "default_radius_m")]
    pub radius_m: u32,
}

fn default_radius_m() -> u32 {
    1_500
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryPlan {
    /// Free-text location appended to every term, e.g. `"Yaounde, Cameroon"`.
    pub location: String,
    /// Two-letter country bias passed as the `region` parameter.
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub terms: Vec<String>,
    #[serde(default)]
    pub grid: Option<GridSpec>,
    /// Place types searched with the `type` filter.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// One independent paginated search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStrand {
    /// Short name used in logs, e.g. `term:cafe` or `grid:3.85,11.5`.
    pub label: String,
    pub query: String,
    pub location: Option<GeoPoint>,
    pub radius_m: Option<u32>,
    pub place_type: Option<String>,
    pub region: Option<String>,
}

const DEFAULT_TERMS: &[&str] = &[
    "restaurant",
    "restaurants",
    "cafe",
    "cafes",
    "bar",
    "bars",
    "bistro",
    "food",
    "eat",
    "dining",
    "place to eat",
    "local food",
    "cameroonian food",
    "african restaurant",
    "fast food",
    "pizza",
    "burger",
    "chicken",
    "seafood",
    "bakery",
];

impl Default for DiscoveryPlan {
    fn default() -> Self {
        Self {
            location: "Yaounde, Cameroon".to_string(),
            region: Some("cm".to_string()),
            terms: DEFAULT_TERMS.iter().map(|t| (*t).to_string()).collect(),
            grid: None,
            categories: Vec::new(),
        }
    }
}

impl DiscoveryPlan {
    /// Expand the plan into strands: terms, then grid cells, then categories.
    #[must_use]
    pub fn strands(&self) -> Vec<SearchStrand> {
        let mut strands = Vec::new();

        for term in &self.terms {
            strands.push(SearchStrand {
                label: format!("term:{term}"),
                query: format!("{term} in {}", self.location),
                location: None,
                radius_m: None,
                place_type: None,
                region: self.region.clone(),
            });
        }

        if let Some(grid) = &self.grid {
            for point in generate_grid(grid) {
                strands.push(SearchStrand {
                    label: format!("grid:{point}"),
                    query: grid.query.clone(),
                    location: Some(point),
                    radius_m: Some(grid.radius_m),
                    place_type: None,
                    region: self.region.clone(),
                });
            }
        }

        for category in &self.categories {
            strands.push(SearchStrand {
                label: format!("type:{category}"),
                query: format!("{category} in {}", self.location),
                location: None,
                radius_m: None,
                place_type: Some(category.clone()),
                region: self.region.clone(),
            });
        }

        strands
    }
}

/// Write `plan` as YAML to `path`, refusing to replace an existing file.
///
/// # Errors
///
/// Returns `ConfigError::PlanFileIo` if `path` exists or cannot be written,
/// or `ConfigError::PlanFileParse` if serialization fails.
pub fn write_plan(path: &Path, plan: &DiscoveryPlan) -> Result<(), ConfigError> {
    let io_error = |source: std::io::Error| ConfigError::PlanFileIo {
        path: path.display().to_string(),
        source,
    };

    let yaml = serde_yaml::to_string(plan)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(io_error)?;
    file.write_all(yaml.as_bytes()).map_err(io_error)
}

/// Load and validate a discovery plan from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_plan(path: &Path) -> Result<DiscoveryPlan, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PlanFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_plan(&content)
}

/// Parse and validate a discovery plan from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_plan(content: &str) -> Result<DiscoveryPlan, ConfigError> {
    let plan: DiscoveryPlan = serde_yaml::from_str(content)?;
    validate_plan(&plan)?;
    Ok(plan)
}

fn validate_plan(plan: &DiscoveryPlan) -> Result<(), ConfigError> {
    if plan.location.trim().is_empty() {
        return Err(ConfigError::Validation(
            "location must be non-empty".to_string(),
        ));
    }

    if plan.terms.is_empty() && plan.grid.is_none() && plan.categories.is_empty() {
        return Err(ConfigError::Validation(
            "plan has no terms, grid, or categories".to_string(),
        ));
    }

    let mut seen_terms = HashSet::new();
    for term in &plan.terms {
        if term.trim().is_empty() {
            return Err(ConfigError::Validation(
                "search terms must be non-empty".to_string(),
            ));
        }
        if !seen_terms.insert(term.trim().to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate search term: '{term}'"
            )));
        }
    }

    let mut seen_categories = HashSet::new();
    for category in &plan.categories {
        if category.trim().is_empty() {
            return Err(ConfigError::Validation(
                "categories must be non-empty".to_string(),
            ));
        }
        if !seen_categories.insert(category.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category: '{category}'"
            )));
        }
    }

    if let Some(grid) = &plan.grid {
        if grid.query.trim().is_empty() {
            return Err(ConfigError::Validation(
                "grid query must be non-empty".to_string(),
            ));
        }
        if grid.min_lat > grid.max_lat || grid.min_lng > grid.max_lng {
            return Err(ConfigError::Validation(format!(
                "grid bounds are inverted: lat {}..{}, lng {}..{}",
                grid.min_lat, grid.max_lat, grid.min_lng, grid.max_lng
            )));
        }
        if !(-90.0..=90.0).contains(&grid.min_lat) || !(-90.0..=90.0).contains(&grid.max_lat) {
            return Err(ConfigError::Validation(
                "grid latitude must be within -90..90".to_string(),
            ));
        }
        if !(-180.0..=180.0).contains(&grid.min_lng) || !(-180.0..=180.0).contains(&grid.max_lng)
        {
            return Err(ConfigError::Validation(
                "grid longitude must be within -180..180".to_string(),
            ));
        }
        if grid.step_km <= 0.0 || !grid.step_km.is_finite() {
            return Err(ConfigError::Validation(format!(
                "grid step_km must be positive, got {}",
                grid.step_km
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
