//! Shared configuration and field definitions for `placesweep`.

mod app_config;
mod config;
pub mod fields;
mod grid;
pub mod plan;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config_from_env, DEFAULT_PLAN_PATH};
pub use fields::{FieldDefault, FieldSpec, DETAIL_FIELDS};
pub use grid::generate_grid;
pub use plan::{
    load_plan, parse_plan, write_plan, DiscoveryPlan, GeoPoint, GridSpec, SearchStrand,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read plan file {path}: {source}")]
    PlanFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse plan file: {0}")]
    PlanFileParse(#[from] serde_yaml::Error),

    #[error("plan validation failed: {0}")]
    Validation(String),
}
