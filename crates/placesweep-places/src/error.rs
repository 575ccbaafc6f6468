use thiserror::Error;

/// Errors returned by the Places client and the export helpers.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API envelope carried a status other than `OK` / `ZERO_RESULTS`.
    #[error("Places API status {status}: {message}")]
    ApiStatus { status: String, message: String },

    /// A details response arrived without a `result` object.
    #[error("no details for {place_id} (status: {status})")]
    NoResult { place_id: String, status: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid API base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
