use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub log_level: String,
    pub plan_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Wait between pages of one search strand. The API rejects a
    /// `next_page_token` used before it has been activated.
    pub page_token_delay_ms: u64,
    pub detail_delay_ms: u64,
    /// Unique place identifiers to collect before discovery stops.
    pub max_results: usize,
    pub language: String,
    pub include_coordinates: bool,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[redacted]")
            .field("api_base_url", &self.api_base_url)
            .field("log_level", &self.log_level)
            .field("plan_path", &self.plan_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("page_token_delay_ms", &self.page_token_delay_ms)
            .field("detail_delay_ms", &self.detail_delay_ms)
            .field("max_results", &self.max_results)
            .field("language", &self.language)
            .field("include_coordinates", &self.include_coordinates)
            .finish()
    }
}
