//! HTTP client for the Google Places web service.
//!
//! Wraps `reqwest` with API key handling, typed response deserialization, and
//! envelope status checks. Only two endpoints are used: `textsearch/json` and
//! `details/json`. Requests are never retried; callers decide whether a
//! failure skips an item or ends a search strand.

use std::time::Duration;

use placesweep_core::SearchStrand;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::types::{DetailsResponse, PlaceDetails, SearchPage};

/// Client for the Places text search and details endpoints.
///
/// The base URL comes from configuration (`PLACESWEEP_API_BASE_URL`), so
/// tests point the same constructor at a mock server.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Endpoint paths are joined onto the base, which only keeps the last
        // path segment when the base ends in exactly one slash.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches one page of text search results for `strand`.
    ///
    /// Pass the previous page's `next_page_token` as `page_token` to continue
    /// a strand. A `ZERO_RESULTS` status is returned as an empty page with no
    /// token.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiStatus`] if the envelope status is not `OK` or
    ///   `ZERO_RESULTS` (e.g. `REQUEST_DENIED`, `OVER_QUERY_LIMIT`,
    ///   `INVALID_REQUEST` for an unactivated page token).
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn text_search_page(
        &self,
        strand: &SearchStrand,
        page_token: Option<&str>,
    ) -> Result<SearchPage, PlacesError> {
        let location = strand.location.map(|p| p.to_string());
        let radius = strand.radius_m.map(|r| r.to_string());

        let mut params: Vec<(&str, &str)> = vec![("query", strand.query.as_str())];
        if let Some(region) = strand.region.as_deref() {
            params.push(("region", region));
        }
        if let Some(location) = location.as_deref() {
            params.push(("location", location));
        }
        if let Some(radius) = radius.as_deref() {
            params.push(("radius", radius));
        }
        if let Some(place_type) = strand.place_type.as_deref() {
            params.push(("type", place_type));
        }
        if let Some(token) = page_token {
            params.push(("pagetoken", token));
        }

        let url = self.build_url("textsearch/json", &params)?;
        let page: SearchPage = self
            .request_json(&url, &format!("textsearch(query={})", strand.query))
            .await?;

        if page.status == "OK" {
            return Ok(page);
        }
        if page.status == "ZERO_RESULTS" {
            return Ok(SearchPage {
                next_page_token: None,
                ..page
            });
        }
        Err(PlacesError::ApiStatus {
            message: page
                .error_message
                .unwrap_or_else(|| "no error message".to_string()),
            status: page.status,
        })
    }

    /// Fetches the detail record for one place.
    ///
    /// `fields` is the comma-joined field list sent as the `fields`
    /// parameter; fields the API leaves out come back as `None`.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::NoResult`] if the response has no `result` object.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn place_details(
        &self,
        place_id: &str,
        fields: &str,
        language: &str,
    ) -> Result<PlaceDetails, PlacesError> {
        let url = self.build_url(
            "details/json",
            &[
                ("place_id", place_id),
                ("fields", fields),
                ("language", language),
            ],
        )?;
        let response: DetailsResponse = self
            .request_json(&url, &format!("details(place_id={place_id})"))
            .await?;

        response.result.ok_or_else(|| PlacesError::NoResult {
            place_id: place_id.to_owned(),
            status: response.status.unwrap_or_else(|| "missing".to_string()),
        })
    }

    /// Builds an endpoint URL with `key` first and `extra` percent-encoded
    /// after it.
    fn build_url(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<T, PlacesError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
