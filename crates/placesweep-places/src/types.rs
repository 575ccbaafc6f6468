//! Places API response types.
//!
//! Both endpoints wrap their payload in a `{"status": "...", ...}` envelope.
//! Text search returns `results` plus an optional `next_page_token`; details
//! returns a single `result` object holding only the requested fields.
//!
//! Detail fields are all `Option` so that an omitted field can be told apart
//! from one the API sent. The row builder substitutes the declared default
//! from the field catalogue for every `None`.

use serde::Deserialize;

/// One page from `textsearch/json`.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
    /// Present when another page is available. The token is not usable
    /// until a few seconds after it is issued.
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// A search result, kept only long enough to dedupe its identifier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Envelope for `details/json`.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub result: Option<PlaceDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaceDetails {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub types: Option<Vec<String>>,
    pub url: Option<String>,
    pub serves_beer: Option<bool>,
    pub serves_breakfast: Option<bool>,
    pub serves_brunch: Option<bool>,
    pub serves_dinner: Option<bool>,
    pub serves_lunch: Option<bool>,
    pub serves_vegetarian_food: Option<bool>,
    pub serves_wine: Option<bool>,
    pub takeout: Option<bool>,
    pub delivery: Option<bool>,
    pub dine_in: Option<bool>,
    /// `OPERATIONAL`, `CLOSED_TEMPORARILY`, or `CLOSED_PERMANENTLY`.
    pub business_status: Option<String>,
    /// Kept as a JSON number so `4.0` is written back as `4.0`, not `4`.
    pub rating: Option<serde_json::Number>,
    pub user_ratings_total: Option<u64>,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
