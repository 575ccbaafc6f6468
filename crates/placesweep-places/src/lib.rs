//! Google Places search, deduplication, and detail export.

pub mod client;
pub mod collector;
pub mod details;
pub mod error;
pub mod export;
pub mod row;
pub mod search;
pub mod tally;
pub mod types;

pub use client::PlacesClient;
pub use collector::{PageTally, PlaceCollector};
pub use details::{expand_details, fetch_detail_row, BatchSummary, DetailOptions, SkippedPlace};
pub use error::PlacesError;
pub use export::{parse_place_ids, read_place_ids, write_place_ids, PlaceCsvWriter};
pub use row::{detail_row, format_categories};
pub use search::{discover, run_strand, Discovery, SearchLimits, StrandEnd, StrandReport};
pub use tally::TypeTally;
pub use types::{Geometry, LatLng, PlaceDetails, PlaceSummary, SearchPage};
