//! Flattening of a detail record into one CSV row.
//!
//! Cells follow [`csv_header`](placesweep_core::fields::csv_header) order.
//! Booleans are written as `True`/`False`; whole-number coordinates keep a
//! trailing `.0`.

use placesweep_core::fields::{FieldDefault, FieldSpec, DETAIL_FIELDS};

use crate::types::PlaceDetails;

/// Flattens a category list into dash-prefixed, newline-joined entries.
///
/// `["restaurant", "bar"]` becomes `"- restaurant\n- bar"`; an empty list
/// becomes an empty string.
#[must_use]
pub fn format_categories(types: &[String]) -> String {
    types
        .iter()
        .map(|t| format!("- {t}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the CSV row for one place: `SR`, blank `SKU`, every catalogue
/// field, then latitude/longitude when `include_coordinates` is set.
#[must_use]
pub fn detail_row(sr: usize, details: &PlaceDetails, include_coordinates: bool) -> Vec<String> {
    let mut row = Vec::with_capacity(DETAIL_FIELDS.len() + 4);
    row.push(sr.to_string());
    row.push(String::new());
    row.extend(DETAIL_FIELDS.iter().map(|spec| field_cell(details, spec)));

    if include_coordinates {
        let (lat, lng) = details
            .geometry
            .map_or((0.0, 0.0), |g| (g.location.lat, g.location.lng));
        row.push(format_coordinate(lat));
        row.push(format_coordinate(lng));
    }
    row
}

fn field_cell(details: &PlaceDetails, spec: &FieldSpec) -> String {
    let value = match spec.api_field {
        "name" => details.name.clone(),
        "formatted_address" => details.formatted_address.clone(),
        "formatted_phone_number" => details.formatted_phone_number.clone(),
        "types" => details.types.as_deref().map(format_categories),
        "url" => details.url.clone(),
        "serves_beer" => details.serves_beer.map(format_flag),
        "serves_breakfast" => details.serves_breakfast.map(format_flag),
        "serves_brunch" => details.serves_brunch.map(format_flag),
        "serves_dinner" => details.serves_dinner.map(format_flag),
        "serves_lunch" => details.serves_lunch.map(format_flag),
        "serves_vegetarian_food" => details.serves_vegetarian_food.map(format_flag),
        "serves_wine" => details.serves_wine.map(format_flag),
        "takeout" => details.takeout.map(format_flag),
        "delivery" => details.delivery.map(format_flag),
        "dine_in" => details.dine_in.map(format_flag),
        "business_status" => details.business_status.clone(),
        "rating" => details.rating.as_ref().map(ToString::to_string),
        "user_ratings_total" => details.user_ratings_total.map(|n| n.to_string()),
        other => {
            tracing::warn!(field = other, "catalogue field has no mapping; using default");
            None
        }
    };
    value.unwrap_or_else(|| default_cell(spec.default))
}

fn default_cell(default: FieldDefault) -> String {
    match default {
        FieldDefault::Text | FieldDefault::List => String::new(),
        FieldDefault::Flag => format_flag(false),
        FieldDefault::Number => "0".to_string(),
    }
}

fn format_flag(value: bool) -> String {
    let text = if value { "True" } else { "False" };
    text.to_string()
}

fn format_coordinate(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
