//! The fixed set of place-detail fields requested from the API and the CSV
//! columns they map to.
//!
//! Column order in the output file is `SR`, `SKU`, every entry of
//! [`DETAIL_FIELDS`] in declaration order, then `Latitude`/`Longitude` when
//! coordinates are enabled.

/// Value substituted when the API omits a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// Empty string.
    Text,
    /// Empty list, rendered as an empty cell.
    List,
    /// `false`.
    Flag,
    /// `0`.
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as spelled in the details API `fields` parameter.
    pub api_field: &'static str,
    /// CSV column header.
    pub header: &'static str,
    pub default: FieldDefault,
}

const fn field(api_field: &'static str, header: &'static str, default: FieldDefault) -> FieldSpec {
    FieldSpec {
        api_field,
        header,
        default,
    }
}

pub const DETAIL_FIELDS: &[FieldSpec] = &[
    field("name", "Name", FieldDefault::Text),
    field("formatted_address", "Address", FieldDefault::Text),
    field("formatted_phone_number", "Phone", FieldDefault::Text),
    field("types", "Category", FieldDefault::List),
    field("url", "URL", FieldDefault::Text),
    field("serves_beer", "Serves Beer", FieldDefault::Flag),
    field("serves_breakfast", "Serves Breakfast", FieldDefault::Flag),
    field("serves_brunch", "Serves Brunch", FieldDefault::Flag),
    field("serves_dinner", "Serves Dinner", FieldDefault::Flag),
    field("serves_lunch", "Serves Lunch", FieldDefault::Flag),
    field(
        "serves_vegetarian_food",
        "Serves Vegetarian Food",
        FieldDefault::Flag,
    ),
    field("serves_wine", "Serves Wine", FieldDefault::Flag),
    field("takeout", "Takeout", FieldDefault::Flag),
    field("delivery", "Delivery", FieldDefault::Flag),
    field("dine_in", "Dine In", FieldDefault::Flag),
    field("business_status", "Business Status", FieldDefault::Text),
    field("rating", "Rating", FieldDefault::Number),
    field("user_ratings_total", "User Ratings Total", FieldDefault::Number),
];

/// Extra field requested when coordinates are enabled.
pub const GEOMETRY_FIELD: &str = "geometry";

pub const LEADING_HEADERS: [&str; 2] = ["SR", "SKU"];
pub const COORDINATE_HEADERS: [&str; 2] = ["Latitude", "Longitude"];

/// Full CSV header row.
#[must_use]
pub fn csv_header(include_coordinates: bool) -> Vec<&'static str> {
    let mut header: Vec<&'static str> = LEADING_HEADERS.to_vec();
    header.extend(DETAIL_FIELDS.iter().map(|f| f.header));
    if include_coordinates {
        header.extend(COORDINATE_HEADERS);
    }
    header
}

/// Comma-joined value for the details API `fields` parameter.
#[must_use]
pub fn request_fields(include_coordinates: bool) -> String {
    let mut fields: Vec<&str> = DETAIL_FIELDS.iter().map(|f| f.api_field).collect();
    if include_coordinates {
        fields.push(GEOMETRY_FIELD);
    }
    fields.join(",")
}
