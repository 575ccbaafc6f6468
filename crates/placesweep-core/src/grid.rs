//! Geographic grid generation for location-biased search sweeps.
//!
//! Produces a uniform lat/lng lattice over a bounding box. The longitude step
//! widens with latitude so adjacent points stay ~`step_km` apart on the ground.

use std::f64::consts::PI;

use crate::plan::{GeoPoint, GridSpec};

const KM_PER_LAT_DEGREE: f64 = 111.32;

/// Generate grid points across the bounds of `spec`, row by row from the
/// south-west corner.
///
/// A last row or column that would overshoot the bounds by less than half a
/// step is pulled back onto the bound, so every point lies inside `spec`.
/// Returns an empty list when `step_km` is not positive.
#[must_use]
pub fn generate_grid(spec: &GridSpec) -> Vec<GeoPoint> {
    if spec.step_km <= 0.0 || !spec.step_km.is_finite() {
        return Vec::new();
    }
    let lat_step = spec.step_km / KM_PER_LAT_DEGREE;
    let mut points = Vec::new();
    let mut lat = spec.min_lat;
    while lat <= spec.max_lat + lat_step * 0.5 {
        let row_lat = lat.min(spec.max_lat);
        let lng_step = spec.step_km / (KM_PER_LAT_DEGREE * (row_lat * PI / 180.0).cos().abs());
        if lng_step.is_finite() {
            let mut lng = spec.min_lng;
            while lng <= spec.max_lng + lng_step * 0.5 {
                points.push(GeoPoint {
                    lat: row_lat,
                    lng: lng.min(spec.max_lng),
                });
                lng += lng_step;
            }
        } else {
            // At a pole every longitude is the same point.
            points.push(GeoPoint {
                lat: row_lat,
                lng: spec.min_lng,
            });
        }
        lat += lat_step;
    }
    points
}
