//! Longitude-domain transform for in-memory GeoJSON
//!
//! Upstream collaborators hand over GeoJSON FeatureCollections; when
//! any feature actually wraps across the dateline, every longitude in
//! the collection is rewritten to the unsigned [0, 360) domain so the
//! projection-capable renderer sees contiguous geometry. Only Point and
//! LineString geometries carry track data here.

use serde_json::Value;

use crate::coord::{has_longitude_jump, to_unsigned_lon};

/// Rewrites a FeatureCollection into the unsigned longitude domain when
/// any of its features wraps across the dateline.
///
/// Longitudes are gathered from every Point and LineString geometry and
/// checked with [`has_longitude_jump`]; if no adjacent pair wraps, the
/// input is returned unchanged. Inputs that are not a FeatureCollection
/// (or are malformed) are also returned unchanged - this transform
/// never fails, it only declines to act.
pub fn shift_features_unsigned(geojson: Value) -> Value {
    let Some(features) = geojson.get("features").and_then(Value::as_array) else {
        return geojson;
    };

    let mut lons = Vec::new();
    for feature in features {
        let Some(geometry) = feature.get("geometry") else {
            continue;
        };
        match geometry.get("type").and_then(Value::as_str) {
            Some("LineString") => {
                if let Some(coords) = geometry.get("coordinates").and_then(Value::as_array) {
                    lons.extend(coords.iter().filter_map(position_lon));
                }
            }
            Some("Point") => {
                if let Some(lon) = geometry.get("coordinates").and_then(position_lon) {
                    lons.push(lon);
                }
            }
            _ => {}
        }
    }

    if !has_longitude_jump(&lons) {
        return geojson;
    }

    tracing::debug!(
        features = features.len(),
        "Dateline wrap detected, shifting GeoJSON longitudes to [0, 360)"
    );

    let mut shifted = geojson;
    if let Some(features) = shifted
        .get_mut("features")
        .and_then(Value::as_array_mut)
    {
        for feature in features {
            let Some(geometry) = feature.get_mut("geometry") else {
                continue;
            };
            let is_line =
                matches!(geometry.get("type").and_then(Value::as_str), Some("LineString"));
            let is_point = matches!(geometry.get("type").and_then(Value::as_str), Some("Point"));

            if is_line {
                if let Some(coords) =
                    geometry.get_mut("coordinates").and_then(Value::as_array_mut)
                {
                    for position in coords {
                        shift_position(position);
                    }
                }
            } else if is_point {
                if let Some(position) = geometry.get_mut("coordinates") {
                    shift_position(position);
                }
            }
        }
    }
    shifted
}

/// Extracts the longitude from a GeoJSON `[lon, lat]` position.
fn position_lon(position: &Value) -> Option<f64> {
    position.as_array()?.first()?.as_f64()
}

/// Rewrites the longitude of a `[lon, lat]` position in place.
fn shift_position(position: &mut Value) {
    if let Some(pair) = position.as_array_mut() {
        if let Some(lon) = pair.first().and_then(Value::as_f64) {
            pair[0] = to_unsigned_lon(lon).into();
        }
    }
}
