//! Longitude domain handling for dateline-crossing tracks
//!
//! Provides the dateline-crossing predicate, conversions between the
//! signed [-180, 180) and unsigned [0, 360) longitude domains, and the
//! shortest-path longitude unwrap used to keep polylines numerically
//! continuous.

mod types;

pub use types::{Coordinate, GeoError, LonDomain, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Classifies a set of longitudes as crossing the antimeridian or not.
///
/// Crossing is declared when the set straddles the 0° meridian, or when
/// the set straddles 180° (which makes the same predicate usable on
/// unsigned-domain data).
///
/// This heuristic is known to flag wide non-crossing signed spans (e.g.
/// −10°..170°) as crossing. That behavior is load-bearing for callers
/// that select the unsigned framing, so it is kept as-is rather than
/// replaced with a minimal-enclosing-interval rule.
///
/// # Arguments
///
/// * `lons` - Longitudes in signed or unsigned domain
///
/// # Errors
///
/// Returns [`GeoError::InvalidInput`] when `lons` is empty.
pub fn crosses_dateline(lons: &[f64]) -> Result<bool, GeoError> {
    if lons.is_empty() {
        return Err(GeoError::InvalidInput(
            "empty longitude sequence".to_string(),
        ));
    }

    let lon_min = lons.iter().copied().fold(f64::INFINITY, f64::min);
    let lon_max = lons.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok((lon_min < 0.0 && lon_max > 0.0) || (lon_min < 180.0 && lon_max > 180.0))
}

/// Converts a signed-domain longitude to the unsigned [0, 360) domain.
///
/// Idempotent: already-unsigned values pass through unchanged.
#[inline]
pub fn to_unsigned_lon(lon: f64) -> f64 {
    if lon < 0.0 {
        lon + 360.0
    } else {
        lon
    }
}

/// Converts an unsigned-domain longitude back to the signed
/// [-180, 180) domain.
///
/// Idempotent: already-signed values pass through unchanged.
#[inline]
pub fn to_signed_lon(lon: f64) -> f64 {
    if lon > 180.0 {
        lon - 360.0
    } else {
        lon
    }
}

/// Rewrites a longitude into the target domain.
#[inline]
pub fn normalize_lon(lon: f64, target: LonDomain) -> f64 {
    match target {
        LonDomain::Signed => to_signed_lon(lon),
        LonDomain::Unsigned => to_unsigned_lon(lon),
    }
}

/// Rewrites every coordinate of a track or point set into the target
/// domain, preserving order.
pub fn normalize_coords(points: &[Coordinate], target: LonDomain) -> Vec<Coordinate> {
    points
        .iter()
        .map(|p| Coordinate::new(normalize_lon(p.lon, target), p.lat))
        .collect()
}

/// Reports whether any adjacent pair of longitudes jumps by more than
/// 180° in magnitude.
///
/// This is the per-edge companion to [`crosses_dateline`]: it fires only
/// when a polyline actually wraps between consecutive points, so it has
/// no false positive on wide spans. Sequences of fewer than two values
/// never jump.
pub fn has_longitude_jump(lons: &[f64]) -> bool {
    lons.windows(2).any(|w| (w[1] - w[0]).abs() > 180.0)
}

/// Unwraps a track's longitudes so consecutive points take the shortest
/// numeric path.
///
/// The first point is kept as-is; every subsequent longitude is replaced
/// by whichever of `lon - 360`, `lon`, `lon + 360` lies closest to the
/// previous adjusted longitude. The result may leave [-180, 180] but is
/// free of artificial jumps, which is what renderers that accept
/// out-of-range longitudes want for a continuous polyline.
pub fn unwrap_shortest_path(points: &[Coordinate]) -> Vec<Coordinate> {
    let mut adjusted: Vec<Coordinate> = Vec::with_capacity(points.len());
    for point in points {
        let lon = match adjusted.last() {
            None => point.lon,
            Some(prev) => {
                let candidates = [point.lon - 360.0, point.lon, point.lon + 360.0];
                candidates
                    .into_iter()
                    .min_by(|a, b| (a - prev.lon).abs().total_cmp(&(b - prev.lon).abs()))
                    .unwrap_or(point.lon)
            }
        };
        adjusted.push(Coordinate::new(lon, point.lat));
    }
    adjusted
}
