//! Map extent and view computation
//!
//! Derives a non-wrapping bounding box, a map center, and a discrete
//! zoom level from a point set, switching the longitude framing when
//! the data crosses the dateline. The extent consumer is a
//! projection-based renderer that can recenter on 180°; the view
//! consumer is a wrapped tile renderer that only accepts signed-domain
//! centers.

use serde::{Deserialize, Serialize};

use crate::config::MapConfig;
use crate::coord::{
    crosses_dateline, to_signed_lon, to_unsigned_lon, Coordinate, GeoError, LonDomain, MAX_LAT,
    MAX_LON, MIN_LAT, MIN_LON,
};

/// A rectangular bounding region used to frame a map view.
///
/// Longitudes are expressed in the domain named by `domain`: signed
/// when the data does not cross the dateline, unsigned when it does.
/// Renderers branch on the domain to select their projection framing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
    /// Longitude domain the bounds are expressed in.
    pub domain: LonDomain,
}

impl Extent {
    /// Creates a signed-domain extent.
    pub fn signed(lon_min: f64, lon_max: f64, lat_min: f64, lat_max: f64) -> Self {
        Self {
            lon_min,
            lon_max,
            lat_min,
            lat_max,
            domain: LonDomain::Signed,
        }
    }

    /// Creates an unsigned-domain extent.
    pub fn unsigned(lon_min: f64, lon_max: f64, lat_min: f64, lat_max: f64) -> Self {
        Self {
            lon_min,
            lon_max,
            lat_min,
            lat_max,
            domain: LonDomain::Unsigned,
        }
    }

    /// Longitude span in degrees.
    #[inline]
    pub fn width(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    /// Latitude span in degrees.
    #[inline]
    pub fn height(&self) -> f64 {
        self.lat_max - self.lat_min
    }
}

/// Map center and zoom for the wrapped tile renderer.
///
/// `center_lon` is always in the signed domain; the tile renderer
/// rejects wrapped centers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSpec {
    pub center_lat: f64,
    /// Center longitude in signed domain.
    pub center_lon: f64,
    /// Initial zoom level (wider view, smaller number).
    pub zoom: u8,
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Computes a padded, non-wrapping bounding box for a point set.
///
/// Input longitudes are signed domain. When the data crosses the
/// dateline the bounds come back in the unsigned domain, clamped into
/// the configured safety band and re-centered if wider than the
/// configured window, so the renderer never frames the whole globe.
///
/// # Errors
///
/// Returns [`GeoError::InsufficientData`] for an empty point set.
/// Callers in the rendering pipeline substitute `cfg.fallback.extent`.
pub fn compute_extent(points: &[Coordinate], cfg: &MapConfig) -> Result<Extent, GeoError> {
    if points.is_empty() {
        return Err(GeoError::InsufficientData("empty point set".to_string()));
    }

    let lons: Vec<f64> = points.iter().map(|p| p.lon).collect();
    let crossing = crosses_dateline(&lons)?;
    let (lat_min, lat_max) = min_max(points.iter().map(|p| p.lat));
    let lat_lo = (lat_min - cfg.bounds_padding).max(MIN_LAT);
    let lat_hi = (lat_max + cfg.bounds_padding).min(MAX_LAT);

    if crossing {
        let (u_min, u_max) = min_max(lons.iter().copied().map(to_unsigned_lon));

        // Keep the window inside the safety band so the projection
        // never wraps the entire globe into view
        let (band_lo, band_hi) = cfg.safety_band;
        let mut lon_lo = u_min.max(band_lo);
        let mut lon_hi = u_max.min(band_hi);

        if lon_hi - lon_lo > cfg.max_window_width {
            let center = (lon_lo + lon_hi) / 2.0;
            lon_lo = center - cfg.max_window_width / 2.0;
            lon_hi = center + cfg.max_window_width / 2.0;
        }

        tracing::debug!(
            lon_min = lon_lo,
            lon_max = lon_hi,
            lat_min = lat_lo,
            lat_max = lat_hi,
            "Computed unsigned-domain extent for dateline-crossing data"
        );
        Ok(Extent::unsigned(lon_lo, lon_hi, lat_lo, lat_hi))
    } else {
        let (lon_min, lon_max) = min_max(lons.iter().copied());
        let lon_lo = (lon_min - cfg.bounds_padding).max(MIN_LON);
        let lon_hi = (lon_max + cfg.bounds_padding).min(MAX_LON);

        tracing::debug!(
            lon_min = lon_lo,
            lon_max = lon_hi,
            lat_min = lat_lo,
            lat_max = lat_hi,
            "Computed signed-domain extent"
        );
        Ok(Extent::signed(lon_lo, lon_hi, lat_lo, lat_hi))
    }
}

/// Computes the map center and zoom level for a point set.
///
/// The center longitude is always returned in the signed domain: for
/// dateline-crossing data the midpoint is computed over unsigned
/// longitudes and converted back. Zoom is selected from the longitude
/// span in whichever domain produced the center, via the configured
/// step table.
///
/// # Errors
///
/// Returns [`GeoError::InsufficientData`] for an empty point set.
/// Callers in the rendering pipeline substitute `cfg.fallback.view`.
pub fn compute_view(points: &[Coordinate], cfg: &MapConfig) -> Result<ViewSpec, GeoError> {
    if points.is_empty() {
        return Err(GeoError::InsufficientData("empty point set".to_string()));
    }

    let lons: Vec<f64> = points.iter().map(|p| p.lon).collect();
    let crossing = crosses_dateline(&lons)?;
    let (lat_min, lat_max) = min_max(points.iter().map(|p| p.lat));
    let center_lat = (lat_min + lat_max) / 2.0;

    let (center_lon, span) = if crossing {
        let (u_min, u_max) = min_max(lons.iter().copied().map(to_unsigned_lon));
        (to_signed_lon((u_min + u_max) / 2.0), u_max - u_min)
    } else {
        let (lon_min, lon_max) = min_max(lons.iter().copied());
        ((lon_min + lon_max) / 2.0, lon_max - lon_min)
    };

    let zoom = cfg.zoom_for_span(span);
    tracing::debug!(
        center_lat,
        center_lon,
        span,
        zoom,
        crossing,
        "Computed map view"
    );

    Ok(ViewSpec {
        center_lat,
        center_lon,
        zoom,
    })
}
