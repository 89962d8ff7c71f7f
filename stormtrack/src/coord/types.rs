//! Coordinate type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid signed longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Which canonical longitude range a value is expressed in.
///
/// A coordinate does not carry its domain; every function documents the
/// domain it expects on input and produces on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LonDomain {
    /// Longitudes in [-180, 180)
    Signed,
    /// Longitudes in [0, 360), used to keep dateline-crossing data
    /// numerically contiguous
    Unsigned,
}

/// A geographic position in degrees.
///
/// Longitude domain is contextual (see [`LonDomain`]); latitude is
/// always in [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Longitude in degrees (east positive)
    pub lon: f64,
    /// Latitude in degrees (north positive)
    pub lat: f64,
}

impl Coordinate {
    /// Creates a new coordinate from longitude and latitude in degrees.
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl fmt::Display for Coordinate {
    /// Formats as `"12.0°N, 172.5°W"` using hemisphere suffixes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.lat >= 0.0 { 'N' } else { 'S' };
        let ew = if self.lon >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.1}°{}, {:.1}°{}",
            self.lat.abs(),
            ns,
            self.lon.abs(),
            ew
        )
    }
}

/// Errors that can occur during track geometry computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoError {
    /// An empty or malformed coordinate sequence was passed to the
    /// detector or normalizer
    InvalidInput(String),
    /// An empty point set or track was passed to the extent calculator
    /// or splitter
    InsufficientData(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::InvalidInput(what) => {
                write!(f, "Invalid input: {}", what)
            }
            GeoError::InsufficientData(what) => {
                write!(f, "Insufficient data: {}", what)
            }
        }
    }
}

impl std::error::Error for GeoError {}
