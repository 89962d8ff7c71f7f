//! Stormtrack - dateline-aware track geometry for map rendering
//!
//! This library normalizes storm and vessel track geometry for maps
//! that may span the International Date Line. It detects when a point
//! set straddles the antimeridian, selects a consistent longitude
//! representation, computes non-wrapping bounds, centers, and zoom
//! levels, and splits polylines for renderers that cannot represent
//! wrap-around geometry natively.
//!
//! Two renderer families consume the output:
//!
//! - a projection-based renderer that can recenter on 180° and accepts
//!   bounds in the unsigned [0, 360) domain ([`extent::compute_extent`])
//! - a wrapped tile renderer restricted to [-180, 180] that takes a
//!   signed-domain center/zoom ([`extent::compute_view`]) and one or
//!   two non-wrapping polylines per track ([`split::split_at_dateline`])
//!
//! Data ingestion, rendering calls, and persistence live in external
//! collaborators; everything here is a pure function over in-memory
//! coordinate sequences.

pub mod config;
pub mod coord;
pub mod extent;
pub mod geojson;
pub mod intensity;
pub mod split;

pub use config::{Basin, FallbackView, MapConfig};
pub use coord::{
    crosses_dateline, has_longitude_jump, normalize_coords, normalize_lon, to_signed_lon,
    to_unsigned_lon, unwrap_shortest_path, Coordinate, GeoError, LonDomain,
};
pub use extent::{compute_extent, compute_view, Extent, ViewSpec};
pub use intensity::StormIntensity;
pub use split::{split_at_dateline, Segment};
