//! Map framing configuration.
//!
//! All tunables that the extent calculator consumes are injectable
//! through [`MapConfig`] rather than read from module-level constants,
//! so callers (and tests) can frame maps without global state.

use crate::extent::{Extent, ViewSpec};

/// Default padding in degrees added around data bounds.
pub const DEFAULT_BOUNDS_PADDING: f64 = 5.0;

/// Default unsigned-domain safety band for dateline-crossing extents.
///
/// When the data crosses the dateline the longitude window is clamped
/// into this band so the downstream renderer never wraps the entire
/// globe into view.
pub const DEFAULT_SAFETY_BAND: (f64, f64) = (120.0, 240.0);

/// Default maximum longitude window width in degrees.
///
/// A clamped window wider than this is re-centered to exactly this
/// width before being handed to the renderer.
pub const DEFAULT_MAX_WINDOW_WIDTH: f64 = 120.0;

/// Zoom step table mapping longitude span (degrees) to zoom level.
///
/// Each entry is `(span_threshold, zoom)`: the first threshold the span
/// strictly exceeds wins, so a span of exactly 100° falls through to
/// the 50–100 band (zoom 4). Band lower bounds are inclusive.
pub const DEFAULT_ZOOM_STEPS: &[(f64, u8)] = &[
    (100.0, 3),
    (50.0, 4),
    (20.0, 5),
    (10.0, 6),
    (5.0, 7),
    (2.0, 8),
];

/// Zoom level used when the span undercuts every table threshold.
pub const DEFAULT_CLOSE_ZOOM: u8 = 9;

/// Ocean basin presets for fallback framing.
///
/// Used when no data is available to compute bounds from; each basin
/// carries the extent, center, and zoom the original maps shipped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basin {
    Atlantic,
    Pacific,
    Indian,
}

/// Fallback framing substituted when a point set is empty.
///
/// The extent calculator fails fast with `InsufficientData`; callers in
/// the rendering pipeline catch that and substitute this fixed view so
/// an empty dataset still produces a sensible map.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackView {
    /// Signed-domain extent to frame when no data exists.
    pub extent: Extent,
    /// Center and zoom to frame when no data exists.
    pub view: ViewSpec,
}

impl FallbackView {
    /// Returns the preset fallback framing for a basin.
    pub fn for_basin(basin: Basin) -> Self {
        let (extent, center_lat, center_lon) = match basin {
            Basin::Atlantic => (
                Extent::signed(-85.0, -20.0, 5.0, 50.0),
                30.0,
                -60.0,
            ),
            Basin::Pacific => (
                Extent::signed(-180.0, -80.0, 5.0, 50.0),
                25.0,
                -130.0,
            ),
            Basin::Indian => (
                Extent::signed(40.0, 120.0, -40.0, 30.0),
                -5.0,
                80.0,
            ),
        };
        Self {
            extent,
            view: ViewSpec {
                center_lat,
                center_lon,
                zoom: 4,
            },
        }
    }

    /// Returns the Western Atlantic default framing.
    pub fn western_atlantic() -> Self {
        Self {
            extent: Extent::signed(-85.0, -50.0, 15.0, 50.0),
            view: ViewSpec {
                center_lat: 30.0,
                center_lon: -60.0,
                zoom: 4,
            },
        }
    }
}

impl Default for FallbackView {
    fn default() -> Self {
        Self::for_basin(Basin::Atlantic)
    }
}

/// Configuration for extent and view computation.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Padding in degrees added around data bounds.
    pub bounds_padding: f64,

    /// Unsigned-domain longitude band for dateline-crossing extents.
    pub safety_band: (f64, f64),

    /// Maximum longitude window width before re-centering.
    pub max_window_width: f64,

    /// Span-to-zoom step table, widest band first.
    pub zoom_steps: Vec<(f64, u8)>,

    /// Zoom used below the narrowest band threshold.
    pub close_zoom: u8,

    /// Framing substituted by callers when no data is available.
    pub fallback: FallbackView,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            bounds_padding: DEFAULT_BOUNDS_PADDING,
            safety_band: DEFAULT_SAFETY_BAND,
            max_window_width: DEFAULT_MAX_WINDOW_WIDTH,
            zoom_steps: DEFAULT_ZOOM_STEPS.to_vec(),
            close_zoom: DEFAULT_CLOSE_ZOOM,
            fallback: FallbackView::default(),
        }
    }
}

impl MapConfig {
    /// Set the bounds padding in degrees.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.bounds_padding = padding;
        self
    }

    /// Set the unsigned-domain safety band.
    pub fn with_safety_band(mut self, lo: f64, hi: f64) -> Self {
        self.safety_band = (lo, hi);
        self
    }

    /// Set the maximum longitude window width.
    pub fn with_max_window_width(mut self, width: f64) -> Self {
        self.max_window_width = width;
        self
    }

    /// Set the fallback framing.
    pub fn with_fallback(mut self, fallback: FallbackView) -> Self {
        self.fallback = fallback;
        self
    }

    /// Maps a longitude span in degrees to a zoom level via the step
    /// table (wider span, smaller zoom number).
    pub fn zoom_for_span(&self, span: f64) -> u8 {
        for &(threshold, zoom) in &self.zoom_steps {
            if span > threshold {
                return zoom;
            }
        }
        self.close_zoom
    }
}
