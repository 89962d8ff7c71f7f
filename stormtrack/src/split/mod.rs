//! Track splitting for wrap-restricted renderers
//!
//! Tile renderers confined to [-180, 180] cannot draw a polyline that
//! numerically jumps from +179° to −179°. Dateline-crossing tracks are
//! broken into pieces that each stay on one side of the antimeridian
//! and are drawn as independent polyline layers.

use serde::{Deserialize, Serialize};

use crate::coord::{crosses_dateline, to_signed_lon, Coordinate, GeoError};

/// A contiguous, non-wrapping piece of a track, in signed domain.
///
/// No adjacent pair of points within a segment differs by more than
/// 180° of longitude, so each segment renders as one polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub points: Vec<Coordinate>,
}

impl Segment {
    /// Number of points in the segment.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the segment holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Splits a track into segments that do not cross the antimeridian.
///
/// Input may arrive in signed or unsigned domain; coordinates are
/// brought to the signed domain first. The detector runs on the track's
/// own longitudes (per track, not per dataset). A non-crossing track
/// comes back as a single segment with order fully preserved.
///
/// A crossing track is partitioned by longitude sign: the western
/// bucket (lon <= 0) is emitted first, then the eastern bucket
/// (lon > 0), each preserving its internal order and with empty buckets
/// omitted. This is a partition by sign, not a split at each crossing
/// index, so the concatenation of the segments is a permutation of the
/// track rather than a temporal split. Callers that need strict
/// temporal subsequencing across segments must account for that.
///
/// # Errors
///
/// Returns [`GeoError::InsufficientData`] for an empty track.
pub fn split_at_dateline(track: &[Coordinate]) -> Result<Vec<Segment>, GeoError> {
    if track.is_empty() {
        return Err(GeoError::InsufficientData("empty track".to_string()));
    }

    // Renderer wants signed coordinates even if the caller worked in
    // the unsigned domain upstream
    let signed: Vec<Coordinate> = track
        .iter()
        .map(|p| Coordinate::new(to_signed_lon(p.lon), p.lat))
        .collect();

    let lons: Vec<f64> = signed.iter().map(|p| p.lon).collect();
    if !crosses_dateline(&lons)? {
        return Ok(vec![Segment { points: signed }]);
    }

    let (western, eastern): (Vec<Coordinate>, Vec<Coordinate>) =
        signed.into_iter().partition(|p| p.lon <= 0.0);

    tracing::debug!(
        western = western.len(),
        eastern = eastern.len(),
        "Split dateline-crossing track into sign buckets"
    );

    let mut segments = Vec::with_capacity(2);
    if !western.is_empty() {
        segments.push(Segment { points: western });
    }
    if !eastern.is_empty() {
        segments.push(Segment { points: eastern });
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_crossing_track_passes_through() {
        // P5: one segment, order fully preserved
        let track = [
            Coordinate::new(135.0, 18.0),
            Coordinate::new(150.0, 24.0),
            Coordinate::new(170.0, 32.0),
        ];
        let segments = split_at_dateline(&track).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].points, track.to_vec());
    }

    #[test]
    fn test_crossing_track_splits_western_then_eastern() {
        // Scenario E
        let track = [
            Coordinate::new(170.0, 10.0),
            Coordinate::new(175.0, 11.0),
            Coordinate::new(-178.0, 12.0),
            Coordinate::new(-172.0, 13.0),
        ];
        let segments = split_at_dateline(&track).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[0].points,
            vec![Coordinate::new(-178.0, 12.0), Coordinate::new(-172.0, 13.0)]
        );
        assert_eq!(
            segments[1].points,
            vec![Coordinate::new(170.0, 10.0), Coordinate::new(175.0, 11.0)]
        );
    }

    #[test]
    fn test_unsigned_input_is_brought_back_to_signed() {
        // Same Pacific track expressed in the unsigned domain
        let track = [
            Coordinate::new(170.0, 10.0),
            Coordinate::new(175.0, 11.0),
            Coordinate::new(182.0, 12.0),
            Coordinate::new(188.0, 13.0),
        ];
        let segments = split_at_dateline(&track).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[0].points,
            vec![Coordinate::new(-178.0, 12.0), Coordinate::new(-172.0, 13.0)]
        );
        assert_eq!(
            segments[1].points,
            vec![Coordinate::new(170.0, 10.0), Coordinate::new(175.0, 11.0)]
        );
    }

    #[test]
    fn test_zigzag_track_still_produces_two_buckets() {
        // Oscillating across the antimeridian still yields exactly two
        // buckets, one per sign
        let track = [
            Coordinate::new(179.0, 10.0),
            Coordinate::new(-179.0, 11.0),
            Coordinate::new(178.0, 12.0),
            Coordinate::new(-178.0, 13.0),
        ];
        let segments = split_at_dateline(&track).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].len(), 2);
        assert_eq!(segments[1].len(), 2);
        // Order within each bucket follows the original track order
        assert_eq!(segments[0].points[0].lon, -179.0);
        assert_eq!(segments[0].points[1].lon, -178.0);
        assert_eq!(segments[1].points[0].lon, 179.0);
        assert_eq!(segments[1].points[1].lon, 178.0);
    }

    #[test]
    fn test_no_internal_antimeridian_jump_in_segments() {
        let track = [
            Coordinate::new(175.0, 25.0),
            Coordinate::new(179.0, 27.0),
            Coordinate::new(-179.0, 29.0),
            Coordinate::new(-165.0, 32.0),
        ];
        for segment in split_at_dateline(&track).unwrap() {
            for pair in segment.points.windows(2) {
                assert!((pair[1].lon - pair[0].lon).abs() <= 180.0);
            }
        }
    }

    #[test]
    fn test_empty_track_is_insufficient_data() {
        let result = split_at_dateline(&[]);
        assert!(matches!(
            result.unwrap_err(),
            GeoError::InsufficientData(_)
        ));
    }

    #[test]
    fn test_single_point_track() {
        let track = [Coordinate::new(-179.0, 5.0)];
        let segments = split_at_dateline(&track).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].points, track.to_vec());
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_track() -> impl Strategy<Value = Vec<Coordinate>> {
            proptest::collection::vec(
                (-180.0..180.0_f64, -90.0..90.0_f64)
                    .prop_map(|(lon, lat)| Coordinate::new(lon, lat)),
                1..48,
            )
        }

        proptest! {
            #[test]
            fn test_split_neither_drops_nor_duplicates_points(
                track in arb_track()
            ) {
                // P4: the segments together are exactly the input points
                let segments = split_at_dateline(&track).unwrap();
                let total: usize = segments.iter().map(Segment::len).sum();
                prop_assert_eq!(total, track.len());

                let mut remaining = track.clone();
                for segment in &segments {
                    for point in &segment.points {
                        let pos = remaining.iter().position(|p| p == point);
                        prop_assert!(pos.is_some(), "Point {:?} not in input", point);
                        remaining.swap_remove(pos.unwrap());
                    }
                }
                prop_assert!(remaining.is_empty());
            }

            #[test]
            fn test_split_output_is_signed_domain(track in arb_track()) {
                for segment in split_at_dateline(&track).unwrap() {
                    for point in &segment.points {
                        prop_assert!(point.lon <= 180.0);
                        prop_assert!(point.lon >= -180.0);
                    }
                }
            }

            #[test]
            fn test_non_crossing_track_is_single_segment(
                lons in proptest::collection::vec(10.0..170.0_f64, 1..32)
            ) {
                // P5: all-eastern longitudes never cross
                let track: Vec<Coordinate> =
                    lons.iter().map(|&l| Coordinate::new(l, 0.0)).collect();
                let segments = split_at_dateline(&track).unwrap();
                prop_assert_eq!(segments.len(), 1);
                prop_assert_eq!(&segments[0].points, &track);
            }
        }
    }
}
