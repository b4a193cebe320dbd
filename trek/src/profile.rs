//! The cumulative-distance fold.

use crate::TrackPoint;
use geo::{algorithm::HaversineDistance, Point};
use log::debug;
use std::collections::BTreeMap;

/// One sample of the trek-wide elevation profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationPoint {
    /// Zero-based ordinal of the source file in input-list order.
    pub day: usize,

    /// Cumulative 2D haversine path length, in kilometers, from the
    /// first point of the first day up to and including this point.
    /// Never resets at a day boundary.
    pub distance: f64,

    /// Raw elevation of the point, in meters.
    pub elevation: f64,
}

/// Fold state for the cumulative-distance pass.
///
/// A single `Accumulator` is threaded across every day boundary; the
/// running total and previous point are never reset, so the next
/// day's first sample measures distance from the last point of the
/// last non-empty day.
#[derive(Debug, Default)]
pub struct Accumulator {
    total_km: f64,
    prev: Option<Point<f64>>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            total_km: 0.0,
            prev: None,
        }
    }

    /// Folds one point into the profile and emits its tagged sample.
    ///
    /// Distance between consecutive points is great-circle, ignoring
    /// elevation difference, converted from meters to kilometers. The
    /// first point overall contributes no distance.
    pub fn step(&mut self, day: usize, point: &TrackPoint) -> ElevationPoint {
        if let Some(prev) = self.prev {
            self.total_km += prev.haversine_distance(&point.point) / 1000.0;
        }
        self.prev = Some(point.point);
        ElevationPoint {
            day,
            distance: self.total_km,
            elevation: point.elevation,
        }
    }

    /// Running total, in kilometers.
    pub fn total_distance(&self) -> f64 {
        self.total_km
    }
}

/// Walks all days in ascending index order and returns the full
/// ordered sequence of profile samples.
pub fn accumulate(days: &[Vec<TrackPoint>]) -> Vec<ElevationPoint> {
    let mut acc = Accumulator::new();
    let mut profile = Vec::with_capacity(days.iter().map(Vec::len).sum());
    for (day, points) in days.iter().enumerate() {
        for point in points {
            profile.push(acc.step(day, point));
        }
    }
    debug!(
        "accumulated {} samples over {} days, {:.3} km total",
        profile.len(),
        days.len(),
        acc.total_distance()
    );
    profile
}

/// Partitions samples by day, preserving within-day order.
///
/// `BTreeMap` iteration yields days in ascending numeric order, which
/// is the order downstream rendering walks them in.
pub fn group_by_day(points: &[ElevationPoint]) -> BTreeMap<usize, Vec<ElevationPoint>> {
    let mut days: BTreeMap<usize, Vec<ElevationPoint>> = BTreeMap::new();
    for point in points {
        days.entry(point.day).or_default().push(*point);
    }
    days
}

#[cfg(test)]
mod tests {
    use super::{accumulate, group_by_day, Accumulator, HaversineDistance, TrackPoint};
    use approx::assert_relative_eq;
    use geo::point;

    fn pt(lon: f64, lat: f64, elevation: f64) -> TrackPoint {
        TrackPoint {
            point: point!(x: lon, y: lat),
            elevation,
        }
    }

    // A short stretch of trail heading roughly north.
    fn trail(n: usize) -> Vec<TrackPoint> {
        (0..n)
            .map(|i| pt(-118.29, 36.58 + 0.001 * i as f64, 4000.0 - i as f64))
            .collect()
    }

    #[test]
    fn first_sample_has_zero_distance() {
        let days = vec![trail(3)];
        let profile = accumulate(&days);
        assert_relative_eq!(profile[0].distance, 0.0);
    }

    #[test]
    fn distance_is_monotonic_across_days() {
        let days = vec![trail(5), trail(4), trail(3)];
        let profile = accumulate(&days);
        for pair in profile.windows(2) {
            assert!(pair[1].distance >= pair[0].distance);
        }
    }

    #[test]
    fn samples_are_tagged_with_source_day() {
        let days = vec![trail(2), trail(3), trail(1)];
        let profile = accumulate(&days);
        let tags: Vec<usize> = profile.iter().map(|p| p.day).collect();
        assert_eq!(vec![0, 0, 1, 1, 1, 2], tags);
    }

    #[test]
    fn day_boundary_is_continuous() {
        let day0 = trail(3);
        let day1 = vec![pt(-118.27, 36.60, 4100.0), pt(-118.26, 36.61, 4150.0)];
        let gap_km = day0[2].point.haversine_distance(&day1[0].point) / 1000.0;

        let profile = accumulate(&[day0, day1.clone()]);
        let last_of_day0 = profile[2].distance;
        let first_of_day1 = profile[3].distance;
        assert_relative_eq!(first_of_day1, last_of_day0 + gap_km, max_relative = 1e-12);
    }

    #[test]
    fn empty_day_does_not_reset_the_fold() {
        let day0 = trail(2);
        let day2 = vec![pt(-118.28, 36.59, 3950.0)];
        let gap_km = day0[1].point.haversine_distance(&day2[0].point) / 1000.0;

        let profile = accumulate(&[day0.clone(), Vec::new(), day2]);
        assert_eq!(3, profile.len());
        assert_eq!(2, profile[2].day);
        assert_relative_eq!(
            profile[2].distance,
            profile[1].distance + gap_km,
            max_relative = 1e-12
        );
    }

    #[test]
    fn two_single_point_days() {
        // One point per file: day 1's sample sits exactly the
        // haversine separation (in km) down the distance axis.
        let a = pt(-71.30830716441369, 44.28309806603165, 1000.0);
        let b = pt(-71.2972073283768, 44.25628098424278, 1200.0);
        let separation_km = a.point.haversine_distance(&b.point) / 1000.0;

        let profile = accumulate(&[vec![a], vec![b]]);
        assert_eq!(2, profile.len());
        assert_eq!((0, 1), (profile[0].day, profile[1].day));
        assert_relative_eq!(profile[0].distance, 0.0);
        assert_relative_eq!(profile[1].distance, separation_km);
        assert_relative_eq!(profile[0].elevation, 1000.0);
        assert_relative_eq!(profile[1].elevation, 1200.0);
    }

    #[test]
    fn grouping_partitions_by_day_in_order() {
        let days = vec![trail(2), Vec::new(), trail(3)];
        let profile = accumulate(&days);
        let grouped = group_by_day(&profile);

        // Day 1 is empty and therefore absent from the partition.
        let keys: Vec<usize> = grouped.keys().copied().collect();
        assert_eq!(vec![0, 2], keys);
        assert_eq!(2, grouped[&0].len());
        assert_eq!(3, grouped[&2].len());
        for points in grouped.values() {
            for pair in points.windows(2) {
                assert!(pair[1].distance >= pair[0].distance);
            }
        }
    }

    #[test]
    fn accumulator_step_is_independently_testable() {
        let mut acc = Accumulator::new();
        let first = acc.step(0, &pt(-118.29, 36.58, 4000.0));
        assert_relative_eq!(first.distance, 0.0);
        assert_relative_eq!(acc.total_distance(), 0.0);

        let second = acc.step(0, &pt(-118.29, 36.59, 4010.0));
        assert!(second.distance > 0.0);
        assert_relative_eq!(second.distance, acc.total_distance());
    }
}
