//! Display-unit conversion.
//!
//! Profiles are always stored metric (kilometers / meters); imperial
//! conversion is applied per point at render time only.

pub const MILES_PER_KILOMETER: f64 = 0.621_371;
pub const FEET_PER_METER: f64 = 3.280_84;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    /// Rescales one (distance, elevation) pair for display.
    pub fn convert(self, distance_km: f64, elevation_m: f64) -> (f64, f64) {
        match self {
            Self::Metric => (distance_km, elevation_m),
            Self::Imperial => (
                distance_km * MILES_PER_KILOMETER,
                elevation_m * FEET_PER_METER,
            ),
        }
    }

    pub fn distance_label(self) -> &'static str {
        match self {
            Self::Metric => "Distance (km)",
            Self::Imperial => "Distance (mi)",
        }
    }

    pub fn elevation_label(self) -> &'static str {
        match self {
            Self::Metric => "Elevation (m)",
            Self::Imperial => "Elevation (ft)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Units, FEET_PER_METER, MILES_PER_KILOMETER};
    use approx::assert_relative_eq;

    #[test]
    fn metric_is_identity() {
        assert_eq!((12.5, 1917.0), Units::Metric.convert(12.5, 1917.0));
    }

    #[test]
    fn imperial_round_trips() {
        let (mi, ft) = Units::Imperial.convert(12.5, 1917.0);
        assert_relative_eq!(mi / MILES_PER_KILOMETER, 12.5, max_relative = 1e-12);
        assert_relative_eq!(ft / FEET_PER_METER, 1917.0, max_relative = 1e-12);
    }

    #[test]
    fn labels_follow_units() {
        assert_eq!("Distance (km)", Units::Metric.distance_label());
        assert_eq!("Elevation (ft)", Units::Imperial.elevation_label());
    }
}
