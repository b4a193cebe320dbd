//! Cumulative multi-day elevation profiles from GPX track recordings.
//!
//! A trek recorded as one GPX file per day becomes a single ordered
//! series of [`ElevationPoint`]s whose distance axis runs continuously
//! across day boundaries: each day's first sample picks up exactly
//! where the previous day's last sample left off.

mod error;
mod profile;
mod track;
mod units;

pub use crate::{
    error::TrekError,
    profile::{accumulate, group_by_day, Accumulator, ElevationPoint},
    track::{read_track_points, TrackPoint},
    units::{Units, FEET_PER_METER, MILES_PER_KILOMETER},
};
