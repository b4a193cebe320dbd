//! GPX track-point extraction.
//!
//! Decoding is delegated to the [gpx] crate; this module only flattens
//! the tracks → segments → points hierarchy of one recording into an
//! order-preserving point list.

use crate::TrekError;
use geo::Point;
use gpx::Gpx;
use log::{debug, warn};
use std::{fs::File, io::BufReader, path::Path};

/// A single normalized track point.
///
/// `point` holds geographic coordinates in degrees (x = longitude,
/// y = latitude); `elevation` is in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub point: Point<f64>,
    pub elevation: f64,
}

/// Reads one day's recording and returns its points in source order.
///
/// No reordering, deduplication, or filtering is performed. A file
/// that decodes to zero points is legal and returns an empty vec.
pub fn read_track_points<P: AsRef<Path>>(path: P) -> Result<Vec<TrackPoint>, TrekError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let gpx =
        gpx::read(BufReader::new(file)).map_err(|e| TrekError::Decode(e, path.to_path_buf()))?;
    let points = flatten(&gpx);
    if points.is_empty() {
        warn!("{} contains no track points", path.display());
    } else {
        debug!("{}: {} track points", path.display(), points.len());
    }
    Ok(points)
}

/// Flattens all tracks and segments of a recording, preserving order.
fn flatten(gpx: &Gpx) -> Vec<TrackPoint> {
    gpx.tracks
        .iter()
        .flat_map(|track| track.segments.iter())
        .flat_map(|segment| segment.points.iter())
        .map(|waypoint| TrackPoint {
            point: waypoint.point(),
            // <ele> is optional in GPX; a point without one normalizes
            // to sea level.
            elevation: waypoint.elevation.unwrap_or(0.0),
        })
        .collect()
}
