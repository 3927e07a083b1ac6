//! Great-circle helpers shared by the graph builder, the search and the
//! step synthesizer.
//!
//! All formulas use a spherical Earth model. Pure functions; coordinate
//! ranges are not validated, out-of-range input simply flows through the
//! formulas.

use geo::{Coord, LineString, Point};
use itertools::Itertools;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine great-circle distance between two coordinates, in meters.
pub fn distance(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let d_lat = (b.y() - a.y()).to_radians();
    let d_lng = (b.x() - a.x()).to_radians();

    let h = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Initial compass bearing from `a` to `b`, in degrees within `[0, 360)`.
pub fn bearing(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let d_lng = (b.x() - a.x()).to_radians();

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();

    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Signed minimal difference between two bearings, in degrees within
/// `(-180, 180]`.
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let mut diff = (b - a) % 360.0;
    if diff > 180.0 {
        diff -= 360.0;
    } else if diff <= -180.0 {
        diff += 360.0;
    }
    diff
}

/// Cumulative haversine length of a coordinate sequence, in meters.
pub fn path_length(path: &[Coord<f64>]) -> f64 {
    path.iter()
        .map(|c| Point::from(*c))
        .tuple_windows()
        .map(|(a, b)| distance(a, b))
        .sum()
}

/// Cumulative haversine length of a line string, in meters.
pub fn line_length(line: &LineString<f64>) -> f64 {
    path_length(&line.0)
}
