use geo::{Coord, Point};

use crate::TURN_THRESHOLD_DEG;
use crate::geodesy::{angle_difference, bearing};

/// Reduce a dense path to the indices of its key points.
///
/// An interior point becomes a key point when the bearing change between its
/// incoming and outgoing segments exceeds the turn threshold. The first and
/// last indices are always included, so for a path of two or more points the
/// result is strictly increasing and brackets the whole path.
pub fn simplify(path: &[Coord<f64>]) -> Vec<usize> {
    if path.len() <= 2 {
        return vec![0, path.len().saturating_sub(1)];
    }

    let mut key_points = vec![0];

    for i in 1..path.len() - 1 {
        let incoming = bearing(Point::from(path[i - 1]), Point::from(path[i]));
        let outgoing = bearing(Point::from(path[i]), Point::from(path[i + 1]));

        if angle_difference(incoming, outgoing).abs() > TURN_THRESHOLD_DEG {
            key_points.push(i);
        }
    }

    key_points.push(path.len() - 1);
    key_points
}
