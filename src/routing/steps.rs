//! Turn-by-turn step synthesis over a resolved path.

use geo::{Coord, LineString};
use log::debug;

use crate::WAYPOINT_SNAP_DEG;
use crate::geodesy;
use crate::model::{RoutePoint, Step, TravelMode};

use super::instructions::InstructionStyle;
use super::simplify::simplify;

/// Cut the resolved path at its key points and emit one instruction step
/// per consecutive key-point pair.
///
/// The first step names the departure point and the last the arrival point;
/// a route with a single step names both. A waypoint lying close to a
/// step's opening key point is mentioned in that step's instruction.
pub(crate) fn synthesize_steps(
    path: &[Coord<f64>],
    start: &RoutePoint,
    end: &RoutePoint,
    waypoints: &[RoutePoint],
    mode: TravelMode,
    style: &mut dyn InstructionStyle,
) -> Vec<Step> {
    let key_points = simplify(path);
    let mut steps = Vec::with_capacity(key_points.len().saturating_sub(1));

    debug!("Synthesizing steps over {} key points", key_points.len());

    for (step_index, pair) in key_points.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let segment = &path[from..=to];

        let distance = geodesy::path_length(segment);

        let first = step_index == 0;
        let last = to == path.len() - 1;
        let via = near_waypoint(path[from], waypoints);
        let instruction = instruction_text(style, start, end, via, first, last);

        steps.push(Step {
            instruction,
            distance_m: distance.round() as u32,
            duration_s: (distance / mode.speed_m_s()).round() as u32,
            path: LineString::new(segment.to_vec()),
        });
    }

    steps
}

/// The first waypoint within the snap threshold of `point`, if any.
///
/// Proximity is a plain Euclidean test in degrees; at this threshold the
/// difference from geodesic distance does not matter.
fn near_waypoint<'a>(point: Coord<f64>, waypoints: &'a [RoutePoint]) -> Option<&'a RoutePoint> {
    waypoints.iter().find(|waypoint| {
        let dx = point.x - waypoint.lnglat.x();
        let dy = point.y - waypoint.lnglat.y();
        (dx * dx + dy * dy).sqrt() < WAYPOINT_SNAP_DEG
    })
}

fn instruction_text(
    style: &mut dyn InstructionStyle,
    start: &RoutePoint,
    end: &RoutePoint,
    via: Option<&RoutePoint>,
    first: bool,
    last: bool,
) -> String {
    let compass = style.compass();
    let maneuver = style.maneuver();

    match (first, last) {
        (true, true) => format!(
            "Depart from {} heading {compass}, then {maneuver} and arrive at {}",
            start.name, end.name
        ),
        (true, false) => {
            format!("Depart from {} heading {compass} and {maneuver}", start.name)
        }
        (false, true) => format!("Head {compass}, {maneuver} and arrive at {}", end.name),
        (false, false) => {
            let road = style.road();
            match via {
                Some(waypoint) => format!(
                    "Pass {}, then head {compass} {road} and {maneuver}",
                    waypoint.name
                ),
                None => format!("Head {compass} {road} and {maneuver}"),
            }
        }
    }
}
