//! Orchestration of one routing request.

use geo::{Coord, LineString, Point};
use geojson::FeatureCollection;
use log::{debug, warn};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::Error;
use crate::geodesy;
use crate::loading::build_road_graph;
use crate::model::{Route, RouteRequest, TravelMode};

use super::dijkstra::shortest_path;
use super::fallback::fallback_path;
use super::instructions::{InstructionStyle, RandomStyle};
use super::steps::synthesize_steps;

/// Phases of one routing request, in the order they are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    BuildingGraph,
    Searching,
    Found,
    Fallback,
    StepSynthesis,
    Complete,
}

fn enter(phase: Phase) {
    debug!("Route phase: {phase:?}");
}

/// Plan a route with the default randomized instruction wording.
///
/// # Errors
///
/// Returns an input error when the request is missing its start or end
/// point, and a generic computation error when final assembly fails. Graph
/// or search degradation never surfaces; the route falls back to a
/// synthetic path instead.
pub fn plan_route(request: &RouteRequest, network: &FeatureCollection) -> Result<Route, Error> {
    plan_route_with(request, network, &mut RandomStyle::new())
}

/// Plan a route using the supplied instruction style.
pub fn plan_route_with(
    request: &RouteRequest,
    network: &FeatureCollection,
    style: &mut dyn InstructionStyle,
) -> Result<Route, Error> {
    let start = request.start.as_ref().ok_or(Error::MissingStart)?;
    let end = request.end.as_ref().ok_or(Error::MissingEnd)?;

    debug!(
        "Planning route from {} to {} ({} mode)",
        start.name, end.name, request.mode
    );

    let mut rng = SmallRng::from_entropy();

    // Only driving mode routes over the road network.
    let road = if request.mode == TravelMode::Driving {
        road_path(network, start.lnglat, end.lnglat)
    } else {
        None
    };

    let path = match road {
        Some(path) => {
            enter(Phase::Found);
            path
        }
        None => {
            enter(Phase::Fallback);
            let via: Vec<Point<f64>> = std::iter::once(start.lnglat)
                .chain(request.waypoints.iter().map(|w| w.lnglat))
                .chain(std::iter::once(end.lnglat))
                .collect();
            fallback_path(&via, &mut rng)
        }
    };

    enter(Phase::StepSynthesis);
    let total_distance = geodesy::path_length(&path);
    if path.len() < 2 || !total_distance.is_finite() {
        warn!("Route assembly failed: degenerate path or non-finite distance");
        return Err(Error::ComputationFailed);
    }

    let steps = synthesize_steps(
        &path,
        start,
        end,
        &request.waypoints,
        request.mode,
        style,
    );

    enter(Phase::Complete);
    let mut points = Vec::with_capacity(request.waypoints.len() + 2);
    points.push(start.clone());
    points.extend(request.waypoints.iter().cloned());
    points.push(end.clone());

    Ok(Route {
        id: route_id(&mut rng),
        name: format!("{} to {}", start.name, end.name),
        distance_m: total_distance.round() as u32,
        duration_s: (total_distance / request.mode.speed_m_s()).round() as u32,
        mode: request.mode,
        points,
        path: LineString::new(path),
        steps,
    })
}

/// Graph-based routing between two coordinates.
///
/// Any degradation (empty network, empty graph, unreachable target) yields
/// `None`, and the caller takes the fallback path instead.
fn road_path(
    network: &FeatureCollection,
    start: Point<f64>,
    end: Point<f64>,
) -> Option<Vec<Coord<f64>>> {
    enter(Phase::BuildingGraph);
    if network.features.is_empty() {
        debug!("Geometry source returned no features");
        return None;
    }

    let graph = build_road_graph(network);
    if graph.is_empty() {
        warn!("Road network produced an empty graph; falling back");
        return None;
    }

    enter(Phase::Searching);
    let source = graph.nearest_node(start)?;
    let target = graph.nearest_node(end)?;
    debug!(
        "Snapped endpoints to nodes {} and {}",
        source.index(),
        target.index()
    );

    let mut path = shortest_path(&graph, source, target)?;
    debug!("Shortest path found with {} coordinates", path.len());

    // Bracket with the exact request endpoints.
    path.insert(0, start.0);
    path.push(end.0);

    Some(path)
}

const ID_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Eight pseudo-random base-36 characters; unique enough per process run.
fn route_id(rng: &mut SmallRng) -> String {
    (0..8)
        .map(|_| ID_CHARS[rng.gen_range(0..ID_CHARS.len())] as char)
        .collect()
}
