//! Route-planning engine over raw road-network geometry.
//!
//! Given a start point, an end point, optional waypoints and a travel mode,
//! the engine builds a routable graph from a collection of line features,
//! finds a shortest path across it and synthesizes a turn-by-turn route with
//! distance and duration estimates. When no usable road geometry is
//! available it degrades to a synthetic interpolated path instead of
//! failing.
//!
//! The crate performs no I/O: the caller fetches the geometry (typically a
//! WFS road layer queried with [`bounding_box`]) and consumes the resulting
//! [`Route`]. A graph is built fresh for every request and discarded with
//! it; nothing is cached or shared across requests.

pub mod error;
pub mod geodesy;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{LayerKind, bounding_box, build_road_graph};
pub use model::{RoadGraph, Route, RoutePoint, RouteRequest, Step, TravelMode};
pub use routing::{InstructionStyle, RandomStyle, plan_route, plan_route_with, shortest_path};

/// Bearing change above which an interior path point counts as a turn, in
/// degrees.
pub const TURN_THRESHOLD_DEG: f64 = 20.0;

/// Number of points making up one synthetic fallback segment.
pub const FALLBACK_SEGMENT_POINTS: usize = 10;

/// Bound of the jitter applied to interior fallback points, in degrees per
/// axis.
pub const FALLBACK_JITTER_DEG: f64 = 0.005;

/// Euclidean distance in degrees under which a waypoint is mentioned in a
/// step instruction.
pub const WAYPOINT_SNAP_DEG: f64 = 0.001;

/// Margin added on every side of the endpoints when computing the feature
/// query bounding box.
pub const BBOX_MARGIN_DEG: f64 = 0.05;
