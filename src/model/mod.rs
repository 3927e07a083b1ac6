//! Data model for road-network route planning
//!
//! Contains the per-request road graph and the route request/result types.

pub mod road;
pub mod route;

pub use road::{RoadEdge, RoadGraph, RoadNode};
pub use route::{Route, RoutePoint, RouteRequest, Step, TravelMode};
