//! Road network components - nodes and edges

use geo::{LineString, Point};

/// Road graph node, one endpoint of a road segment.
#[derive(Debug, Clone)]
pub struct RoadNode {
    /// Synthetic id, assigned in build order
    pub id: u32,
    /// Node coordinates
    pub geometry: Point<f64>,
}

/// Road graph edge (one directed traversal of a road segment).
#[derive(Debug, Clone)]
pub struct RoadEdge {
    /// Geodesic length of the segment in meters
    pub weight: f64,
    /// Segment geometry from source to target
    pub geometry: LineString<f64>,
}

impl RoadEdge {
    pub fn length_m(&self) -> f64 {
        self.weight
    }
}
