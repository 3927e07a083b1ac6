// Re-export key components
pub use crate::error::Error;
pub use crate::geodesy::{angle_difference, bearing, distance, line_length, path_length};
pub use crate::loading::{LayerKind, bounding_box, build_road_graph, feature_line};
pub use crate::model::{
    RoadEdge, RoadGraph, RoadNode, Route, RoutePoint, RouteRequest, Step, TravelMode,
};
pub use crate::routing::{
    InstructionStyle, RandomStyle, plan_route, plan_route_with, shortest_path, simplify,
};

// Fixed routing constants
pub use crate::{
    BBOX_MARGIN_DEG, FALLBACK_JITTER_DEG, FALLBACK_SEGMENT_POINTS, TURN_THRESHOLD_DEG,
    WAYPOINT_SNAP_DEG,
};
