//! Turning raw line-feature collections into a routable graph.

mod builder;
mod features;

pub use builder::build_road_graph;
pub use features::{LayerKind, bounding_box, feature_line};
