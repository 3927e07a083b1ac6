//! Road graph arena and nearest-node snapping.

use geo::Point;
use petgraph::Directed;
use petgraph::graph::{Edges, Graph, NodeIndex};

use super::{RoadEdge, RoadNode};
use crate::geodesy;

/// Directed graph of road segments.
///
/// Built fresh for every routing request and discarded with it; no graph
/// state is shared or cached across requests. Node ids are synthetic and
/// unique within one build. Nodes are never merged across features, even
/// when their coordinates coincide, so each feature forms its own
/// component.
#[derive(Debug)]
pub struct RoadGraph {
    pub graph: Graph<RoadNode, RoadEdge>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Outgoing edges of a node.
    pub fn edges(&self, node: NodeIndex) -> Edges<'_, RoadEdge, Directed> {
        self.graph.edges(node)
    }

    pub fn node(&self, index: NodeIndex) -> Option<&RoadNode> {
        self.graph.node_weight(index)
    }

    /// Snap an arbitrary coordinate to the closest graph node.
    ///
    /// Brute-force scan over every node by geodesic distance; ties keep the
    /// first node seen. `None` for an empty graph.
    pub fn nearest_node(&self, point: Point<f64>) -> Option<NodeIndex> {
        let mut best: Option<(NodeIndex, f64)> = None;

        for index in self.graph.node_indices() {
            let d = geodesy::distance(point, self.graph[index].geometry);
            match best {
                Some((_, min)) if d >= min => {}
                _ => best = Some((index, d)),
            }
        }

        best.map(|(index, _)| index)
    }
}

impl Default for RoadGraph {
    fn default() -> Self {
        Self::new()
    }
}
