use std::{cmp::Ordering, collections::BinaryHeap};

use geo::Coord;
use hashbrown::HashMap;
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

use crate::model::RoadGraph;

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeIndex,
}

impl Eq for State {}

// Min-heap by cost (reversed from standard Rust BinaryHeap); the node index
// breaks exact ties to keep the ordering total.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm over the road graph.
///
/// Returns the coordinate sequence of the minimum-weight path from `source`
/// to `target`, stitched from the geometry of every traversed edge so the
/// result follows the true road shape rather than node-to-node straight
/// lines. `None` when the target cannot be reached.
pub fn shortest_path(
    graph: &RoadGraph,
    source: NodeIndex,
    target: NodeIndex,
) -> Option<Vec<Coord<f64>>> {
    let estimated_nodes = graph.node_count().min(1000);
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, (NodeIndex, EdgeIndex)> =
        HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    heap.push(State {
        cost: 0.0,
        node: source,
    });
    distances.insert(source, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // Target settled; its predecessor chain is final.
        if node == target {
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().weight;

            // Add or update distance if better using Entry API
            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, (node, edge.id()));
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, (node, edge.id()));
                    }
                }
            }
        }
    }

    reconstruct(graph, &predecessors, source, target)
}

/// Walk the predecessor chain from `target` back to `source` and stitch the
/// stored edge geometries front to back.
fn reconstruct(
    graph: &RoadGraph,
    predecessors: &HashMap<NodeIndex, (NodeIndex, EdgeIndex)>,
    source: NodeIndex,
    target: NodeIndex,
) -> Option<Vec<Coord<f64>>> {
    // Unreachable target, or target snapped onto the source node itself.
    if !predecessors.contains_key(&target) {
        return None;
    }

    let mut chain = Vec::new();
    let mut current = target;
    while current != source {
        let &(previous, edge) = predecessors.get(&current)?;
        chain.push(edge);
        current = previous;
    }
    chain.reverse();

    let mut path: Vec<Coord<f64>> = Vec::new();
    for edge in chain {
        let geometry = &graph.graph[edge].geometry.0;
        // Consecutive edges share the joint node coordinate; keep one copy.
        let skip = usize::from(!path.is_empty());
        path.extend_from_slice(&geometry[skip..]);
    }

    Some(path)
}
