use geo::LineString;
use geojson::FeatureCollection;
use itertools::Itertools;
use log::{debug, info};

use super::features::feature_line;
use crate::geodesy;
use crate::model::{RoadEdge, RoadGraph, RoadNode};

/// Build a routable graph from a collection of line features.
///
/// Features are visited in input order. Every retained feature contributes
/// two fresh endpoint nodes and a reciprocal pair of edges sharing one
/// cumulative geodesic weight, the reverse edge carrying the reversed
/// geometry. Endpoint nodes are never merged across features, even when
/// their coordinates coincide. Non-line geometries and degenerate lines are
/// skipped without error; an empty collection yields an empty graph.
pub fn build_road_graph(network: &FeatureCollection) -> RoadGraph {
    let mut road_graph = RoadGraph::new();
    let mut next_id: u32 = 0;
    let mut skipped = 0usize;

    for feature in &network.features {
        let Some(line) = feature_line(feature) else {
            skipped += 1;
            continue;
        };

        let start = line.0[0];
        let end = line.0[line.0.len() - 1];

        let weight: f64 = line
            .points()
            .tuple_windows()
            .map(|(a, b)| geodesy::distance(a, b))
            .sum();

        let source = road_graph.graph.add_node(RoadNode {
            id: next_id,
            geometry: start.into(),
        });
        let target = road_graph.graph.add_node(RoadNode {
            id: next_id + 1,
            geometry: end.into(),
        });
        next_id += 2;

        let mut reversed = line.0.clone();
        reversed.reverse();

        road_graph.graph.add_edge(
            source,
            target,
            RoadEdge {
                weight,
                geometry: line,
            },
        );
        road_graph.graph.add_edge(
            target,
            source,
            RoadEdge {
                weight,
                geometry: LineString::new(reversed),
            },
        );
    }

    if skipped > 0 {
        debug!("Skipped {skipped} features without usable line geometry");
    }
    info!(
        "Road graph built: {} nodes, {} edges",
        road_graph.node_count(),
        road_graph.edge_count()
    );

    road_graph
}

#[cfg(test)]
mod tests {
    use geo::{Coord, Point};
    use geojson::{Feature, Geometry, Value};
    use petgraph::graph::NodeIndex;
    use petgraph::visit::EdgeRef;

    use super::*;

    fn line_feature(coords: &[(f64, f64)]) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(
                coords.iter().map(|&(x, y)| vec![x, y]).collect(),
            ))),
            id: None,
            properties: None,
            foreign_members: None,
        }
    }

    fn collection(features: Vec<Feature>) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    #[test]
    fn empty_collection_yields_empty_graph() {
        let road_graph = build_road_graph(&collection(vec![]));
        assert!(road_graph.is_empty());
        assert_eq!(road_graph.edge_count(), 0);
    }

    #[test]
    fn each_feature_contributes_two_nodes_and_two_edges() {
        let network = collection(vec![
            line_feature(&[(114.0, 22.0), (114.1, 22.0)]),
            line_feature(&[(114.2, 22.2), (114.3, 22.3)]),
        ]);
        let road_graph = build_road_graph(&network);
        assert_eq!(road_graph.node_count(), 4);
        assert_eq!(road_graph.edge_count(), 4);
    }

    #[test]
    fn shared_coordinates_still_allocate_fresh_nodes() {
        // Two features meeting at the same coordinate stay disconnected.
        let joint = (114.1, 22.1);
        let network = collection(vec![
            line_feature(&[(114.0, 22.0), joint]),
            line_feature(&[joint, (114.2, 22.2)]),
        ]);
        let road_graph = build_road_graph(&network);
        assert_eq!(road_graph.node_count(), 4);

        let ids: Vec<u32> = road_graph
            .graph
            .node_indices()
            .map(|i| road_graph.graph[i].id)
            .collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn degenerate_features_are_skipped() {
        let point = Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![114.0, 22.0]))),
            id: None,
            properties: None,
            foreign_members: None,
        };
        let short = line_feature(&[(114.0, 22.0)]);
        let good = line_feature(&[(114.0, 22.0), (114.1, 22.0)]);

        let road_graph = build_road_graph(&collection(vec![point, short, good]));
        assert_eq!(road_graph.node_count(), 2);
        assert_eq!(road_graph.edge_count(), 2);
    }

    #[test]
    fn reciprocal_edges_share_the_cumulative_weight() {
        let coords = [(114.0, 22.0), (114.1, 22.0), (114.1, 22.1)];
        let road_graph = build_road_graph(&collection(vec![line_feature(&coords)]));

        let expected = crate::geodesy::distance(Point::new(114.0, 22.0), Point::new(114.1, 22.0))
            + crate::geodesy::distance(Point::new(114.1, 22.0), Point::new(114.1, 22.1));

        let forward = road_graph.edges(NodeIndex::new(0)).next().unwrap();
        let backward = road_graph.edges(NodeIndex::new(1)).next().unwrap();

        assert!((forward.weight().weight - expected).abs() < 1e-9);
        assert_eq!(forward.weight().weight, backward.weight().weight);
    }

    #[test]
    fn reverse_edge_geometry_is_reversed() {
        let coords = [(114.0, 22.0), (114.05, 22.02), (114.1, 22.0)];
        let road_graph = build_road_graph(&collection(vec![line_feature(&coords)]));

        let backward = road_graph.edges(NodeIndex::new(1)).next().unwrap();
        let geometry = &backward.weight().geometry.0;
        assert_eq!(geometry[0], Coord { x: 114.1, y: 22.0 });
        assert_eq!(geometry[2], Coord { x: 114.0, y: 22.0 });
    }
}
