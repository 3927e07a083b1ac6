//! Line-feature extraction from GeoJSON input.

use geo::{Coord, LineString, Point};
use geojson::{Feature, Value};

use crate::BBOX_MARGIN_DEG;

/// Transport layers served by the upstream WFS provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Road layer
    Road,
    /// Railway layer
    Railway,
}

impl LayerKind {
    /// Layer name used in the provider's WFS `typename` parameter.
    pub fn type_name(self) -> &'static str {
        match self {
            LayerKind::Road => "LRDL",
            LayerKind::Railway => "LRRL",
        }
    }
}

/// Lon/lat bounding box around two points, expanded by a fixed margin.
///
/// Returned as `[min_lng, min_lat, max_lng, max_lat]`, the order the
/// geometry source expects for its bbox query.
pub fn bounding_box(a: Point<f64>, b: Point<f64>) -> [f64; 4] {
    [
        a.x().min(b.x()) - BBOX_MARGIN_DEG,
        a.y().min(b.y()) - BBOX_MARGIN_DEG,
        a.x().max(b.x()) + BBOX_MARGIN_DEG,
        a.y().max(b.y()) + BBOX_MARGIN_DEG,
    ]
}

/// Extract the usable line geometry of a feature.
///
/// Returns the coordinate sequence of a `LineString`, or of the first member
/// of a `MultiLineString`. Any other geometry, and sequences with fewer than
/// two positions, yield `None`.
pub fn feature_line(feature: &Feature) -> Option<LineString<f64>> {
    let geometry = feature.geometry.as_ref()?;
    let positions = match &geometry.value {
        Value::LineString(positions) => positions.as_slice(),
        Value::MultiLineString(lines) => lines.first()?.as_slice(),
        _ => return None,
    };

    let coords: Vec<Coord<f64>> = positions
        .iter()
        .filter(|position| position.len() >= 2)
        .map(|position| Coord {
            x: position[0],
            y: position[1],
        })
        .collect();

    if coords.len() < 2 {
        return None;
    }
    Some(LineString::new(coords))
}

#[cfg(test)]
mod tests {
    use geojson::{Feature, Geometry};

    use super::*;

    fn feature(value: Value) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(value)),
            id: None,
            properties: None,
            foreign_members: None,
        }
    }

    #[test]
    fn bounding_box_brackets_both_points() {
        let bbox = bounding_box(Point::new(114.0579, 22.5431), Point::new(113.9355, 22.4931));
        assert_eq!(bbox, [113.8855, 22.4431, 114.1079, 22.5931]);
    }

    #[test]
    fn layer_type_names() {
        assert_eq!(LayerKind::Road.type_name(), "LRDL");
        assert_eq!(LayerKind::Railway.type_name(), "LRRL");
    }

    #[test]
    fn line_string_is_extracted() {
        let f = feature(Value::LineString(vec![
            vec![114.0, 22.0],
            vec![114.1, 22.1],
        ]));
        let line = feature_line(&f).unwrap();
        assert_eq!(line.0.len(), 2);
        assert_eq!(line.0[0], Coord { x: 114.0, y: 22.0 });
    }

    #[test]
    fn multi_line_string_uses_first_member() {
        let f = feature(Value::MultiLineString(vec![
            vec![vec![114.0, 22.0], vec![114.1, 22.1]],
            vec![vec![115.0, 23.0], vec![115.1, 23.1]],
        ]));
        let line = feature_line(&f).unwrap();
        assert_eq!(line.0[0], Coord { x: 114.0, y: 22.0 });
        assert_eq!(line.0[1], Coord { x: 114.1, y: 22.1 });
    }

    #[test]
    fn non_line_geometries_are_rejected() {
        assert!(feature_line(&feature(Value::Point(vec![114.0, 22.0]))).is_none());
        assert!(
            feature_line(&feature(Value::Polygon(vec![vec![
                vec![0.0, 0.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0],
                vec![0.0, 0.0],
            ]])))
            .is_none()
        );
    }

    #[test]
    fn degenerate_lines_are_rejected() {
        assert!(feature_line(&feature(Value::LineString(vec![vec![114.0, 22.0]]))).is_none());
        assert!(feature_line(&feature(Value::LineString(vec![]))).is_none());
        let missing_geometry = Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: None,
            foreign_members: None,
        };
        assert!(feature_line(&missing_geometry).is_none());
    }
}
