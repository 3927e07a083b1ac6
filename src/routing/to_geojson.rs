//! GeoJSON export of computed routes.

use geojson::{Feature, FeatureCollection, Geometry};
use serde_json::json;

use crate::model::{Route, RoutePoint, Step, TravelMode};

/// Polyline color per travel mode, as rendered by map frontends.
fn mode_color(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Driving => "#3388ff",
        TravelMode::Walking => "#33cc33",
        TravelMode::Transit => "#ff6600",
    }
}

impl Route {
    /// Convert the route to a GeoJSON `FeatureCollection`: the full path
    /// polyline, one marker per route point and one line per step.
    pub fn to_geojson(&self) -> FeatureCollection {
        let mut features = Vec::with_capacity(self.steps.len() + self.points.len() + 1);

        features.push(self.path_feature());

        for (index, point) in self.points.iter().enumerate() {
            let kind = if index == 0 {
                "start"
            } else if index == self.points.len() - 1 {
                "end"
            } else {
                "waypoint"
            };
            features.push(point_feature(point, kind));
        }

        for (index, step) in self.steps.iter().enumerate() {
            features.push(step_feature(step, index));
        }

        FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        }
    }

    pub fn to_geojson_string(&self) -> String {
        serde_json::to_string(&self.to_geojson()).unwrap_or_default()
    }

    fn path_feature(&self) -> Feature {
        let value = json!({
            "type": "Feature",
            "geometry": Geometry::new((&self.path).into()),
            "properties": {
                "route_id": self.id,
                "name": self.name,
                "mode": self.mode.as_str(),
                "distance": self.distance_m,
                "duration": self.duration_s,
                "color": mode_color(self.mode),
                "weight": 5,
                "opacity": 0.8,
            }
        });

        Feature::from_json_value(value).unwrap()
    }
}

/// Convert a route point to a GeoJSON marker Feature.
fn point_feature(point: &RoutePoint, kind: &str) -> Feature {
    let value = json!({
        "type": "Feature",
        "geometry": Geometry::new((&point.lnglat).into()),
        "properties": {
            "kind": kind,
            "name": point.name,
        }
    });

    Feature::from_json_value(value).unwrap()
}

/// Convert one step to a GeoJSON Feature carrying its instruction.
fn step_feature(step: &Step, index: usize) -> Feature {
    let value = json!({
        "type": "Feature",
        "geometry": Geometry::new((&step.path).into()),
        "properties": {
            "step_index": index,
            "instruction": step.instruction,
            "distance": step.distance_m,
            "duration": step.duration_s,
        }
    });

    Feature::from_json_value(value).unwrap()
}
