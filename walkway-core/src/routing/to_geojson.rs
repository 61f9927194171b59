use geo::line_string;
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::Error;
use crate::model::{WalkNode, WalkwayNetwork};

use super::{RouteLeg, WalkRoute};

impl WalkRoute {
    /// Converts the solved route to a GeoJSON `FeatureCollection`.
    ///
    /// Each leg becomes a LineString feature plus start/end point markers.
    /// A leg whose endpoint is missing from the node table is skipped.
    pub fn to_geojson(&self, network: &WalkwayNetwork) -> Result<FeatureCollection, Error> {
        let mut features = Vec::new();

        for leg in &self.legs {
            let (Some(from), Some(to)) = (network.node(leg.from), network.node(leg.to)) else {
                log::debug!(
                    "Skipping leg {} -> {}: endpoint missing from node table",
                    leg.from,
                    leg.to
                );
                continue;
            };

            features.push(create_leg_feature(leg, from, to)?);
            features.push(create_marker_feature(from, "leg_start")?);
            features.push(create_marker_feature(to, "leg_end")?);
        }

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self, network: &WalkwayNetwork) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(network)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn create_leg_feature(leg: &RouteLeg, from: &WalkNode, to: &WalkNode) -> Result<Feature, Error> {
    let coordinates = line_string![
        (x: from.geometry.x(), y: from.geometry.y()),
        (x: to.geometry.x(), y: to.geometry.y()),
    ];

    let value = json!({
        "type": "Feature",
        "geometry": Geometry::new(GeoJsonValue::from(&coordinates)),
        "properties": {
            "kind": "leg",
            "label": format!("{} -> {}", leg.from, leg.to),
            "distance_m": leg.distance,
            "angle": leg.angle,
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn create_marker_feature(node: &WalkNode, role: &str) -> Result<Feature, Error> {
    let value = json!({
        "type": "Feature",
        "geometry": Geometry::new(GeoJsonValue::from(&node.geometry)),
        "properties": {
            "kind": "marker",
            "role": role,
            "node": node.id,
            "description": node.description.clone().unwrap_or_default(),
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use super::*;

    fn node(id: i64, x: f64, y: f64) -> WalkNode {
        WalkNode {
            id,
            geometry: Point::new(x, y),
            description: None,
        }
    }

    fn leg(from: i64, to: i64) -> RouteLeg {
        RouteLeg {
            from,
            to,
            distance: 10.0,
            angle: 0.0,
        }
    }

    #[test]
    fn renders_line_and_markers_per_leg() {
        let network =
            WalkwayNetwork::new(vec![node(1, 0.0, 0.0), node(2, 1.0, 1.0)], vec![]).unwrap();
        let route = WalkRoute {
            legs: vec![leg(1, 2)],
            total_distance: 10.0,
        };

        let collection = route.to_geojson(&network).unwrap();
        assert_eq!(collection.features.len(), 3);

        let kinds: Vec<_> = collection
            .features
            .iter()
            .map(|f| f.property("kind").unwrap().as_str().unwrap().to_string())
            .collect();
        assert_eq!(kinds, ["leg", "marker", "marker"]);
    }

    #[test]
    fn skips_legs_with_unknown_endpoints() {
        let network =
            WalkwayNetwork::new(vec![node(1, 0.0, 0.0), node(2, 1.0, 1.0)], vec![]).unwrap();
        let route = WalkRoute {
            legs: vec![leg(1, 2), leg(2, 77)],
            total_distance: 20.0,
        };

        let collection = route.to_geojson(&network).unwrap();
        // Only the resolvable leg is rendered.
        assert_eq!(collection.features.len(), 3);
    }

    #[test]
    fn geojson_string_is_a_feature_collection() {
        let network = WalkwayNetwork::new(vec![node(1, 0.0, 0.0)], vec![]).unwrap();
        let route = WalkRoute {
            legs: vec![],
            total_distance: 0.0,
        };

        let text = route.to_geojson_string(&network).unwrap();
        assert!(text.contains("\"FeatureCollection\""));
    }
}
