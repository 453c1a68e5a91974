//! GeoJSON export of locations and clusters for map renderers.

use geojson::{Feature, FeatureCollection, Geometry};
use journeymap_core::models::MapLocation;
use serde_json::{json, Map, Value as JsonValue};

use crate::cluster::Cluster;

fn point(coordinates: [f64; 2]) -> Option<Geometry> {
    Geometry::from_json_value(json!({ "type": "Point", "coordinates": coordinates })).ok()
}

/// One point feature per location
pub fn locations_to_geojson(locations: &[MapLocation]) -> FeatureCollection {
    let features = locations
        .iter()
        .map(|location| {
            let mut properties = Map::new();
            properties.insert("key".to_string(), JsonValue::from(location.id().0));
            properties.insert("city".to_string(), JsonValue::from(location.city.clone()));
            properties.insert("country".to_string(), JsonValue::from(location.country.clone()));
            properties.insert("entry_count".to_string(), JsonValue::from(location.entries.len()));
            properties.insert(
                "entry_types".to_string(),
                JsonValue::from(
                    location.entry_types().iter().map(|t| t.as_str()).collect::<Vec<_>>(),
                ),
            );

            Feature {
                geometry: point(location.coordinates),
                properties: Some(properties),
                id: None,
                bbox: None,
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection { features, bbox: None, foreign_members: None }
}

/// One point feature per cluster, positioned at its centroid
pub fn clusters_to_geojson(clusters: &[Cluster<'_>]) -> FeatureCollection {
    let features = clusters
        .iter()
        .map(|cluster| {
            let mut properties = Map::new();
            properties.insert("key".to_string(), JsonValue::from(cluster.id.clone()));
            properties.insert("member_count".to_string(), JsonValue::from(cluster.len()));
            properties.insert(
                "members".to_string(),
                JsonValue::from(
                    cluster.locations.iter().map(|l| l.id().0).collect::<Vec<_>>(),
                ),
            );

            Feature {
                geometry: point(cluster.coordinates),
                properties: Some(properties),
                id: None,
                bbox: None,
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection { features, bbox: None, foreign_members: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::cluster_locations;

    #[test]
    fn test_locations_feature_collection() {
        let locations = vec![MapLocation::new("Lisbon", "Portugal", -9.14, 38.72)];
        let fc = locations_to_geojson(&locations);

        assert_eq!(fc.features.len(), 1);
        let value = serde_json::to_value(&fc).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["geometry"]["coordinates"][0], -9.14);
        assert_eq!(value["features"][0]["properties"]["key"], "Lisbon-Portugal");
    }

    #[test]
    fn test_clusters_feature_collection() {
        let locations = vec![
            MapLocation::new("A", "X", 0.0, 0.0),
            MapLocation::new("B", "X", 1.0, 1.0),
        ];
        let clusters = cluster_locations(&locations, 2.0);
        let value = serde_json::to_value(clusters_to_geojson(&clusters)).unwrap();

        assert_eq!(value["features"][0]["properties"]["member_count"], 2);
        assert_eq!(value["features"][0]["geometry"]["coordinates"][1], 0.5);
    }
}
