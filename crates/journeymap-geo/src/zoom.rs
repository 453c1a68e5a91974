//! Zoom-dependent clustering policy.

use journeymap_core::models::MapLocation;

use crate::cluster::{cluster_locations, Cluster};

/// Zoom level at and above which markers render individually
pub const CLUSTER_MAX_ZOOM: f64 = 4.0;

/// Clustering is only worthwhile while zoomed out
pub fn should_cluster(zoom: f64) -> bool {
    zoom < CLUSTER_MAX_ZOOM
}

/// Distance threshold in degrees for a zoom level.
///
/// A monotonic step function: the further out, the wider the net.
pub fn clustering_threshold(zoom: f64) -> f64 {
    if zoom < 2.0 {
        5.0
    } else if zoom < 3.0 {
        3.0
    } else if zoom < 4.0 {
        2.0
    } else {
        1.0
    }
}

/// Marker groups to draw at `zoom`.
///
/// Below [`CLUSTER_MAX_ZOOM`] locations are clustered with the zoom's
/// threshold; otherwise every location becomes its own singleton group.
pub fn clusters_for_zoom<'a, I>(locations: I, zoom: f64) -> Vec<Cluster<'a>>
where
    I: IntoIterator<Item = &'a MapLocation>,
{
    if should_cluster(zoom) {
        return cluster_locations(locations, clustering_threshold(zoom));
    }

    locations
        .into_iter()
        .map(|location| Cluster {
            id: location.id().0,
            coordinates: location.coordinates,
            locations: vec![location],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_steps() {
        assert_eq!(clustering_threshold(0.5), 5.0);
        assert_eq!(clustering_threshold(1.99), 5.0);
        assert_eq!(clustering_threshold(2.0), 3.0);
        assert_eq!(clustering_threshold(3.0), 2.0);
        assert_eq!(clustering_threshold(3.99), 2.0);
        assert_eq!(clustering_threshold(4.0), 1.0);
        assert_eq!(clustering_threshold(10.0), 1.0);
    }

    #[test]
    fn test_should_cluster() {
        assert!(should_cluster(1.8));
        assert!(should_cluster(3.9));
        assert!(!should_cluster(4.0));
        assert!(!should_cluster(8.0));
    }

    #[test]
    fn test_high_zoom_renders_individually() {
        let locations = vec![
            MapLocation::new("Waterloo", "Canada", -80.52, 43.46),
            MapLocation::new("Toronto", "Canada", -79.38, 43.65),
        ];

        let zoomed_out = clusters_for_zoom(&locations, 1.8);
        assert_eq!(zoomed_out.len(), 1);
        assert_eq!(zoomed_out[0].id, "Waterloo-Canada|Toronto-Canada");

        let zoomed_in = clusters_for_zoom(&locations, 6.0);
        assert_eq!(zoomed_in.len(), 2);
        assert!(zoomed_in.iter().all(|c| c.is_singleton()));
        assert_eq!(zoomed_in[1].coordinates, [-79.38, 43.65]);
    }
}
