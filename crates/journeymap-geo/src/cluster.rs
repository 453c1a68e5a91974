//! Greedy single-pass clustering of location markers.
//!
//! Locations are visited in input order. Each unassigned location seeds a
//! cluster and claims every other unassigned location within `threshold`
//! degrees of it. Membership therefore depends on visitation order: with a
//! chain of points closer than `threshold` pairwise but spanning more than
//! that, different orders produce different groupings.

use geo::{Distance, Euclidean, Point};
use journeymap_core::models::MapLocation;
use serde::Serialize;

/// Separator between member keys in a cluster id
pub const CLUSTER_ID_SEPARATOR: &str = "|";

/// Group of nearby locations collapsed into one map point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster<'a> {
    /// Member location keys joined by [`CLUSTER_ID_SEPARATOR`], in membership order
    pub id: String,

    /// Unweighted mean of member coordinates, `[longitude, latitude]`
    pub coordinates: [f64; 2],

    /// Seed location first, then claimed neighbours in input order
    pub locations: Vec<&'a MapLocation>,
}

impl Cluster<'_> {
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn is_singleton(&self) -> bool {
        self.locations.len() == 1
    }
}

/// Euclidean distance on raw `[lng, lat]` pairs, in degrees
pub fn planar_distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    Euclidean.distance(Point::new(a[0], a[1]), Point::new(b[0], b[1]))
}

/// Cluster locations whose coordinates lie within `threshold` of a seed.
///
/// Accepts a slice of locations or any iterator of references, such as a
/// filtered view. The result covers every input location exactly once.
pub fn cluster_locations<'a, I>(locations: I, threshold: f64) -> Vec<Cluster<'a>>
where
    I: IntoIterator<Item = &'a MapLocation>,
{
    let locations: Vec<&'a MapLocation> = locations.into_iter().collect();
    let mut processed = vec![false; locations.len()];
    let mut clusters = Vec::new();

    for (seed_idx, seed) in locations.iter().enumerate() {
        if processed[seed_idx] {
            continue;
        }
        processed[seed_idx] = true;

        let mut members = vec![*seed];
        for (idx, &other) in locations.iter().enumerate() {
            if processed[idx] {
                continue;
            }
            if planar_distance(seed.coordinates, other.coordinates) <= threshold {
                processed[idx] = true;
                members.push(other);
            }
        }

        clusters.push(build_cluster(members));
    }

    tracing::debug!(
        locations = locations.len(),
        clusters = clusters.len(),
        threshold,
        "Clustered locations"
    );

    clusters
}

fn build_cluster<'a>(members: Vec<&'a MapLocation>) -> Cluster<'a> {
    let count = members.len() as f64;
    let (sum_lng, sum_lat) = members
        .iter()
        .fold((0.0, 0.0), |(lng, lat), l| (lng + l.longitude(), lat + l.latitude()));

    let id = members
        .iter()
        .map(|l| l.id().0)
        .collect::<Vec<_>>()
        .join(CLUSTER_ID_SEPARATOR);

    Cluster { id, coordinates: [sum_lng / count, sum_lat / count], locations: members }
}
