//! Journeymap Geo - Marker clustering, zoom policy, and geographic lookups
//!
//! Coordinates are raw `[longitude, latitude]` degrees throughout; distances
//! are planar, not great-circle.

pub mod cluster;
pub mod continents;
pub mod export;
pub mod zoom;

pub use cluster::{cluster_locations, planar_distance, Cluster};
pub use continents::{continent_of, Continent};
pub use zoom::{clustering_threshold, clusters_for_zoom, should_cluster};
