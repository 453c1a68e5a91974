use serde::{Deserialize, Serialize, Serializer};
use std::ops::Deref;
use std::sync::Arc;

use super::location::MapLocation;

/// Dataset validation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValidityMode {
    /// Strict validation - reject the dataset on any violation
    Strict,
    /// Lenient validation - log the violations and fall back to an empty dataset
    #[default]
    Lenient,
}

/// Immutable, shareable list of locations.
///
/// Cloning is cheap; clones share the same allocation, which is what
/// [`MapData::ptr_eq`] compares when derived views are memoized.
#[derive(Debug, Clone, Default)]
pub struct MapData {
    locations: Arc<Vec<MapLocation>>,
}

impl MapData {
    pub fn new(locations: Vec<MapLocation>) -> Self {
        Self { locations: Arc::new(locations) }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn locations(&self) -> &[MapLocation] {
        &self.locations
    }

    /// Total number of entries across all locations
    pub fn entry_count(&self) -> usize {
        self.locations.iter().map(|l| l.entries.len()).sum()
    }

    /// Whether two handles refer to the same loaded dataset
    pub fn ptr_eq(&self, other: &MapData) -> bool {
        Arc::ptr_eq(&self.locations, &other.locations)
    }
}

impl Deref for MapData {
    type Target = [MapLocation];

    fn deref(&self) -> &Self::Target {
        &self.locations
    }
}

impl From<Vec<MapLocation>> for MapData {
    fn from(locations: Vec<MapLocation>) -> Self {
        Self::new(locations)
    }
}

impl FromIterator<MapLocation> for MapData {
    fn from_iter<I: IntoIterator<Item = MapLocation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Serialize for MapData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.locations.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MapData {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<MapLocation>::deserialize(deserializer).map(MapData::new)
    }
}
