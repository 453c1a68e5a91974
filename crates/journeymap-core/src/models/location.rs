use serde::{Deserialize, Serialize};
use std::fmt;

use super::entry::{EntryType, MapEntry};

/// Identity key of a location, `"{city}-{country}"`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub String);

impl LocationId {
    /// Build the key for a city/country pair
    pub fn from_parts(city: &str, country: &str) -> Self {
        Self(format!("{}-{}", city, country))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LocationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for LocationId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LocationId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A city/country pair aggregating one or more entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLocation {
    pub city: String,
    pub country: String,

    /// `[longitude, latitude]`, GeoJSON order
    pub coordinates: [f64; 2],

    pub entries: Vec<MapEntry>,
}

impl MapLocation {
    pub fn new(
        city: impl Into<String>,
        country: impl Into<String>,
        longitude: f64,
        latitude: f64,
    ) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            coordinates: [longitude, latitude],
            entries: Vec::new(),
        }
    }

    /// Builder-style entry append
    pub fn with_entry(mut self, entry: MapEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn id(&self) -> LocationId {
        LocationId::from_parts(&self.city, &self.country)
    }

    /// Cheap key comparison without allocating a `LocationId`
    pub fn has_id(&self, id: &str) -> bool {
        let city = self.city.as_str();
        id.len() == city.len() + 1 + self.country.len()
            && id.starts_with(city)
            && id[city.len()..].starts_with('-')
            && id.ends_with(self.country.as_str())
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    pub fn has_entry_type(&self, entry_type: EntryType) -> bool {
        self.entries.iter().any(|e| e.entry_type == entry_type)
    }

    /// Distinct entry categories, in order of first appearance
    pub fn entry_types(&self) -> Vec<EntryType> {
        let mut types = Vec::new();
        for entry in &self.entries {
            if !types.contains(&entry.entry_type) {
                types.push(entry.entry_type);
            }
        }
        types
    }

    pub fn entry(&self, entry_id: &str) -> Option<&MapEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    pub fn first_entry(&self) -> Option<&MapEntry> {
        self.entries.first()
    }
}
