use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::JourneyError;

/// Category of a dated experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Education,
    Work,
    Conference,
    Travel,
}

impl EntryType {
    /// Every category, in display order.
    pub const ALL: [EntryType; 4] =
        [EntryType::Education, EntryType::Work, EntryType::Conference, EntryType::Travel];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Education => "education",
            EntryType::Work => "work",
            EntryType::Conference => "conference",
            EntryType::Travel => "travel",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = JourneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "education" => Ok(EntryType::Education),
            "work" => Ok(EntryType::Work),
            "conference" => Ok(EntryType::Conference),
            "travel" => Ok(EntryType::Travel),
            _ => Err(JourneyError::ConfigInvalid {
                key: "entry_type".to_string(),
                reason: format!(
                    "Invalid entry type: {}. Use education, work, conference, or travel",
                    s
                ),
            }),
        }
    }
}

/// External link attached to an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// A single dated experience at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapEntry {
    /// Identifier, unique within the parent location
    pub id: String,

    /// Category of the experience
    #[serde(rename = "type")]
    pub entry_type: EntryType,

    /// School, employer, event or destination name
    pub institution: String,

    /// Role held (degree, job title, talk title...)
    pub role: String,

    /// Loosely structured range such as "Sep 2018 - Jun 2022" or "Jan 2023 - Present"
    pub duration: String,

    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl MapEntry {
    /// Create an entry with no photos, links or achievements
    pub fn new(
        id: impl Into<String>,
        entry_type: EntryType,
        institution: impl Into<String>,
        role: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            entry_type,
            institution: institution.into(),
            role: role.into(),
            duration: duration.into(),
            photos: Vec::new(),
            links: Vec::new(),
            achievements: Vec::new(),
        }
    }
}
