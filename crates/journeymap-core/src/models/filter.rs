use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::entry::EntryType;
use crate::error::JourneyError;

/// Active category constraining which locations and entries are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    All,
    Education,
    Work,
    Conference,
    Travel,
}

impl FilterType {
    /// Every filter, in the order the filter bar shows them.
    pub const ALL: [FilterType; 5] = [
        FilterType::All,
        FilterType::Education,
        FilterType::Work,
        FilterType::Conference,
        FilterType::Travel,
    ];

    /// The entry category this filter narrows to, or `None` for `All`.
    pub fn entry_type(&self) -> Option<EntryType> {
        match self {
            FilterType::All => None,
            FilterType::Education => Some(EntryType::Education),
            FilterType::Work => Some(EntryType::Work),
            FilterType::Conference => Some(EntryType::Conference),
            FilterType::Travel => Some(EntryType::Travel),
        }
    }

    /// Whether an entry of the given category passes this filter
    pub fn accepts(&self, entry_type: EntryType) -> bool {
        self.entry_type().map_or(true, |t| t == entry_type)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::All => "all",
            FilterType::Education => "education",
            FilterType::Work => "work",
            FilterType::Conference => "conference",
            FilterType::Travel => "travel",
        }
    }

    /// Human label used by the filter bar
    pub fn label(&self) -> &'static str {
        match self {
            FilterType::All => "All",
            FilterType::Education => "Education",
            FilterType::Work => "Work",
            FilterType::Conference => "Conference",
            FilterType::Travel => "Travel",
        }
    }
}

impl From<EntryType> for FilterType {
    fn from(entry_type: EntryType) -> Self {
        match entry_type {
            EntryType::Education => FilterType::Education,
            EntryType::Work => FilterType::Work,
            EntryType::Conference => FilterType::Conference,
            EntryType::Travel => FilterType::Travel,
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterType {
    type Err = JourneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(FilterType::All),
            "education" => Ok(FilterType::Education),
            "work" => Ok(FilterType::Work),
            "conference" => Ok(FilterType::Conference),
            "travel" => Ok(FilterType::Travel),
            _ => Err(JourneyError::ConfigInvalid {
                key: "filter".to_string(),
                reason: format!(
                    "Invalid filter: {}. Use all, education, work, conference, or travel",
                    s
                ),
            }),
        }
    }
}
