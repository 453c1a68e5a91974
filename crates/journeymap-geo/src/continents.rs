//! Static country to continent lookup used by the aggregate statistics.

use serde::Serialize;
use std::fmt;

/// Declared in alphabetical order of display name, so derived `Ord`
/// sorts the same way the names do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    Oceania,
    #[serde(rename = "South America")]
    SouthAmerica,
}

impl Continent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::Oceania => "Oceania",
            Continent::SouthAmerica => "South America",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Continent for a country name as written in the dataset.
///
/// Unmapped countries return `None` and are left out of continent counts.
pub fn continent_of(country: &str) -> Option<Continent> {
    let continent = match country {
        "Canada" | "USA" | "United States" | "Mexico" => Continent::NorthAmerica,

        "United Kingdom" | "UK" | "Germany" | "France" | "Italy" | "Spain" | "Netherlands"
        | "Switzerland" | "Sweden" | "Norway" | "Denmark" => Continent::Europe,

        "China" | "Japan" | "South Korea" | "Singapore" | "India" | "Thailand" | "Malaysia"
        | "Indonesia" => Continent::Asia,

        "Australia" | "New Zealand" => Continent::Oceania,

        "Brazil" | "Argentina" | "Chile" | "Colombia" => Continent::SouthAmerica,

        "South Africa" | "Egypt" | "Nigeria" | "Kenya" => Continent::Africa,

        _ => return None,
    };
    Some(continent)
}
