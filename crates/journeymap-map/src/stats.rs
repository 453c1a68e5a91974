//! Aggregate statistics over the whole dataset.

use journeymap_core::dates::years_mentioned;
use journeymap_core::models::{EntryType, FilterType, MapLocation};
use journeymap_geo::{continent_of, Continent};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Entry counts per category, plus the `all` bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntryTypeCounts {
    pub all: usize,
    pub education: usize,
    pub work: usize,
    pub conference: usize,
    pub travel: usize,
}

impl EntryTypeCounts {
    pub fn get(&self, filter: FilterType) -> usize {
        match filter {
            FilterType::All => self.all,
            FilterType::Education => self.education,
            FilterType::Work => self.work,
            FilterType::Conference => self.conference,
            FilterType::Travel => self.travel,
        }
    }

    fn increment(&mut self, entry_type: EntryType) {
        self.all += 1;
        match entry_type {
            EntryType::Education => self.education += 1,
            EntryType::Work => self.work += 1,
            EntryType::Conference => self.conference += 1,
            EntryType::Travel => self.travel += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GlobalStats {
    pub total_locations: usize,
    pub total_entries: usize,
    /// Distinct countries
    pub countries: usize,
    /// Distinct continents among mapped countries
    pub continents: usize,
    /// Distinct years mentioned in any duration
    pub years_active: usize,
    pub year_range: Option<YearRange>,
    pub entry_types: EntryTypeCounts,
    /// Share of all entries, rounded per category. Only categories that occur are present.
    pub entry_type_percentages: BTreeMap<EntryType, u32>,
    pub countries_list: Vec<String>,
    pub continents_list: Vec<Continent>,
}

pub fn global_stats(locations: &[MapLocation]) -> GlobalStats {
    let mut entry_types = EntryTypeCounts::default();
    let mut years = BTreeSet::new();

    for entry in locations.iter().flat_map(|l| l.entries.iter()) {
        entry_types.increment(entry.entry_type);
        years.extend(years_mentioned(&entry.duration));
    }

    let countries: BTreeSet<&str> = locations.iter().map(|l| l.country.as_str()).collect();
    let continents: BTreeSet<Continent> =
        countries.iter().filter_map(|country| continent_of(country)).collect();

    let total_entries = entry_types.all;
    let entry_type_percentages = EntryType::ALL
        .iter()
        .filter_map(|&entry_type| {
            let count = entry_types.get(entry_type.into());
            (count > 0).then(|| (entry_type, percentage(count, total_entries)))
        })
        .collect();

    let year_range = match (years.first(), years.last()) {
        (Some(&start), Some(&end)) => Some(YearRange { start, end }),
        _ => None,
    };

    GlobalStats {
        total_locations: locations.len(),
        total_entries,
        countries: countries.len(),
        continents: continents.len(),
        years_active: years.len(),
        year_range,
        entry_types,
        entry_type_percentages,
        countries_list: countries.into_iter().map(str::to_string).collect(),
        continents_list: continents.into_iter().collect(),
    }
}

/// `count / total` as a whole percentage, rounded half away from zero
fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}
