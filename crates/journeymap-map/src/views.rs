//! Pure derivations over the dataset and the active filter.

use chrono::NaiveDate;
use journeymap_core::dates::{start_date, UNDATED};
use journeymap_core::models::{FilterType, LocationId, MapData, MapEntry, MapLocation};
use serde::Serialize;
use std::cell::{OnceCell, RefCell};

use crate::stats::{global_stats, GlobalStats};

/// Locations passing `filter`, in dataset order.
///
/// `All` keeps every location; a category keeps locations with at least
/// one entry of that category.
pub fn filtered_locations(locations: &[MapLocation], filter: FilterType) -> Vec<&MapLocation> {
    match filter.entry_type() {
        None => locations.iter().collect(),
        Some(entry_type) => locations.iter().filter(|l| l.has_entry_type(entry_type)).collect(),
    }
}

/// First location whose `city-country` key equals `id`
pub fn location_by_id<'a>(locations: &'a [MapLocation], id: &str) -> Option<&'a MapLocation> {
    locations.iter().find(|l| l.has_id(id))
}

/// An entry annotated with its parent location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChronologicalEntry<'a> {
    pub location_id: LocationId,
    pub city: &'a str,
    pub country: &'a str,
    pub coordinates: [f64; 2],

    /// Parsed start month; `None` when the duration could not be read
    pub start: Option<NaiveDate>,

    #[serde(flatten)]
    pub entry: &'a MapEntry,
}

impl<'a> ChronologicalEntry<'a> {
    fn new(location: &'a MapLocation, entry: &'a MapEntry) -> Self {
        Self {
            location_id: location.id(),
            city: &location.city,
            country: &location.country,
            coordinates: location.coordinates,
            start: start_date(&entry.duration),
            entry,
        }
    }

    /// Ordering key; unreadable durations sort before everything else
    pub fn sort_key(&self) -> NaiveDate {
        self.start.unwrap_or(UNDATED)
    }
}

/// Every entry of every location, oldest start first.
///
/// The sort is stable, so entries with equal start dates keep dataset order.
pub fn chronological_entries(locations: &[MapLocation]) -> Vec<ChronologicalEntry<'_>> {
    let mut entries: Vec<ChronologicalEntry<'_>> = locations
        .iter()
        .flat_map(|location| {
            location.entries.iter().map(move |entry| ChronologicalEntry::new(location, entry))
        })
        .collect();
    entries.sort_by_key(|e| e.sort_key());
    entries
}

/// Memoizing front for the derivations, bound to one dataset.
///
/// Results are cached per dataset identity and, for the filtered list, per
/// filter. Single-threaded by design of the surrounding event loop.
#[derive(Debug, Default)]
pub struct DerivedViews {
    data: MapData,
    filtered: RefCell<Option<(FilterType, Vec<usize>)>>,
    chronological: OnceCell<Vec<(usize, usize)>>,
    stats: OnceCell<GlobalStats>,
}

impl DerivedViews {
    pub fn new(data: MapData) -> Self {
        Self { data, ..Self::default() }
    }

    pub fn data(&self) -> &MapData {
        &self.data
    }

    /// Swap the dataset. Caches survive only if it is the same allocation.
    pub fn set_data(&mut self, data: MapData) {
        if self.data.ptr_eq(&data) {
            return;
        }
        tracing::debug!(locations = data.len(), "Dataset replaced, invalidating derived views");
        *self = Self::new(data);
    }

    pub fn filtered_locations(&self, filter: FilterType) -> Vec<&MapLocation> {
        let mut cache = self.filtered.borrow_mut();
        let stale = !matches!(cache.as_ref(), Some((cached, _)) if *cached == filter);
        if stale {
            let indices: Vec<usize> = match filter.entry_type() {
                None => (0..self.data.len()).collect(),
                Some(entry_type) => self
                    .data
                    .iter()
                    .enumerate()
                    .filter(|(_, l)| l.has_entry_type(entry_type))
                    .map(|(idx, _)| idx)
                    .collect(),
            };
            tracing::debug!(%filter, count = indices.len(), "Recomputed filtered locations");
            *cache = Some((filter, indices));
        }

        cache
            .as_ref()
            .map(|(_, indices)| indices.iter().map(|&idx| &self.data[idx]).collect())
            .unwrap_or_default()
    }

    pub fn location_by_id(&self, id: &str) -> Option<&MapLocation> {
        location_by_id(&self.data, id)
    }

    pub fn chronological_entries(&self) -> Vec<ChronologicalEntry<'_>> {
        let order = self.chronological.get_or_init(|| {
            let mut keyed: Vec<(NaiveDate, usize, usize)> = self
                .data
                .iter()
                .enumerate()
                .flat_map(|(loc_idx, location)| {
                    location.entries.iter().enumerate().map(move |(entry_idx, entry)| {
                        let key = start_date(&entry.duration).unwrap_or(UNDATED);
                        (key, loc_idx, entry_idx)
                    })
                })
                .collect();
            keyed.sort_by_key(|(key, _, _)| *key);
            keyed.into_iter().map(|(_, loc_idx, entry_idx)| (loc_idx, entry_idx)).collect()
        });

        order
            .iter()
            .map(|&(loc_idx, entry_idx)| {
                let location = &self.data[loc_idx];
                ChronologicalEntry::new(location, &location.entries[entry_idx])
            })
            .collect()
    }

    pub fn global_stats(&self) -> &GlobalStats {
        self.stats.get_or_init(|| global_stats(&self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journeymap_core::models::EntryType;

    fn dataset() -> Vec<MapLocation> {
        vec![
            MapLocation::new("Toronto", "Canada", -79.38, 43.65)
                .with_entry(MapEntry::new("uoft", EntryType::Education, "UofT", "BASc", "Sept 2018 - Jun 2023"))
                .with_entry(MapEntry::new("intern", EntryType::Work, "Acme", "Intern", "Jun 2021 - Aug 2021")),
            MapLocation::new("Paris", "France", 2.35, 48.85)
                .with_entry(MapEntry::new("trip", EntryType::Travel, "Louvre", "Tourist", "Summer vacation")),
            MapLocation::new("Singapore", "Singapore", 103.82, 1.35)
                .with_entry(MapEntry::new("icra", EntryType::Conference, "ICRA", "Speaker", "May 2017")),
        ]
    }

    #[test]
    fn test_filter_all_is_identity() {
        let data = dataset();
        let all = filtered_locations(&data, FilterType::All);
        assert_eq!(all.len(), data.len());
        assert!(all.iter().zip(data.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_filter_by_category() {
        let data = dataset();
        let work = filtered_locations(&data, FilterType::Work);
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].city, "Toronto");

        let travel = filtered_locations(&data, FilterType::Travel);
        assert_eq!(travel.len(), 1);
        assert_eq!(travel[0].city, "Paris");
    }

    #[test]
    fn test_location_by_id() {
        let data = dataset();
        assert_eq!(location_by_id(&data, "Paris-France").map(|l| l.city.as_str()), Some("Paris"));
        assert!(location_by_id(&data, "Paris-Texas").is_none());
    }

    #[test]
    fn test_location_by_id_first_match() {
        let data = vec![
            MapLocation::new("Paris", "France", 2.35, 48.85),
            MapLocation::new("Paris", "France", 9.0, 9.0),
        ];
        assert_eq!(location_by_id(&data, "Paris-France").unwrap().coordinates, [2.35, 48.85]);
    }

    #[test]
    fn test_chronological_order() {
        let data = dataset();
        let ids: Vec<&str> =
            chronological_entries(&data).iter().map(|e| e.entry.id.as_str()).collect();
        // Undated travel first, then 2017, 2018, 2021
        assert_eq!(ids, vec!["trip", "icra", "uoft", "intern"]);
    }

    #[test]
    fn test_chronological_annotations() {
        let data = dataset();
        let entries = chronological_entries(&data);
        let intern = entries.iter().find(|e| e.entry.id == "intern").unwrap();
        assert_eq!(intern.location_id, "Toronto-Canada");
        assert_eq!(intern.city, "Toronto");
        assert_eq!(intern.coordinates, [-79.38, 43.65]);
        assert_eq!(intern.start, NaiveDate::from_ymd_opt(2021, 6, 1));

        let trip = entries.iter().find(|e| e.entry.id == "trip").unwrap();
        assert_eq!(trip.start, None);
    }

    #[test]
    fn test_serialized_entry_is_flat() {
        let data = dataset();
        let entries = chronological_entries(&data);
        let value = serde_json::to_value(&entries[3]).unwrap();
        assert_eq!(value["id"], "intern");
        assert_eq!(value["type"], "work");
        assert_eq!(value["city"], "Toronto");
        assert_eq!(value["start"], "2021-06-01");
    }

    #[test]
    fn test_memoized_views_match_pure_functions() {
        let data = MapData::new(dataset());
        let views = DerivedViews::new(data.clone());

        for filter in FilterType::ALL {
            let cached = views.filtered_locations(filter);
            let pure = filtered_locations(&data, filter);
            assert_eq!(cached, pure);
            // Second call is served from the cache
            assert_eq!(views.filtered_locations(filter), pure);
        }

        assert_eq!(views.chronological_entries(), chronological_entries(&data));
        assert_eq!(views.global_stats(), &global_stats(&data));
    }

    #[test]
    fn test_set_data_invalidates() {
        let mut views = DerivedViews::new(MapData::new(dataset()));
        assert_eq!(views.global_stats().total_locations, 3);

        let same = views.data().clone();
        views.set_data(same);
        assert_eq!(views.global_stats().total_locations, 3);

        views.set_data(MapData::new(dataset().into_iter().take(1).collect()));
        assert_eq!(views.global_stats().total_locations, 1);
        assert_eq!(views.filtered_locations(FilterType::Travel).len(), 0);
    }
}
