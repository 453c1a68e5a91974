//! Property tests for the store and the derived views

use journeymap_core::models::{EntryType, FilterType, LocationId, MapEntry, MapLocation};
use journeymap_map::{chronological_entries, filtered_locations, global_stats, MapStore};
use proptest::prelude::*;

const DURATIONS: [&str; 6] = [
    "Sep 2018 - Jun 2022",
    "Jan 2023 - Present",
    "May 2017",
    "Sept 2019 - Dec 2019",
    "Summer trip",
    "",
];

fn entry_type_strategy() -> impl Strategy<Value = EntryType> {
    prop::sample::select(EntryType::ALL.to_vec())
}

fn filter_strategy() -> impl Strategy<Value = FilterType> {
    prop::sample::select(FilterType::ALL.to_vec())
}

fn dataset_strategy() -> impl Strategy<Value = Vec<MapLocation>> {
    let entries = prop::collection::vec(
        (entry_type_strategy(), prop::sample::select(DURATIONS.to_vec())),
        0..4,
    );
    prop::collection::vec((-180.0f64..180.0, -90.0f64..90.0, entries), 0..12).prop_map(|locs| {
        locs.into_iter()
            .enumerate()
            .map(|(i, (lng, lat, entries))| {
                let mut location = MapLocation::new(format!("City{}", i), "Country", lng, lat);
                for (j, (entry_type, duration)) in entries.into_iter().enumerate() {
                    location = location.with_entry(MapEntry::new(
                        format!("e{}", j),
                        entry_type,
                        "Institution",
                        "Role",
                        duration,
                    ));
                }
                location
            })
            .collect()
    })
}

#[derive(Debug, Clone)]
enum Command {
    Filter(FilterType),
    Select(Option<String>, Option<String>),
    Hover(Option<String>),
    Clear,
}

fn command_strategy() -> impl Strategy<Value = Command> {
    let id = prop::option::of("[a-c]");
    prop_oneof![
        filter_strategy().prop_map(Command::Filter),
        (id.clone(), prop::option::of("e[0-2]")).prop_map(|(l, e)| Command::Select(l, e)),
        id.prop_map(Command::Hover),
        Just(Command::Clear),
    ]
}

fn apply(store: &mut MapStore, command: Command) {
    match command {
        Command::Filter(filter) => store.set_filter(filter),
        Command::Select(location, entry) => store.set_selected_location(location.map(LocationId::from), entry),
        Command::Hover(location) => store.set_hovered_location(location.map(LocationId::from)),
        Command::Clear => store.clear_selection(),
    }
}

proptest! {
    #[test]
    fn filtered_locations_partition_the_dataset(
        data in dataset_strategy(),
        filter in filter_strategy(),
    ) {
        let kept = filtered_locations(&data, filter);
        match filter.entry_type() {
            None => {
                prop_assert_eq!(kept.len(), data.len());
                for (k, d) in kept.iter().zip(data.iter()) {
                    prop_assert!(std::ptr::eq(*k, d));
                }
            }
            Some(entry_type) => {
                for location in &data {
                    let is_kept = kept.iter().any(|k| std::ptr::eq(*k, location));
                    prop_assert_eq!(is_kept, location.has_entry_type(entry_type));
                }
            }
        }
    }

    #[test]
    fn set_filter_always_clears_selection(
        commands in prop::collection::vec(command_strategy(), 0..20),
        filter in filter_strategy(),
    ) {
        let mut store = MapStore::new();
        for command in commands {
            apply(&mut store, command);
        }
        let hovered_before = store.state().hovered_location_id.clone();

        store.set_filter(filter);

        prop_assert_eq!(store.state().filter, filter);
        prop_assert!(store.state().selected_location_id.is_none());
        prop_assert!(store.state().selected_entry_id.is_none());
        prop_assert_eq!(store.state().hovered_location_id.clone(), hovered_before);
    }

    #[test]
    fn selected_entry_implies_selected_location(
        commands in prop::collection::vec(command_strategy(), 0..30),
    ) {
        let mut store = MapStore::new();
        for command in commands {
            apply(&mut store, command);
            let state = store.state();
            prop_assert!(state.selected_entry_id.is_none() || state.selected_location_id.is_some());
        }
    }

    #[test]
    fn all_bucket_is_sum_of_categories(data in dataset_strategy()) {
        let stats = global_stats(&data);
        let counts = stats.entry_types;
        prop_assert_eq!(counts.all, counts.education + counts.work + counts.conference + counts.travel);
        prop_assert_eq!(counts.all, stats.total_entries);
    }

    #[test]
    fn chronological_entries_are_non_decreasing(data in dataset_strategy()) {
        let entries = chronological_entries(&data);
        let total: usize = data.iter().map(|l| l.entries.len()).sum();
        prop_assert_eq!(entries.len(), total);
        for pair in entries.windows(2) {
            prop_assert!(pair[0].sort_key() <= pair[1].sort_key());
        }
    }
}
