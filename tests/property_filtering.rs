//! Property-based tests for the filter pipeline using proptest.

use chrono::NaiveDate;
use proptest::prelude::*;

use publist_core::filter::{
    self, derive_view_model, extract_projects, extract_years, sort_descending_by_date,
    FilterState, ALL,
};
use publist_core::record::PublicationRecord;
use publist_core::types::PublicationId;

const KINDS: [&str; 3] = ["Journal", "Conference", "Workshop"];
const PROJECTS: [&str; 3] = ["AI", "Crypto", "Systems"];

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2015i32..2026, 1u32..13, 1u32..29).prop_map(|(year, month, day)| {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid generated date")
    })
}

fn arb_record() -> impl Strategy<Value = PublicationRecord> {
    (
        any::<u32>(),
        "[a-z]{0,12}",
        "[a-z]{0,8}",
        prop::sample::select(KINDS.to_vec()),
        arb_date(),
        prop::option::of(prop::sample::select(PROJECTS.to_vec())),
    )
        .prop_map(|(id, title, venue, kind, date, project)| {
            let mut record = PublicationRecord::new(
                PublicationId::new(id.to_string()),
                format!("Paper {title}"),
                format!("Venue {venue}"),
                kind,
                format!("https://doi.org/10.1000/{id}"),
                date,
            );
            if let Some(project) = project {
                record = record.with_project(project);
            }
            record
        })
}

fn arb_corpus() -> impl Strategy<Value = Vec<PublicationRecord>> {
    prop::collection::vec(arb_record(), 0..24)
}

fn arb_state() -> impl Strategy<Value = FilterState> {
    (
        prop::option::of("[a-z]{1,4}"),
        prop::option::of((2015i32..2026).prop_map(|year| year.to_string())),
        prop::option::of(prop::sample::select(KINDS.to_vec())),
        prop::option::of(prop::sample::select(PROJECTS.to_vec())),
    )
        .prop_map(|(search, year, kind, project)| {
            let mut state = FilterState::new();
            if let Some(search) = search {
                state.search_text = search;
            }
            if let Some(year) = year {
                state.selected_year = year;
            }
            if let Some(kind) = kind {
                state.selected_type = kind.to_string();
            }
            if let Some(project) = project {
                state.selected_project = project.to_string();
            }
            state
        })
}

// --- Derivation properties ---

proptest! {
    #[test]
    fn derivation_is_deterministic(records in arb_corpus(), state in arb_state()) {
        let first = derive_view_model(&records, &state);
        let second = derive_view_model(&records, &state);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn match_count_equals_records_across_groups(
        records in arb_corpus(),
        state in arb_state(),
    ) {
        let view = derive_view_model(&records, &state);
        let total: usize = view.groups.iter().map(|group| group.records.len()).sum();
        prop_assert_eq!(view.match_count, total);
    }

    #[test]
    fn group_years_are_strictly_descending(
        records in arb_corpus(),
        state in arb_state(),
    ) {
        let years = derive_view_model(&records, &state).years();
        prop_assert!(years.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn grouping_preserves_the_sorted_sequence(
        records in arb_corpus(),
        state in arb_state(),
    ) {
        let view = derive_view_model(&records, &state);

        let matched: Vec<&PublicationRecord> = records
            .iter()
            .filter(|record| filter::matches(record, &state))
            .collect();
        let sorted = sort_descending_by_date(&matched);

        let flattened: Vec<&PublicationRecord> = view
            .groups
            .iter()
            .flat_map(|group| group.records.iter())
            .collect();

        prop_assert_eq!(flattened.len(), sorted.len());
        for (from_group, from_sort) in flattened.iter().zip(sorted.iter()) {
            prop_assert_eq!(*from_group, *from_sort);
        }
    }
}

// --- Matching properties ---

proptest! {
    #[test]
    fn matching_is_pure(record in arb_record(), state in arb_state()) {
        let first = filter::matches(&record, &state);
        let second = filter::matches(&record, &state);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn default_state_matches_every_record(record in arb_record()) {
        prop_assert!(filter::matches(&record, &FilterState::default()));
    }

    #[test]
    fn narrowing_year_never_increases_matches(
        records in arb_corpus(),
        state in arb_state(),
        year in 2015i32..2026,
    ) {
        let wide = FilterState { selected_year: ALL.to_string(), ..state.clone() };
        let narrow = FilterState { selected_year: year.to_string(), ..state };
        let wide_count = derive_view_model(&records, &wide).match_count;
        let narrow_count = derive_view_model(&records, &narrow).match_count;
        prop_assert!(narrow_count <= wide_count);
    }

    #[test]
    fn narrowing_search_never_increases_matches(
        records in arb_corpus(),
        state in arb_state(),
        needle in "[a-z]{1,4}",
    ) {
        let wide = FilterState { search_text: String::new(), ..state.clone() };
        let narrow = FilterState { search_text: needle, ..state };
        let wide_count = derive_view_model(&records, &wide).match_count;
        let narrow_count = derive_view_model(&records, &narrow).match_count;
        prop_assert!(narrow_count <= wide_count);
    }

    #[test]
    fn narrowing_project_never_increases_matches(
        records in arb_corpus(),
        state in arb_state(),
        project_index in 0usize..3,
    ) {
        let wide = FilterState { selected_project: ALL.to_string(), ..state.clone() };
        let narrow = FilterState {
            selected_project: PROJECTS[project_index].to_string(),
            ..state
        };
        let wide_count = derive_view_model(&records, &wide).match_count;
        let narrow_count = derive_view_model(&records, &narrow).match_count;
        prop_assert!(narrow_count <= wide_count);
    }
}

// --- Ordering properties ---

proptest! {
    #[test]
    fn sorted_dates_are_descending(records in arb_corpus()) {
        let refs: Vec<&PublicationRecord> = records.iter().collect();
        let sorted = sort_descending_by_date(&refs);
        prop_assert!(sorted
            .windows(2)
            .all(|pair| pair[0].publication_date >= pair[1].publication_date));
    }

    #[test]
    fn equal_dates_keep_input_order(date in arb_date(), count in 2usize..6) {
        let records: Vec<PublicationRecord> = (0..count)
            .map(|index| {
                PublicationRecord::new(
                    PublicationId::new(format!("r{index}")),
                    format!("Paper {index}"),
                    "Venue",
                    "Journal",
                    "https://doi.org/10.1000/tie",
                    date,
                )
            })
            .collect();

        let refs: Vec<&PublicationRecord> = records.iter().collect();
        let sorted = sort_descending_by_date(&refs);

        for (position, record) in sorted.iter().enumerate() {
            prop_assert_eq!(&record.title, &format!("Paper {position}"));
        }
    }
}

// --- Option extraction properties ---

proptest! {
    #[test]
    fn option_lists_lead_with_the_sentinel_and_are_unique(records in arb_corpus()) {
        for options in [extract_years(&records), extract_projects(&records)] {
            prop_assert_eq!(options.first().map(String::as_str), Some(ALL));
            let mut seen = std::collections::BTreeSet::new();
            for option in &options {
                prop_assert!(seen.insert(option.clone()));
            }
        }
    }

    #[test]
    fn year_options_cover_every_record(records in arb_corpus()) {
        let options = extract_years(&records);
        for record in &records {
            prop_assert!(options.contains(&record.year_label()));
        }
    }
}

// --- Filter state properties ---

proptest! {
    #[test]
    fn reset_is_idempotent(state in arb_state()) {
        let mut once = state.clone();
        once.reset();

        let mut twice = state;
        twice.reset();
        twice.reset();

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(&once, &FilterState::default());
        prop_assert!(!once.is_active());
    }
}
