use crate::record::PublicationRecord;

use super::state::{FilterState, ALL};

/// Decide whether one record satisfies every active criterion.
///
/// Pure conjunction; the check order is an optimization, not a semantic
/// requirement. Search is plain case-insensitive substring containment
/// over title and venue, with no tokenization and no trimming.
pub fn matches(record: &PublicationRecord, state: &FilterState) -> bool {
    let matches_search = state.search_text.is_empty() || {
        let needle = state.search_text.to_lowercase();
        record.title.to_lowercase().contains(&needle)
            || record.venue.to_lowercase().contains(&needle)
    };

    let matches_year = state.selected_year == ALL || record.year_label() == state.selected_year;

    let matches_kind = state.selected_type == ALL || record.kind == state.selected_type;

    // A record without a project never matches a concrete selection.
    let matches_project = state.selected_project == ALL
        || record.project.as_deref() == Some(state.selected_project.as_str());

    matches_search && matches_year && matches_kind && matches_project
}
