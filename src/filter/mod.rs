pub mod grouping;
pub mod matcher;
pub mod options;
pub mod sorting;
pub mod state;

pub use grouping::group_by_year;
pub use matcher::matches;
pub use options::{extract_projects, extract_years, type_options};
pub use sorting::sort_descending_by_date;
pub use state::{FilterState, ALL};

use crate::record::PublicationRecord;
use crate::types::view_model::ViewModel;

/// Run the full derivation chain for one record set and one filter
/// state.
///
/// Pure function of its inputs: it allocates fresh containers and leaves
/// `records` untouched. Option lists derive from the full record set;
/// the match, sort, and group chain derives from the filtered subset.
pub fn derive_view_model(records: &[PublicationRecord], state: &FilterState) -> ViewModel {
    // 1. Option phase (full corpus, independent of the active filters)
    let year_options = options::extract_years(records);
    let project_options = options::extract_projects(records);
    let type_options = options::type_options();

    // 2. Predicate phase
    let matched: Vec<&PublicationRecord> = records
        .iter()
        .filter(|record| matcher::matches(record, state))
        .collect();
    let match_count = matched.len();

    // 3. Ordering phase
    let sorted = sorting::sort_descending_by_date(&matched);

    // 4. Grouping phase
    let groups = grouping::group_by_year(&sorted);

    tracing::debug!(
        considered = records.len(),
        matched = match_count,
        groups = groups.len(),
        "derived publication view"
    );

    ViewModel {
        year_options,
        project_options,
        type_options,
        match_count,
        groups,
        filter_active: state.is_active(),
    }
}
