use serde::{Deserialize, Serialize};

use crate::record::PublicationRecord;

/// Records sharing a publication year.
///
/// Bucket contents keep the order produced by the sorter, i.e. descending
/// by full date within the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearGroup {
    pub year: i32,
    pub records: Vec<PublicationRecord>,
}

/// The fully derived, render-ready output for one record set and one
/// filter state.
///
/// Every field is a fresh container; we own the grouped records here
/// because they are part of the final output payload. Option lists each
/// begin with the `"All"` sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub year_options: Vec<String>,
    pub project_options: Vec<String>,
    pub type_options: Vec<String>,

    /// Count of records matching all active criteria.
    pub match_count: usize,

    /// Year buckets of the matching records, newest year first.
    pub groups: Vec<YearGroup>,

    /// True iff any filter field differs from its default; drives the
    /// "Clear Filters" affordance.
    pub filter_active: bool,
}

impl ViewModel {
    /// Group keys in display order (numeric descending).
    pub fn years(&self) -> Vec<i32> {
        self.groups.iter().map(|group| group.year).collect()
    }

    /// True when nothing matches. A legitimate terminal display state
    /// ("no publications found"), not an error.
    pub fn is_empty(&self) -> bool {
        self.match_count == 0
    }
}
