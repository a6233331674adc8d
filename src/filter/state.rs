use serde::{Deserialize, Serialize};

/// Sentinel option meaning "do not restrict this dimension". Option lists
/// begin with it and selection fields default to it.
pub const ALL: &str = "All";

/// The currently active filter criteria, owned by the embedding view and
/// read by every derivation.
///
/// Transitions are independent field assignments driven by UI events,
/// each followed by a full view recompute. A selection the option lists
/// no longer offer simply matches nothing; it never faults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free text matched against title and venue, case-insensitive.
    pub search_text: String,
    /// `"All"` or a 4-digit year string.
    pub selected_year: String,
    /// `"All"` or a publication type, compared case-sensitively.
    pub selected_type: String,
    /// `"All"` or a project label, compared exactly.
    pub selected_project: String,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            search_text: String::new(),
            selected_year: ALL.to_string(),
            selected_type: ALL.to_string(),
            selected_project: ALL.to_string(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every field to its default. Partial resets are deliberately
    /// not provided; only the full reset exists.
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    /// True iff any field differs from its default.
    pub fn is_active(&self) -> bool {
        *self != FilterState::default()
    }

    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.selected_year = year.into();
        self
    }

    #[must_use]
    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.selected_type = kind.into();
        self
    }

    #[must_use]
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.selected_project = project.into();
        self
    }
}
