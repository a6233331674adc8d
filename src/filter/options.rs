use std::collections::BTreeSet;

use crate::record::PublicationRecord;

use super::state::ALL;

/// The type dropdown is a fixed enumeration; record kinds outside it are
/// reachable only through `"All"`.
const FIXED_TYPES: [&str; 2] = ["Journal", "Conference"];

/// Distinct publication years as option strings: `"All"` first, then
/// numeric descending. An empty corpus yields `["All"]`.
pub fn extract_years(records: &[PublicationRecord]) -> Vec<String> {
    let unique: BTreeSet<i32> = records.iter().map(PublicationRecord::year).collect();

    let mut options = Vec::with_capacity(unique.len() + 1);
    options.push(ALL.to_string());
    options.extend(unique.into_iter().rev().map(|year| year.to_string()));
    options
}

/// Distinct project labels: `"All"` first, then lexicographic ascending.
/// Records without a project contribute nothing.
pub fn extract_projects(records: &[PublicationRecord]) -> Vec<String> {
    let unique: BTreeSet<&str> = records
        .iter()
        .filter_map(|record| record.project.as_deref())
        .collect();

    let mut options = Vec::with_capacity(unique.len() + 1);
    options.push(ALL.to_string());
    options.extend(unique.into_iter().map(str::to_string));
    options
}

/// The selectable publication types, `"All"` first. Fixed rather than
/// data-derived.
pub fn type_options() -> Vec<String> {
    let mut options = Vec::with_capacity(FIXED_TYPES.len() + 1);
    options.push(ALL.to_string());
    options.extend(FIXED_TYPES.iter().map(|kind| (*kind).to_string()));
    options
}
