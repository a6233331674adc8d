use std::collections::BTreeMap;

use crate::record::PublicationRecord;
use crate::types::view_model::YearGroup;

/// Partition sorted records into year buckets, newest year first.
///
/// Keys come only from the records actually present, so a year filtered
/// out entirely produces no bucket. Buckets preserve the input order;
/// the `BTreeMap` keeps key order independent of insertion order.
pub fn group_by_year(sorted: &[&PublicationRecord]) -> Vec<YearGroup> {
    let mut buckets: BTreeMap<i32, Vec<PublicationRecord>> = BTreeMap::new();
    for record in sorted {
        buckets
            .entry(record.year())
            .or_default()
            .push((*record).clone());
    }

    buckets
        .into_iter()
        .rev()
        .map(|(year, records)| YearGroup { year, records })
        .collect()
}
