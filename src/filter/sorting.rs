use crate::record::PublicationRecord;

/// Order matching records most recent first.
///
/// `sort_by` is stable, so records sharing a date keep their relative
/// order from the input and re-filtering never visibly reorders them.
/// The input slice is left untouched.
pub fn sort_descending_by_date<'a>(
    records: &[&'a PublicationRecord],
) -> Vec<&'a PublicationRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.publication_date.cmp(&a.publication_date));

    debug_assert!(sorted
        .windows(2)
        .all(|pair| pair[0].publication_date >= pair[1].publication_date));

    sorted
}
