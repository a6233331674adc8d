// Runtime reads only: once constructed, a catalog is never mutated.

use std::collections::BTreeSet;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::filter::{self, FilterState};
use crate::record::PublicationRecord;
use crate::types::view_model::ViewModel;

use super::loader::{self, CatalogError};

/// The validated, immutable publication corpus backing a view.
///
/// Loaded once per page render. Every record has passed the boundary
/// validation and ids are unique; derivations only ever read it.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicationCatalog {
    records: Vec<PublicationRecord>,
}

impl PublicationCatalog {
    /// Take ownership of a record array, enforcing the input-boundary
    /// invariants: per-record validity and id uniqueness. Record order is
    /// preserved; it is the tie-breaking order for same-date sorting.
    pub fn new(records: Vec<PublicationRecord>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for record in &records {
            record
                .validate()
                .map_err(|source| CatalogError::InvalidRecord {
                    id: record.id.to_string(),
                    source,
                })?;

            if !seen.insert(record.id.clone()) {
                return Err(CatalogError::DuplicateId(record.id.to_string()));
            }
        }

        Ok(PublicationCatalog { records })
    }

    /// Parse a catalog from a JSON array in the corpus wire shape.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        loader::from_json_str(json)
    }

    /// Read and parse a corpus file, e.g. `publications.json`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        loader::from_json_file(path.as_ref())
    }

    pub fn records(&self) -> &[PublicationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Derive the render-ready view for the given filter state.
    pub fn view(&self, state: &FilterState) -> ViewModel {
        filter::derive_view_model(&self.records, state)
    }

    /// Stable identity of the corpus: `"sha256:<hex>"` over the canonical
    /// JSON of the record array. Field order is fixed by the record type,
    /// so equal corpora in equal order always fingerprint identically;
    /// suitable as a memoization key for derived outputs.
    pub fn fingerprint(&self) -> Result<String, CatalogError> {
        let canonical = serde_json::to_vec(&self.records)?;

        let mut hasher = Sha256::new();
        hasher.update(&canonical);

        let hash = hasher.finalize();
        Ok(format!("sha256:{}", hex::encode(hash)))
    }
}
