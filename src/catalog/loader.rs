use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::record::{PublicationRecord, RecordError};

use super::catalog::PublicationCatalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid record {id}: {source}")]
    InvalidRecord {
        id: String,
        #[source]
        source: RecordError,
    },
    #[error("Duplicate publication id: {0}")]
    DuplicateId(String),
}

/// Parse a JSON array in the corpus wire shape into a catalog.
///
/// This is the loader boundary: every schema violation surfaces here as
/// a typed error rather than as a record silently misfiled downstream.
/// In particular an unparseable `publication_date` fails the whole load.
pub fn from_json_str(json: &str) -> Result<PublicationCatalog, CatalogError> {
    let records: Vec<PublicationRecord> = serde_json::from_str(json)?;

    tracing::debug!(count = records.len(), "parsed publication corpus");

    PublicationCatalog::new(records)
}

/// Read and parse a corpus file, e.g. `publications.json`.
pub fn from_json_file(path: &Path) -> Result<PublicationCatalog, CatalogError> {
    let json = fs::read_to_string(path)?;
    from_json_str(&json)
}
