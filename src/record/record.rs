use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::PublicationId;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("title is empty")]
    EmptyTitle,
    #[error("venue is empty")]
    EmptyVenue,
    #[error("doi is not an absolute http(s) URL: {0}")]
    InvalidDoi(String),
}

/// One publication entry with bibliographic metadata.
///
/// Serialized field names follow the corpus wire shape
/// (`publications.json`), so a record round-trips through the same JSON
/// the content pipeline produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationRecord {
    pub id: PublicationId,

    #[serde(rename = "paper_title")]
    pub title: String,

    pub venue: String,

    /// Publication category, "Journal" or "Conference" in the observed
    /// corpus. The legal value set is open; the fixed option list offered
    /// by the type dropdown is a separate concern (see
    /// [`crate::filter::options`]).
    #[serde(rename = "type")]
    pub kind: String,

    /// Identity link and external reference; dereferenced by the
    /// renderer, never validated beyond the loader's scheme check.
    pub doi: String,

    /// Author display names, order preserved (rendering concatenates
    /// them; they are never sorted).
    pub authors: Vec<String>,

    pub publication_date: NaiveDate,

    /// Member emails associated with the entry. Carried through from the
    /// corpus; no filter consults it.
    #[serde(default)]
    pub people: Vec<String>,

    /// Absent means "no project association", distinct from any label.
    pub project: Option<String>,
}

impl PublicationRecord {
    /// Construct a record from its required parts. Optional parts attach
    /// through the `with_*` builders; boundary validation is
    /// [`validate`](Self::validate), invoked by the catalog.
    pub fn new(
        id: PublicationId,
        title: impl Into<String>,
        venue: impl Into<String>,
        kind: impl Into<String>,
        doi: impl Into<String>,
        publication_date: NaiveDate,
    ) -> Self {
        PublicationRecord {
            id,
            title: title.into(),
            venue: venue.into(),
            kind: kind.into(),
            doi: doi.into(),
            authors: Vec::new(),
            publication_date,
            people: Vec::new(),
            project: None,
        }
    }

    #[must_use]
    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    #[must_use]
    pub fn with_people(mut self, people: Vec<String>) -> Self {
        self.people = people;
        self
    }

    #[must_use]
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Check the invariants the content pipeline guarantees: non-blank
    /// title and venue, absolute http(s) doi. The date needs no check
    /// here; an unparseable date already fails at deserialization.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.title.trim().is_empty() {
            return Err(RecordError::EmptyTitle);
        }
        if self.venue.trim().is_empty() {
            return Err(RecordError::EmptyVenue);
        }
        if !(self.doi.starts_with("https://") || self.doi.starts_with("http://")) {
            return Err(RecordError::InvalidDoi(self.doi.clone()));
        }
        Ok(())
    }

    /// Publication year, the load-bearing date component for options and
    /// grouping.
    pub fn year(&self) -> i32 {
        self.publication_date.year()
    }

    /// Year as the option/selection string, e.g. `"2023"`.
    pub fn year_label(&self) -> String {
        self.publication_date.year().to_string()
    }

    /// Comma-joined author names in record order, as rendered.
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }
}
