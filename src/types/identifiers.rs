use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque unique identifier of a publication record.
///
/// The upstream corpus writes numeric ids (a spreadsheet row index) which
/// the content pipeline exposes as strings; both JSON forms are accepted
/// and normalized to the string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PublicationId(String);

impl PublicationId {
    pub fn new(id: impl Into<String>) -> Self {
        PublicationId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accepted wire representations of an id.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for PublicationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = match IdRepr::deserialize(deserializer)? {
            IdRepr::Number(n) => n.to_string(),
            IdRepr::Text(s) => s,
        };
        Ok(PublicationId(id))
    }
}
