pub mod record;

pub use crate::types::identifiers::PublicationId;
pub use record::{PublicationRecord, RecordError};
