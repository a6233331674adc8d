pub mod identifiers;
pub mod view_model;

pub use identifiers::PublicationId;
pub use view_model::{ViewModel, YearGroup};
