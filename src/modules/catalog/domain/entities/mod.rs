pub mod catalog_entry;
pub mod set_identifier;

pub use catalog_entry::{ComponentPage, RawComponentEntry, SetMeta};
pub use set_identifier::SetIdentifier;
