pub mod component_record;
pub mod set_summary;

pub use component_record::ComponentRecord;
pub use set_summary::SetSummary;
