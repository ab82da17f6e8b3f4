//! Common types and traits for all domain records

pub mod record;
pub mod record_id;

pub use record::Record;
pub use record_id::RecordId;
