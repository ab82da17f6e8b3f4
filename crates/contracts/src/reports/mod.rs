//! Downloadable reports. The CSV payloads are fixed sample data and do not
//! read the live record stores.

pub mod catalog;
pub mod export;

pub use catalog::{catalog, ReportCategory, ReportDefinition, ReportKind};
pub use export::{export_filename, report_csv, ReportError, NO_DATA};
