//! Shared contracts of the academy dashboard: record model, domain records,
//! authentication, navigation and reports. Pure data and logic, no I/O.

pub mod dashboards;
pub mod domain;
pub mod reports;
pub mod shared;
pub mod system;
