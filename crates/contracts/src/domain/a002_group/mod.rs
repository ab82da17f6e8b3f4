pub mod aggregate;
pub mod seed;
pub mod summary;

pub use aggregate::{Group, GroupForm, GroupStatus};
