pub mod aggregate;
pub mod seed;

pub use aggregate::{Difficulty, Drill, DrillCategory, DrillForm};
