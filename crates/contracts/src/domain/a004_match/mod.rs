pub mod aggregate;
pub mod seed;
pub mod summary;

pub use aggregate::{Match, MatchForm, MatchResult, MatchStatus, MatchType};
