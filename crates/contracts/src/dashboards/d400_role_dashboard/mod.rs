pub mod dto;
pub mod stats;

pub use dto::{Activity, ActivityKind, QuickAction, RoleDashboard, StatCard};
pub use stats::role_dashboard;
