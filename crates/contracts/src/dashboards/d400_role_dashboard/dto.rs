use serde::{Deserialize, Serialize};

use crate::shared::record::{Icon, Tone};
use crate::system::navigation::View;
use crate::system::users::Role;

/// Landing page of a signed-in user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleDashboard {
    pub role: Role,
    /// e.g. "Welcome back, John Mwangi"
    pub greeting: String,
    pub academy_name: String,
    /// Long date, e.g. "Saturday, 14 December 2024"
    pub date: String,
    pub stats: Vec<StatCard>,
    pub recent_activities: Vec<Activity>,
    pub quick_actions: Vec<QuickAction>,
}

/// Headline figure with an optional trend line under it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub trend: Option<String>,
    pub icon: Icon,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Match,
    Training,
    Payment,
    Injury,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub message: String,
    /// Relative time as shown, e.g. "2 hours ago"
    pub time: String,
    pub tone: Tone,
}

/// Shortcut button leading to a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAction {
    pub label: String,
    pub view: View,
    pub path: String,
}
