use chrono::NaiveDate;

use super::dto::{Activity, ActivityKind, QuickAction, RoleDashboard, StatCard};
use crate::shared::record::{Icon, Tone};
use crate::system::navigation::View;
use crate::system::users::{Role, User};

fn card(title: &str, value: &str, trend: &str, icon: Icon, tone: Tone) -> StatCard {
    StatCard {
        title: title.to_string(),
        value: value.to_string(),
        trend: Some(trend.to_string()),
        icon,
        tone,
    }
}

/// Headline figures per role. Roles without a landing page get none.
pub fn stats_for(role: Role) -> Vec<StatCard> {
    match role {
        Role::Admin => vec![
            card("Total Players", "127", "+8 this month", Icon::Users, Tone::Blue),
            card("Active Coaches", "12", "+2 new", Icon::Users, Tone::Green),
            card("Upcoming Matches", "8", "Next: Tomorrow", Icon::Trophy, Tone::Orange),
            card("Outstanding Fees", "KSh 45,000", "12 pending", Icon::CreditCard, Tone::Red),
        ],
        Role::Coach => vec![
            card("My Players", "24", "U15 Squad", Icon::Users, Tone::Blue),
            card("This Week Training", "4", "2 completed", Icon::Calendar, Tone::Green),
            card("Next Match", "Sat 2PM", "vs Kibera FC", Icon::Trophy, Tone::Orange),
            card("Attendance Rate", "89%", "+5% this month", Icon::TrendingUp, Tone::Purple),
        ],
        Role::Medical => vec![
            card("Active Injuries", "3", "1 recovering", Icon::AlertTriangle, Tone::Red),
            card("Medical Checks", "15", "Due this week", Icon::Calendar, Tone::Blue),
            card("Players Monitored", "127", "All academies", Icon::Users, Tone::Green),
            card("Health Alerts", "2", "Attention needed", Icon::AlertTriangle, Tone::Orange),
        ],
        Role::Parent => vec![
            card("Training Sessions", "12", "This month", Icon::Calendar, Tone::Blue),
            card("Matches Played", "6", "4 wins, 2 draws", Icon::Trophy, Tone::Green),
            card("Goals Scored", "8", "Season total", Icon::TrendingUp, Tone::Orange),
            card("Fee Balance", "KSh 2,500", "Due Dec 15", Icon::CreditCard, Tone::Red),
        ],
        Role::Scout | Role::Player => Vec::new(),
    }
}

pub fn recent_activities() -> Vec<Activity> {
    let activity = |kind, message: &str, time: &str, tone| Activity {
        kind,
        message: message.to_string(),
        time: time.to_string(),
        tone,
    };
    vec![
        activity(
            ActivityKind::Match,
            "Match result: Nairobi FC U15 2-1 Kibera FC",
            "2 hours ago",
            Tone::Green,
        ),
        activity(
            ActivityKind::Training,
            "Training session completed for U12 squad",
            "4 hours ago",
            Tone::Blue,
        ),
        activity(
            ActivityKind::Payment,
            "Payment received from Grace Njeri",
            "1 day ago",
            Tone::Purple,
        ),
        activity(
            ActivityKind::Injury,
            "James Ochieng cleared to return to training",
            "2 days ago",
            Tone::Orange,
        ),
    ]
}

/// Shortcut buttons, keeping only those whose page the role may open
pub fn quick_actions(role: Role) -> Vec<QuickAction> {
    [
        ("Add Player", View::Players),
        ("Schedule Training", View::Training),
        ("Add Match", View::Matches),
        ("Record Payment", View::Fees),
    ]
    .into_iter()
    .filter(|(_, view)| view.allows(role))
    .map(|(label, view)| QuickAction {
        label: label.to_string(),
        view,
        path: view.path().to_string(),
    })
    .collect()
}

pub fn role_dashboard(user: &User, today: NaiveDate) -> RoleDashboard {
    RoleDashboard {
        role: user.role,
        greeting: format!("Welcome back, {}", user.name),
        academy_name: user.academy_name.clone(),
        date: today.format("%A, %-d %B %Y").to_string(),
        stats: stats_for(user.role),
        recent_activities: recent_activities(),
        quick_actions: quick_actions(user.role),
    }
}
