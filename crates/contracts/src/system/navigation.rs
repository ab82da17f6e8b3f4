use serde::{Deserialize, Serialize};

use super::users::Role::{self, Admin, Coach, Medical, Parent, Scout};

/// Routed page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Dashboard,
    Players,
    Groups,
    Training,
    Matches,
    Assessments,
    Drills,
    Fees,
    Medical,
    Scouting,
    Announcements,
    Events,
    Reports,
}

const STAFF: &[Role] = &[Admin, Coach];

impl View {
    /// Sidebar order
    pub const ALL: [View; 13] = [
        View::Dashboard,
        View::Players,
        View::Groups,
        View::Training,
        View::Matches,
        View::Assessments,
        View::Drills,
        View::Fees,
        View::Medical,
        View::Scouting,
        View::Announcements,
        View::Events,
        View::Reports,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            View::Dashboard => "/",
            View::Players => "/players",
            View::Groups => "/groups",
            View::Training => "/training",
            View::Matches => "/matches",
            View::Assessments => "/assessments",
            View::Drills => "/drills",
            View::Fees => "/fees",
            View::Medical => "/medical",
            View::Scouting => "/scouting",
            View::Announcements => "/announcements",
            View::Events => "/events",
            View::Reports => "/reports",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Players => "Players",
            View::Groups => "Groups & Coaches",
            View::Training => "Training",
            View::Matches => "Matches",
            View::Assessments => "Assessments",
            View::Drills => "Drills Library",
            View::Fees => "Fees & Payments",
            View::Medical => "Medical Records",
            View::Scouting => "Scouting",
            View::Announcements => "Announcements",
            View::Events => "Events",
            View::Reports => "Reports",
        }
    }

    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            View::Dashboard => &[Admin, Coach, Medical, Parent, Scout],
            View::Players => &[Admin, Coach, Medical, Scout],
            View::Matches => &[Admin, Coach, Scout],
            View::Fees => &[Admin, Parent],
            View::Medical => &[Admin, Medical],
            View::Scouting => &[Admin, Scout],
            View::Groups
            | View::Training
            | View::Assessments
            | View::Drills
            | View::Announcements
            | View::Events
            | View::Reports => STAFF,
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }

    pub fn from_path(path: &str) -> Option<View> {
        View::ALL.into_iter().find(|v| v.path() == path)
    }

    /// Sidebar entries for a role
    pub fn visible_for(role: Role) -> Vec<View> {
        View::ALL.into_iter().filter(|v| v.allows(role)).collect()
    }
}

/// Sidebar entry as sent to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub view: View,
    pub path: String,
    pub title: String,
}

impl From<View> for NavItem {
    fn from(view: View) -> Self {
        Self {
            view,
            path: view.path().to_string(),
            title: view.title().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_sees_every_view() {
        assert_eq!(View::visible_for(Admin), View::ALL.to_vec());
    }

    #[test]
    fn test_parent_and_medical_menus() {
        assert_eq!(View::visible_for(Parent), vec![View::Dashboard, View::Fees]);
        assert_eq!(
            View::visible_for(Medical),
            vec![View::Dashboard, View::Players, View::Medical]
        );
        assert_eq!(
            View::visible_for(Scout),
            vec![View::Dashboard, View::Players, View::Matches, View::Scouting]
        );
    }

    #[test]
    fn test_player_role_has_no_views() {
        assert!(View::visible_for(Role::Player).is_empty());
    }

    #[test]
    fn test_paths_round_trip() {
        for view in View::ALL {
            assert_eq!(View::from_path(view.path()), Some(view));
        }
        assert_eq!(View::from_path("/analytics"), None);
    }
}
