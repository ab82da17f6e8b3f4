//! Per-login context: the signed-in user and their theme choice.
//!
//! A session is created by a successful login and consumed by logout;
//! views read it through an explicit reference instead of ambient state.

use serde::{Deserialize, Serialize};

use super::auth::{AuthError, CredentialVerifier};
use super::navigation::View;
use super::users::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: User,
    theme: Theme,
}

impl Session {
    pub fn login(
        verifier: &dyn CredentialVerifier,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let user = verifier.verify_credentials(email, password)?;
        Ok(Session::for_user(user))
    }

    pub fn for_user(user: User) -> Session {
        Session {
            user,
            theme: Theme::default(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn can_access(&self, view: View) -> bool {
        view.allows(self.user.role)
    }

    pub fn menu(&self) -> Vec<View> {
        View::visible_for(self.user.role)
    }

    /// Ends the session, handing back the user that was signed in
    pub fn logout(self) -> User {
        self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::MockCredentialTable;
    use crate::system::users::Role;

    #[test]
    fn test_login_scenario() {
        let table = MockCredentialTable::demo();
        let session = Session::login(&table, "admin@nairobi-fc.com", "password123").unwrap();
        assert_eq!(session.user().role, Role::Admin);
        assert!(session.can_access(View::Scouting));

        let err = Session::login(&table, "admin@nairobi-fc.com", "wrongpass").unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_parent_cannot_open_medical() {
        let table = MockCredentialTable::demo();
        let session = Session::login(&table, "parent@example.com", "password123").unwrap();
        assert!(session.can_access(View::Fees));
        assert!(!session.can_access(View::Medical));
        assert_eq!(session.menu().len(), 2);
    }

    #[test]
    fn test_theme_toggles() {
        let table = MockCredentialTable::demo();
        let mut session = Session::login(&table, "coach@nairobi-fc.com", "password123").unwrap();
        assert_eq!(session.theme(), Theme::Light);
        assert_eq!(session.toggle_theme(), Theme::Dark);
        assert_eq!(session.toggle_theme(), Theme::Light);
        assert_eq!(session.logout().name, "Mary Wanjiku");
    }
}
