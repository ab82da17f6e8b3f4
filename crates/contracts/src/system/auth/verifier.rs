use super::AuthError;
use crate::system::users::{Role, User};

/// Password shared by every demo account
pub const DEMO_PASSWORD: &str = "password123";

/// Checks an email/password pair and returns the matching user.
pub trait CredentialVerifier: Send + Sync {
    fn verify_credentials(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Looks up a signed-in user again, e.g. from the id carried in a token
    fn find_user(&self, id: u64) -> Option<User>;
}

/// Fixed table of demo accounts, all sharing [`DEMO_PASSWORD`].
#[derive(Debug, Clone)]
pub struct MockCredentialTable {
    users: Vec<User>,
    password: String,
}

impl MockCredentialTable {
    pub fn new(users: Vec<User>, password: impl Into<String>) -> Self {
        Self {
            users,
            password: password.into(),
        }
    }

    /// The four Nairobi FC Academy accounts
    pub fn demo() -> Self {
        let account = |id: u64, name: &str, email: &str, role: Role| User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            academy_id: 1,
            academy_name: "Nairobi FC Academy".to_string(),
        };
        Self::new(
            vec![
                account(1, "John Mwangi", "admin@nairobi-fc.com", Role::Admin),
                account(2, "Mary Wanjiku", "coach@nairobi-fc.com", Role::Coach),
                account(3, "Dr. Peter Kamau", "medical@nairobi-fc.com", Role::Medical),
                account(4, "Grace Njeri", "parent@example.com", Role::Parent),
            ],
            DEMO_PASSWORD,
        )
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn find_by_id(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}

impl CredentialVerifier for MockCredentialTable {
    fn verify_credentials(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.users
            .iter()
            .find(|u| u.email == email)
            .filter(|_| password == self.password)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)
    }

    fn find_user(&self, id: u64) -> Option<User> {
        self.find_by_id(id).cloned()
    }
}
