//! User directory backing the credential exchange.

use std::sync::RwLock;

use salonbw_auth::Role;
use salonbw_core::UserId;

/// A registered account.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub password_hash: String,
}

/// Account lookup boundary.
///
/// The real platform backs this with its relational store; the service only
/// needs lookup by login email and by token subject.
pub trait UserDirectory: Send + Sync {
    fn find_by_email(&self, email: &str) -> Option<UserRecord>;
    fn find_by_id(&self, id: UserId) -> Option<UserRecord>;
}

/// In-memory directory, seeded at startup.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account. Email comparison is case-insensitive, so the
    /// stored form is lowercased here.
    pub fn insert(&self, mut record: UserRecord) {
        record.email = record.email.trim().to_lowercase();
        self.users.write().expect("directory poisoned").push(record);
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        let needle = email.trim().to_lowercase();
        self.users
            .read()
            .expect("directory poisoned")
            .iter()
            .find(|u| u.email == needle)
            .cloned()
    }

    fn find_by_id(&self, id: UserId) -> Option<UserRecord> {
        self.users
            .read()
            .expect("directory poisoned")
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }
}

/// Hash a password for storage.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

/// Constant answer on any verification failure, including a corrupt hash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str) -> UserRecord {
        UserRecord {
            id: UserId::new(),
            email: email.to_string(),
            name: "Test User".to_string(),
            role: Role::Client,
            // low cost keeps the test fast
            password_hash: bcrypt::hash("secret", 4).unwrap(),
        }
    }

    #[test]
    fn lookup_by_email_is_case_insensitive() {
        let directory = InMemoryUserDirectory::new();
        directory.insert(record("Anna@Example.com"));

        assert!(directory.find_by_email("anna@example.com").is_some());
        assert!(directory.find_by_email("ANNA@EXAMPLE.COM").is_some());
        assert!(directory.find_by_email("someone@example.com").is_none());
    }

    #[test]
    fn lookup_by_id_returns_the_record() {
        let directory = InMemoryUserDirectory::new();
        let user = record("anna@example.com");
        let id = user.id;
        directory.insert(user);

        assert_eq!(directory.find_by_id(id).unwrap().email, "anna@example.com");
        assert!(directory.find_by_id(UserId::new()).is_none());
    }

    #[test]
    fn password_verification() {
        let hash = bcrypt::hash("hunter2", 4).unwrap();
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
        assert!(!verify_password("hunter2", "not-a-bcrypt-hash"));
    }
}
