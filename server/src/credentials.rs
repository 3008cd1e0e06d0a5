use crate::cfg::UserEntry;
use crate::types::{CredentialSecret, Username};
use anyhow::bail;
use sessionauth::{Identity, Role, UserId};
use std::collections::HashSet;

//--------------------------------------------------------------------------------------------------
// Identity records, fixed for the lifetime of the process
//--------------------------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct IdentityRecord {
    pub id: UserId,
    pub username: Username,
    pub credential_secret: CredentialSecret,
    pub role: Role,
}

impl IdentityRecord {
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            username: self.username.as_str().to_string(),
            role: self.role,
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Credential store
//--------------------------------------------------------------------------------------------------

#[derive(Debug)]
pub struct CredentialStore {
    records: Vec<IdentityRecord>,
}

impl CredentialStore {
    pub fn new(records: Vec<IdentityRecord>) -> anyhow::Result<Self> {
        let mut ids = HashSet::new();
        let mut usernames = HashSet::new();

        for record in &records {
            if !ids.insert(record.id) {
                bail!("Duplicate user id {}", record.id);
            }
            if !usernames.insert(record.username.as_str()) {
                bail!("Duplicate username {:?}", record.username.as_str());
            }
        }

        Ok(CredentialStore { records })
    }

    pub fn from_entries(entries: &[UserEntry]) -> anyhow::Result<Self> {
        let records = entries
            .iter()
            .map(|entry| IdentityRecord {
                id: UserId::new(entry.id),
                username: Username::from(entry.username.as_str()),
                credential_secret: CredentialSecret::from(entry.password.as_str()),
                role: entry.role,
            })
            .collect();

        Self::new(records)
    }

    // Exact match on both fields, no normalisation
    pub fn lookup(&self, username: &Username, secret: &CredentialSecret) -> Option<&IdentityRecord> {
        self.records
            .iter()
            .find(|record| &record.username == username && record.credential_secret.matches(secret))
    }

    pub fn find_by_id(&self, id: UserId) -> Option<&IdentityRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, username: &str, secret: &str) -> IdentityRecord {
        IdentityRecord {
            id: UserId::new(id),
            username: Username::from(username),
            credential_secret: CredentialSecret::from(secret),
            role: Role::User,
        }
    }

    fn store() -> CredentialStore {
        CredentialStore::new(vec![
            record(1, "admin", "admin123"),
            record(2, "user", "user123"),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_requires_both_fields_to_match_exactly() {
        let store = store();
        let found = store
            .lookup(&Username::from("admin"), &CredentialSecret::from("admin123"))
            .unwrap();
        assert_eq!(found.id, UserId::new(1));

        assert!(store
            .lookup(&Username::from("admin"), &CredentialSecret::from("wrong"))
            .is_none());
        assert!(store
            .lookup(&Username::from("Admin"), &CredentialSecret::from("admin123"))
            .is_none());
        assert!(store
            .lookup(&Username::from(" admin"), &CredentialSecret::from("admin123"))
            .is_none());
        assert!(store
            .lookup(&Username::from("admin"), &CredentialSecret::from("user123"))
            .is_none());
    }

    #[test]
    fn find_by_id() {
        let store = store();
        assert_eq!(
            store.find_by_id(UserId::new(2)).unwrap().username,
            Username::from("user")
        );
        assert!(store.find_by_id(UserId::new(99)).is_none());
    }

    #[test]
    fn duplicates_are_rejected() {
        assert!(CredentialStore::new(vec![record(1, "a", "x"), record(1, "b", "y")]).is_err());
        assert!(CredentialStore::new(vec![record(1, "a", "x"), record(2, "a", "y")]).is_err());
    }

    #[test]
    fn identity_never_carries_the_secret() {
        let identity = record(1, "admin", "admin123").identity();
        assert_eq!(identity.username, "admin");
        assert!(!format!("{:?}", identity).contains("admin123"));
    }
}
