//! Lead Capture
//!
//! A captured email is the only durable output of a session. It is
//! written once under a single store key and never mutated or deleted.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::KeyValueStore;

/// Store key holding the serialized [`User`]
pub const USER_KEY: &str = "user";

/// A captured lead
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Load the persisted lead, if any. An absent key signals a
/// first-time visitor and is not an error.
pub fn load_user(store: &dyn KeyValueStore) -> Result<Option<User>> {
    match store.get(USER_KEY)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Persist the lead under [`USER_KEY`]
pub fn save_user(store: &dyn KeyValueStore, user: &User) -> Result<()> {
    store.set(USER_KEY, &serde_json::to_string(user)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_absent_user_is_none() {
        let store = MemoryStore::new();
        assert_eq!(load_user(&store).unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        save_user(&store, &User::new("fan@example.com")).unwrap();

        let loaded = load_user(&store).unwrap();
        assert_eq!(loaded, Some(User::new("fan@example.com")));
    }

    #[test]
    fn test_serialized_form_is_exact() {
        let store = MemoryStore::new();
        save_user(&store, &User::new("fan@example.com")).unwrap();

        assert_eq!(
            store.get(USER_KEY).unwrap().as_deref(),
            Some(r#"{"email":"fan@example.com"}"#)
        );
    }

    #[test]
    fn test_corrupt_record_is_an_error() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "not json").unwrap();
        assert!(load_user(&store).is_err());
    }
}
