use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use fedlink_core::{FederationError, GroupStore, KeyValueStore, NewUser, UserStore};

/// In-memory [`KeyValueStore`]: objects keyed by name, each a field map.
#[derive(Default)]
pub struct MemoryKv {
    objects: Mutex<HashMap<String, HashMap<String, String>>>,
}

impl MemoryKv {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields currently stored under an object key.
    pub async fn field_count(&self, key: &str) -> usize {
        self.objects
            .lock()
            .await
            .get(key)
            .map(|fields| fields.len())
            .unwrap_or(0)
    }
}

#[async_trait]
impl KeyValueStore for MemoryKv {
    async fn get_field(&self, key: &str, field: &str) -> Result<Option<String>, FederationError> {
        Ok(self
            .objects
            .lock()
            .await
            .get(key)
            .and_then(|fields| fields.get(field))
            .cloned())
    }

    async fn set_field(
        &self,
        key: &str,
        field: &str,
        value: &str,
    ) -> Result<(), FederationError> {
        self.objects
            .lock()
            .await
            .entry(key.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
        Ok(())
    }

    async fn delete_field(&self, key: &str, field: &str) -> Result<(), FederationError> {
        if let Some(fields) = self.objects.lock().await.get_mut(key) {
            fields.remove(field);
        }
        Ok(())
    }
}

#[derive(Default)]
struct MemoryUsers {
    // uid -> field map; "username", "email" and "consent_given" live beside
    // any custom fields the pipeline writes.
    users: HashMap<String, HashMap<String, String>>,
    next_id: u64,
}

/// In-memory [`UserStore`] with NodeBB-style numeric uids.
#[derive(Default)]
pub struct MemoryUserStore {
    inner: Mutex<MemoryUsers>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing account, returning its uid. Used to model accounts
    /// that predate any federated login.
    pub async fn seed_user(&self, username: &str, email: &str) -> String {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let uid = inner.next_id.to_string();
        let mut fields = HashMap::new();
        fields.insert("username".to_string(), username.to_string());
        fields.insert("email".to_string(), email.to_string());
        inner.users.insert(uid.clone(), fields);
        uid
    }

    /// Number of accounts currently stored.
    pub async fn user_count(&self) -> usize {
        self.inner.lock().await.users.len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_uid_by_email(&self, email: &str) -> Result<Option<String>, FederationError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .users
            .iter()
            .find(|(_, fields)| fields.get("email").map(String::as_str) == Some(email))
            .map(|(uid, _)| uid.clone()))
    }

    async fn create_user(&self, attrs: NewUser) -> Result<String, FederationError> {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let uid = inner.next_id.to_string();
        let mut fields = HashMap::new();
        fields.insert("username".to_string(), attrs.username);
        fields.insert("email".to_string(), attrs.email);
        fields.insert(
            "consent_given".to_string(),
            attrs.consent_given.to_string(),
        );
        inner.users.insert(uid.clone(), fields);
        Ok(uid)
    }

    async fn set_user_field(
        &self,
        uid: &str,
        field: &str,
        value: &str,
    ) -> Result<(), FederationError> {
        let mut inner = self.inner.lock().await;
        let fields = inner
            .users
            .get_mut(uid)
            .ok_or_else(|| FederationError::Store(format!("no such uid: {uid}")))?;
        fields.insert(field.to_string(), value.to_string());
        Ok(())
    }

    async fn get_user_field(
        &self,
        uid: &str,
        field: &str,
    ) -> Result<Option<String>, FederationError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .users
            .get(uid)
            .and_then(|fields| fields.get(field))
            .cloned())
    }
}

/// In-memory [`GroupStore`].
#[derive(Default)]
pub struct MemoryGroupStore {
    groups: Mutex<HashMap<String, Vec<String>>>,
}

impl MemoryGroupStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a uid belongs to a group.
    pub async fn is_member(&self, group: &str, uid: &str) -> bool {
        self.groups
            .lock()
            .await
            .get(group)
            .map(|members| members.iter().any(|m| m == uid))
            .unwrap_or(false)
    }
}

#[async_trait]
impl GroupStore for MemoryGroupStore {
    async fn join_group(&self, group: &str, uid: &str) -> Result<(), FederationError> {
        let mut groups = self.groups.lock().await;
        let members = groups.entry(group.to_string()).or_default();
        if !members.iter().any(|m| m == uid) {
            members.push(uid.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_users_are_found_by_email() {
        let users = MemoryUserStore::new();
        let uid = users.seed_user("alice", "alice@example.com").await;

        assert_eq!(
            users.get_uid_by_email("alice@example.com").await.unwrap(),
            Some(uid)
        );
        assert_eq!(users.get_uid_by_email("bob@example.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn created_users_record_the_consent_flag() {
        let users = MemoryUserStore::new();
        let uid = users
            .create_user(NewUser {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                consent_given: true,
            })
            .await
            .unwrap();

        assert_eq!(
            users.get_user_field(&uid, "consent_given").await.unwrap(),
            Some("true".to_string())
        );
    }

    #[tokio::test]
    async fn joining_a_group_twice_keeps_one_membership() {
        let groups = MemoryGroupStore::new();
        groups.join_group("administrators", "7").await.unwrap();
        groups.join_group("administrators", "7").await.unwrap();

        assert!(groups.is_member("administrators", "7").await);
        assert_eq!(groups.groups.lock().await["administrators"].len(), 1);
    }
}
