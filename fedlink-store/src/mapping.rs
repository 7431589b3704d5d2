use std::sync::Arc;

use fedlink_core::{FederationError, KeyValueStore};

/// Name of the per-provider custom field on a local account that holds the
/// linked external id, e.g. `githubId`.
pub fn provider_field(provider: &str) -> String {
    format!("{provider}Id")
}

/// The persisted association from `(provider, external_id)` to a local
/// account id, namespaced per provider.
///
/// The mapping is the sole source of truth for "has this external identity
/// already been linked". It is created exactly once, at first successful
/// login for a previously-unseen external id, and deleted exactly once, when
/// the owning local account is deleted.
#[derive(Clone)]
pub struct MappingStore {
    db: Arc<dyn KeyValueStore>,
    provider: String,
    object_key: String,
}

impl MappingStore {
    /// Create a mapping store for one provider over the host's key-value
    /// store.
    pub fn new(db: Arc<dyn KeyValueStore>, provider: impl Into<String>) -> Self {
        let provider = provider.into();
        let object_key = format!("{provider}Id:uid");
        Self {
            db,
            provider,
            object_key,
        }
    }

    /// The provider this store is namespaced under.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Look up the local account id linked to an external id.
    pub async fn get(&self, external_id: &str) -> Result<Option<String>, FederationError> {
        self.db.get_field(&self.object_key, external_id).await
    }

    /// Link an external id to a local account id. Idempotent overwrite.
    pub async fn set(&self, external_id: &str, uid: &str) -> Result<(), FederationError> {
        self.db.set_field(&self.object_key, external_id, uid).await
    }

    /// Remove the link for an external id. Removing an absent link is not an
    /// error.
    pub async fn delete(&self, external_id: &str) -> Result<(), FederationError> {
        self.db.delete_field(&self.object_key, external_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryKv;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let kv = Arc::new(MemoryKv::new());
        let store = MappingStore::new(kv, "acme");

        store.set("ext-1", "7").await.unwrap();
        assert_eq!(store.get("ext-1").await.unwrap(), Some("7".to_string()));
    }

    #[tokio::test]
    async fn mappings_are_namespaced_per_provider() {
        let kv: Arc<MemoryKv> = Arc::new(MemoryKv::new());
        let acme = MappingStore::new(kv.clone(), "acme");
        let other = MappingStore::new(kv.clone(), "other");

        acme.set("ext-1", "7").await.unwrap();
        assert_eq!(other.get("ext-1").await.unwrap(), None);
        assert_eq!(kv.field_count("acmeId:uid").await, 1);
        assert_eq!(kv.field_count("otherId:uid").await, 0);
    }

    #[tokio::test]
    async fn delete_is_a_noop_for_absent_links() {
        let kv = Arc::new(MemoryKv::new());
        let store = MappingStore::new(kv, "acme");

        store.delete("never-seen").await.unwrap();
    }

    #[tokio::test]
    async fn delete_removes_only_the_named_link() {
        let kv = Arc::new(MemoryKv::new());
        let store = MappingStore::new(kv, "acme");

        store.set("ext-1", "7").await.unwrap();
        store.set("ext-2", "8").await.unwrap();
        store.delete("ext-1").await.unwrap();

        assert_eq!(store.get("ext-1").await.unwrap(), None);
        assert_eq!(store.get("ext-2").await.unwrap(), Some("8".to_string()));
    }

    #[test]
    fn provider_field_matches_mapping_namespace() {
        assert_eq!(provider_field("acme"), "acmeId");
    }
}
