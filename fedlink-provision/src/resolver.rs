use std::sync::Arc;

use fedlink_core::FederationError;
use fedlink_store::MappingStore;

/// Read-only lookup of an existing local account for an external id.
///
/// A thin delegate to the mapping store with no caching: every call is a
/// fresh backend read. Login is a low-frequency, user-triggered event, not a
/// hot path.
#[derive(Clone)]
pub struct Resolver {
    mapping: Arc<MappingStore>,
}

impl Resolver {
    /// Create a resolver over the provider's mapping store.
    pub fn new(mapping: Arc<MappingStore>) -> Self {
        Self { mapping }
    }

    /// Return the local account id already linked to `external_id`, if any.
    pub async fn resolve(&self, external_id: &str) -> Result<Option<String>, FederationError> {
        self.mapping.get(external_id).await
    }
}
