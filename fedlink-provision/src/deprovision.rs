use std::sync::Arc;

use fedlink_core::{FederationError, UserStore};
use fedlink_store::{provider_field, MappingStore};

/// Removes the identity mapping when a local account is deleted.
///
/// Best-effort cleanup, not a transactional guarantee: a failure is reported
/// to the deletion caller and logged, but the already-deleted account is not
/// resurrected.
pub struct Deprovisioner {
    users: Arc<dyn UserStore>,
    mapping: Arc<MappingStore>,
}

impl Deprovisioner {
    /// Create a deprovisioner over the host's user store and the provider's
    /// mapping store.
    pub fn new(users: Arc<dyn UserStore>, mapping: Arc<MappingStore>) -> Self {
        Self { users, mapping }
    }

    /// Remove the mapping entry linked to `uid`, if any.
    ///
    /// Reads the account's per-provider custom field to recover the linked
    /// external id; an account with no linked external id is a successful
    /// no-op.
    pub async fn deprovision(&self, uid: &str) -> Result<(), FederationError> {
        let field = provider_field(self.mapping.provider());
        let external_id = self
            .users
            .get_user_field(uid, &field)
            .await
            .map_err(|e| self.cleanup_failed(uid, e))?;

        match external_id {
            Some(external_id) if !external_id.is_empty() => self
                .mapping
                .delete(&external_id)
                .await
                .map_err(|e| self.cleanup_failed(uid, e)),
            _ => Ok(()),
        }
    }

    fn cleanup_failed(&self, uid: &str, e: FederationError) -> FederationError {
        log::error!(
            "[{}] could not remove identity mapping for uid {uid}: {e}",
            self.mapping.provider()
        );
        FederationError::Delete(e.to_string())
    }
}
