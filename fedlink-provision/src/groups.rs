use std::sync::Arc;

use fedlink_core::{FederationError, GroupStore};

/// The fixed privileged group admin-flagged profiles are joined to.
pub const ADMIN_GROUP: &str = "administrators";

/// Ensures privileged-group membership for admin-flagged profiles.
#[derive(Clone)]
pub struct GroupSync {
    groups: Arc<dyn GroupStore>,
}

impl GroupSync {
    /// Create a synchronizer over the host's group store.
    pub fn new(groups: Arc<dyn GroupStore>) -> Self {
        Self { groups }
    }

    /// Add `uid` to the privileged group. Idempotent: the group store treats
    /// joining an existing member as success.
    pub async fn ensure_admin(&self, uid: &str) -> Result<(), FederationError> {
        self.groups
            .join_group(ADMIN_GROUP, uid)
            .await
            .map_err(|e| FederationError::GroupJoin(e.to_string()))
    }
}
