use std::sync::Arc;

use fedlink_core::{AdapterConfig, CanonicalProfile, FederationError, NewUser, UserStore};
use fedlink_store::{provider_field, MappingStore};

use crate::groups::GroupSync;
use crate::lock::KeyedLock;
use crate::resolver::Resolver;

/// Non-fatal conditions attached to an otherwise-successful provisioning
/// result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionWarning {
    /// Privileged-group sync failed; the account was still provisioned and
    /// the login proceeds.
    GroupJoin(String),
}

/// Outcome of a provisioning call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provisioned {
    /// The resolved or newly created local account id.
    pub uid: String,
    /// Whether a new local account was created for this profile.
    pub created: bool,
    /// Non-fatal warning the caller should log.
    pub warning: Option<ProvisionWarning>,
}

impl Provisioned {
    fn existing(uid: String) -> Self {
        Self {
            uid,
            created: false,
            warning: None,
        }
    }
}

/// Orchestrates the create-or-link decision for a canonical profile.
///
/// The decision procedure, evaluated in order per login attempt:
///
/// 1. Resolve the external id against the identity mapping; a hit returns
///    the existing uid with no writes.
/// 2. Otherwise look the profile's email up in the user store; a hit adopts
///    that account (merge), a miss creates a new account.
/// 3. Write the external id into the account's per-provider custom field and
///    persist the identity mapping.
/// 4. For admin-flagged profiles, ensure privileged-group membership.
///
/// Steps 1-3 for a given `(provider, external_id)` are serialized through a
/// per-identity lock, so concurrent first-time logins cannot create
/// duplicate accounts for one external identity.
pub struct Provisioner {
    config: Arc<AdapterConfig>,
    users: Arc<dyn UserStore>,
    mapping: Arc<MappingStore>,
    resolver: Resolver,
    group_sync: GroupSync,
    locks: KeyedLock,
}

impl Provisioner {
    /// Create a provisioner from the adapter configuration and the host's
    /// stores.
    pub fn new(
        config: Arc<AdapterConfig>,
        users: Arc<dyn UserStore>,
        group_sync: GroupSync,
        mapping: Arc<MappingStore>,
    ) -> Self {
        let resolver = Resolver::new(mapping.clone());
        Self {
            config,
            users,
            mapping,
            resolver,
            group_sync,
            locks: KeyedLock::new(),
        }
    }

    /// Resolve a canonical profile to a local account id, creating or
    /// linking the account as needed.
    pub async fn provision(
        &self,
        profile: &CanonicalProfile,
    ) -> Result<Provisioned, FederationError> {
        // Fast path: pure login, no writes, no lock.
        if let Some(uid) = self.resolver.resolve(&profile.external_id).await? {
            return Ok(Provisioned::existing(uid));
        }

        let lock_key = format!("{}:{}", self.config.provider, profile.external_id);
        let _guard = self.locks.acquire(&lock_key).await;

        // Re-check under the lock: a concurrent attempt may have linked this
        // identity while we waited.
        if let Some(uid) = self.resolver.resolve(&profile.external_id).await? {
            return Ok(Provisioned::existing(uid));
        }

        let (uid, created) = match self.users.get_uid_by_email(&profile.email).await? {
            // Existing account -- merge, no creation.
            Some(uid) => (uid, false),
            None => {
                let uid = self
                    .users
                    .create_user(NewUser {
                        username: profile.display_name.clone(),
                        email: profile.email.clone(),
                        consent_given: self.config.skip_consent_banner,
                    })
                    .await
                    .map_err(|e| FederationError::AccountCreate(e.to_string()))?;
                (uid, true)
            }
        };

        self.users
            .set_user_field(
                &uid,
                &provider_field(&self.config.provider),
                &profile.external_id,
            )
            .await?;
        self.mapping.set(&profile.external_id, &uid).await?;

        let warning = if profile.is_admin {
            match self.group_sync.ensure_admin(&uid).await {
                Ok(()) => None,
                Err(e) => {
                    log::warn!(
                        "[{}] privileged-group sync failed for uid {uid}: {e}",
                        self.config.provider
                    );
                    Some(ProvisionWarning::GroupJoin(e.to_string()))
                }
            }
        } else {
            None
        };

        Ok(Provisioned {
            uid,
            created,
            warning,
        })
    }
}
