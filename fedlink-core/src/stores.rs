use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::FederationError;

/// Attributes for a new local account created through the federated signup
/// path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Default local username, taken from the canonical profile's display
    /// name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Whether the account is recorded as having consented to the terms.
    pub consent_given: bool,
}

/// The host application's user-account store.
///
/// Accounts are referenced, not owned, by this adapter: the pipeline writes
/// the per-provider custom field and reads it back on deletion, nothing more.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a local account id by email.
    async fn get_uid_by_email(&self, email: &str) -> Result<Option<String>, FederationError>;

    /// Create a new local account, returning its opaque id.
    async fn create_user(&self, attrs: NewUser) -> Result<String, FederationError>;

    /// Set a custom field on an account. Idempotent overwrite.
    async fn set_user_field(
        &self,
        uid: &str,
        field: &str,
        value: &str,
    ) -> Result<(), FederationError>;

    /// Read a custom field from an account.
    async fn get_user_field(
        &self,
        uid: &str,
        field: &str,
    ) -> Result<Option<String>, FederationError>;
}

/// The host application's group store.
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Add an account to a named group. Adding an existing member is not an
    /// error.
    async fn join_group(&self, group: &str, uid: &str) -> Result<(), FederationError>;
}

/// The host application's generic persisted key-value store, addressed by
/// object key plus field.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read one field of an object.
    async fn get_field(&self, key: &str, field: &str) -> Result<Option<String>, FederationError>;

    /// Write one field of an object. Idempotent overwrite.
    async fn set_field(&self, key: &str, field: &str, value: &str)
        -> Result<(), FederationError>;

    /// Delete one field of an object. Deleting an absent field is not an
    /// error.
    async fn delete_field(&self, key: &str, field: &str) -> Result<(), FederationError>;
}

/// Request-scoped context carried through a login attempt so the session
/// hook can correlate it with the originating request.
#[derive(Debug, Clone, Default)]
pub struct LoginContext {
    /// Remote address of the authenticating client, when known.
    pub remote_addr: Option<String>,
    /// Host-defined extras (request id, user agent, ...).
    pub extras: HashMap<String, String>,
}

/// Invoked after the pipeline resolves a local account id, so the host can
/// complete the external session.
#[async_trait]
pub trait SessionHook: Send + Sync {
    /// Complete the session for a successfully resolved login.
    async fn on_successful_login(
        &self,
        ctx: &LoginContext,
        uid: &str,
    ) -> Result<(), FederationError>;
}
