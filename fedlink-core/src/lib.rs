//! # Fedlink Core
//!
//! `fedlink-core` provides the foundational types and traits for the fedlink
//! identity-federation adapter. It defines the canonical profile produced from
//! any provider payload, the error taxonomy, the configuration surface, and
//! the collaborator contracts (user store, group store, key-value store,
//! session hook) that the host application implements.

#![warn(missing_docs)]

/// Errors raised by the federation pipeline.
pub mod error;

/// The canonical, provider-independent profile.
pub mod profile;

/// Adapter configuration and its startup-time validation gate.
pub mod config;

/// Collaborator contracts implemented by the host application.
pub mod stores;

pub use config::{AdapterConfig, OAuth1Endpoints, OAuth2Endpoints, StrategyKind, StrategyRegistration};
pub use error::FederationError;
pub use profile::CanonicalProfile;
pub use stores::{GroupStore, KeyValueStore, LoginContext, NewUser, SessionHook, UserStore};

/// Trait for normalizing an arbitrary provider payload into a
/// [`CanonicalProfile`].
///
/// This is the intended customization point for adapting to a specific
/// provider's payload shape: field names vary per identity provider, but the
/// output contract does not. Implementations must be pure; the `provider`
/// field of the returned profile is stamped by the caller after
/// normalization.
pub trait ProfileNormalizer: Send + Sync {
    /// Normalize a raw payload.
    ///
    /// Fails with [`FederationError::ProfileParse`] when the payload is not a
    /// well-formed object or when the resulting external id or email is
    /// empty. Those two fields are hard requirements; an empty display name
    /// is passed through as-is.
    fn normalize(&self, raw: &serde_json::Value) -> Result<CanonicalProfile, FederationError>;
}
