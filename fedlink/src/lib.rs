//! # Fedlink
//!
//! An identity-federation adapter: it takes an externally authenticated
//! identity, as returned by an OAuth/OAuth2 provider's user-profile
//! endpoint, and resolves it to a local account in a host application's
//! user-management system, creating, linking, or privileging that account as
//! needed.
//!
//! The host implements the collaborator traits in [`fedlink_core`] (user
//! store, group store, key-value store, session hook); this crate wires a
//! [`ProfileNormalizer`](fedlink_core::ProfileNormalizer), the provisioning
//! pipeline, and the configuration gate together.
//!
//! ```
//! use std::sync::Arc;
//! use fedlink::core::{AdapterConfig, LoginContext, StrategyKind};
//! use fedlink::provision::{GroupSync, LoginFlow, Provisioner};
//! use fedlink::providers::oidc::OidcNormalizer;
//! use fedlink::store::{MappingStore, MemoryGroupStore, MemoryKv, MemoryUserStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fedlink::core::FederationError> {
//!     let config = Arc::new(AdapterConfig::new(
//!         "acme",
//!         StrategyKind::OAuth2,
//!         "https://id.acme.test/me",
//!     ));
//!     let users = Arc::new(MemoryUserStore::new());
//!     let groups = Arc::new(MemoryGroupStore::new());
//!     let kv = Arc::new(MemoryKv::new());
//!
//!     // The startup-time gate: only a valid configuration registers.
//!     let _registration = config.strategy_registration()?;
//!
//!     let mapping = Arc::new(MappingStore::new(kv, config.provider.clone()));
//!     let provisioner = Provisioner::new(
//!         config.clone(),
//!         users,
//!         GroupSync::new(groups),
//!         mapping,
//!     );
//!     let flow = LoginFlow::new(config, OidcNormalizer::new(), provisioner)?;
//!
//!     let payload = serde_json::json!({
//!         "sub": "ext-42",
//!         "preferred_username": "alice",
//!         "email": "alice@example.com",
//!     });
//!     let outcome = flow.login(&payload, &LoginContext::default()).await?;
//!     assert!(outcome.created);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Core types, errors, configuration, and collaborator traits.
pub use fedlink_core as core;

/// Mapping store and in-memory backends.
#[cfg(feature = "store")]
pub use fedlink_store as store;

/// The resolution and provisioning pipeline.
#[cfg(feature = "provision")]
pub use fedlink_provision as provision;

/// Payload normalization strategies.
#[cfg(feature = "oidc")]
pub mod providers {
    /// OIDC-shaped payload normalization.
    pub use fedlink_providers_oidc as oidc;
}
