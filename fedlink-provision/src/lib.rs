//! # Fedlink Provision
//!
//! `fedlink-provision` is the identity resolution and account-provisioning
//! pipeline: it resolves a canonical profile against the persisted identity
//! mapping, provisions (creates or links) the local account, synchronizes
//! privileged-group membership, and removes the mapping on account deletion.
//!
//! ## Key Components
//!
//! - **[`Resolver`]**: read-only lookup of an existing local account for an
//!   external id.
//! - **[`Provisioner`]**: the create-or-link decision and its side effects.
//! - **[`GroupSync`]**: privileged-group membership for admin-flagged
//!   profiles.
//! - **[`Deprovisioner`]**: best-effort mapping cleanup on account deletion.
//! - **[`LoginFlow`]**: stitches normalize, provision and the session hook
//!   into one awaited sequence per login attempt.

#![warn(missing_docs)]

mod lock;

/// Best-effort mapping cleanup on account deletion.
pub mod deprovision;
/// The per-login orchestration sequence.
pub mod flow;
/// Privileged-group membership sync.
pub mod groups;
/// The create-or-link decision procedure.
pub mod provision;
/// Read-only identity resolution.
pub mod resolver;


pub use deprovision::Deprovisioner;
pub use flow::LoginFlow;
pub use groups::{GroupSync, ADMIN_GROUP};
pub use provision::{Provisioned, Provisioner, ProvisionWarning};
pub use resolver::Resolver;
