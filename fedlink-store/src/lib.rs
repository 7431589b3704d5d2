//! # Fedlink Store
//!
//! Persistence layer for the fedlink identity-federation adapter: the
//! namespaced identity-mapping store layered over the host's key-value store
//! contract, plus in-memory reference implementations of every collaborator
//! trait for tests and backend-less embedding.

pub mod mapping;
pub mod memory;

pub use mapping::{provider_field, MappingStore};
pub use memory::{MemoryGroupStore, MemoryKv, MemoryUserStore};
