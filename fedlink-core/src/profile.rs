use serde::{Deserialize, Serialize};

/// The normalized, provider-independent representation of an authenticated
/// identity.
///
/// Produced by a [`ProfileNormalizer`](crate::ProfileNormalizer) from an
/// arbitrary provider payload. `external_id` and `email` are guaranteed
/// non-empty by the normalizer; `provider` is stamped by the login flow
/// after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalProfile {
    /// Stable, provider-issued subject identifier.
    pub external_id: String,
    /// Human-readable handle; the default local username on creation.
    pub display_name: String,
    /// Secondary lookup key for the email-based merge.
    pub email: String,
    /// Derived signal of elevated privilege in the provider's data.
    pub is_admin: bool,
    /// The configured provider name.
    pub provider: String,
}
