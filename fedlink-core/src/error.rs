use thiserror::Error;

/// Errors that can occur across the federation pipeline.
///
/// Every component surfaces a typed variant instead of swallowing the
/// underlying failure; no component retries internally. Retry policy, if
/// any, belongs to the caller.
#[derive(Debug, Error)]
pub enum FederationError {
    /// Missing or invalid startup configuration. Fatal to the adapter's
    /// registration, not to the host application.
    #[error("invalid adapter configuration: {0}")]
    Config(String),

    /// Malformed or incomplete provider payload. Aborts the single login
    /// attempt.
    #[error("malformed provider payload: {0}")]
    ProfileParse(String),

    /// Backend read/write failure in the mapping store or user store.
    #[error("store error: {0}")]
    Store(String),

    /// The account-creation call failed.
    #[error("account creation failed: {0}")]
    AccountCreate(String),

    /// Privileged-group sync failed. Carried as a non-fatal warning on an
    /// otherwise-successful provisioning result rather than failing the
    /// login.
    #[error("privileged-group sync failed: {0}")]
    GroupJoin(String),

    /// Mapping cleanup failed during account deletion. Reported to the
    /// deletion caller but does not resurrect the already-deleted account.
    #[error("mapping cleanup failed: {0}")]
    Delete(String),
}
