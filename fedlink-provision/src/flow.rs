use std::sync::Arc;

use fedlink_core::{
    AdapterConfig, FederationError, LoginContext, ProfileNormalizer, SessionHook,
};

use crate::provision::{Provisioned, Provisioner};

/// One awaited sequence per login attempt: normalize the raw provider
/// payload, stamp the provider name, provision the local account, then let
/// the host complete the external session.
pub struct LoginFlow<N: ProfileNormalizer> {
    config: Arc<AdapterConfig>,
    normalizer: N,
    provisioner: Provisioner,
    hook: Option<Arc<dyn SessionHook>>,
}

impl<N: ProfileNormalizer> LoginFlow<N> {
    /// Create a login flow. Validates the configuration once, up front: an
    /// invalid configuration yields [`FederationError::Config`] and the
    /// adapter must not be registered.
    pub fn new(
        config: Arc<AdapterConfig>,
        normalizer: N,
        provisioner: Provisioner,
    ) -> Result<Self, FederationError> {
        config.validate()?;
        Ok(Self {
            config,
            normalizer,
            provisioner,
            hook: None,
        })
    }

    /// Attach the host's session hook, invoked after a uid is resolved.
    pub fn with_session_hook(mut self, hook: Arc<dyn SessionHook>) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Run one login attempt against a raw provider payload.
    pub async fn login(
        &self,
        raw: &serde_json::Value,
        ctx: &LoginContext,
    ) -> Result<Provisioned, FederationError> {
        let mut profile = self.normalizer.normalize(raw)?;
        profile.provider = self.config.provider.clone();

        let outcome = self.provisioner.provision(&profile).await?;

        if let Some(hook) = &self.hook {
            hook.on_successful_login(ctx, &outcome.uid).await?;
        }
        Ok(outcome)
    }
}
