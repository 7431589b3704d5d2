use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FederationError;

/// Which authentication-strategy flavour the host's strategy library should
/// instantiate for this provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// OAuth 1.0a, three-legged.
    OAuth,
    /// OAuth 2.0 authorization code.
    OAuth2,
}

impl FromStr for StrategyKind {
    type Err = FederationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oauth" => Ok(Self::OAuth),
            "oauth2" => Ok(Self::OAuth2),
            other => Err(FederationError::Config(format!(
                "unrecognized strategy type '{other}', expected 'oauth' or 'oauth2'"
            ))),
        }
    }
}

/// OAuth 1.0a endpoint and credential block, consumed by the host's strategy
/// library. This crate never dereferences these URLs itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OAuth1Endpoints {
    /// Request-token endpoint.
    pub request_token_url: String,
    /// Access-token endpoint.
    pub access_token_url: String,
    /// User-authorization endpoint.
    pub user_authorization_url: String,
    /// Consumer key.
    pub consumer_key: String,
    /// Consumer secret.
    pub consumer_secret: String,
}

/// OAuth 2.0 endpoint and credential block, consumed by the host's strategy
/// library. This crate never dereferences these URLs itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OAuth2Endpoints {
    /// Authorization endpoint.
    pub authorization_url: String,
    /// Token endpoint.
    pub token_url: String,
    /// Client id.
    pub client_id: String,
    /// Client secret.
    pub client_secret: String,
}

/// Configuration for one federated provider, constructed once at startup and
/// passed by reference into every component constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Unique lowercase provider name, e.g. `"github"`.
    pub provider: String,
    /// Which strategy flavour to register.
    pub strategy: StrategyKind,
    /// The provider's user-profile endpoint (expects JSON).
    pub user_route: String,
    /// Path the provider redirects back to after authorization.
    pub callback_path: String,
    /// Comma-separated scope list requested from the provider.
    pub scope: String,
    /// Icon identifier shown on the host's login page.
    pub icon: String,
    /// When true, accounts created through this provider are recorded as
    /// having consented to the terms, skipping the interactive consent step.
    pub skip_consent_banner: bool,
    /// OAuth 1.0a block, required by the host when `strategy` is
    /// [`StrategyKind::OAuth`].
    pub oauth: Option<OAuth1Endpoints>,
    /// OAuth 2.0 block, required by the host when `strategy` is
    /// [`StrategyKind::OAuth2`].
    pub oauth2: Option<OAuth2Endpoints>,
}

impl AdapterConfig {
    /// Create a configuration with the defaults the reference deployment
    /// ships: scope `profile`, icon `fa-check-square`, callback path
    /// `/auth/{provider}/callback`, consent banner skipped.
    pub fn new(
        provider: impl Into<String>,
        strategy: StrategyKind,
        user_route: impl Into<String>,
    ) -> Self {
        let provider = provider.into();
        let callback_path = format!("/auth/{provider}/callback");
        Self {
            provider,
            strategy,
            user_route: user_route.into(),
            callback_path,
            scope: "profile".to_string(),
            icon: "fa-check-square".to_string(),
            skip_consent_banner: true,
            oauth: None,
            oauth2: None,
        }
    }

    /// Override the requested scope (comma-separated).
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Override the login-page icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Override the callback path.
    pub fn with_callback_path(mut self, path: impl Into<String>) -> Self {
        self.callback_path = path.into();
        self
    }

    /// Control whether provider-created accounts bypass the interactive
    /// consent step.
    pub fn with_skip_consent_banner(mut self, skip: bool) -> Self {
        self.skip_consent_banner = skip;
        self
    }

    /// Attach the OAuth 1.0a endpoint block.
    pub fn with_oauth(mut self, endpoints: OAuth1Endpoints) -> Self {
        self.oauth = Some(endpoints);
        self
    }

    /// Attach the OAuth 2.0 endpoint block.
    pub fn with_oauth2(mut self, endpoints: OAuth2Endpoints) -> Self {
        self.oauth2 = Some(endpoints);
        self
    }

    /// Verify the minimum settings needed to operate.
    ///
    /// Evaluated once at startup, not per-request. On failure the adapter
    /// must refuse to register itself with the host's strategy list and must
    /// not attempt any network or store operation.
    pub fn validate(&self) -> Result<(), FederationError> {
        if self.provider.trim().is_empty() {
            return Err(FederationError::Config(
                "provider name must not be empty".to_string(),
            ));
        }
        if self.user_route.trim().is_empty() {
            return Err(FederationError::Config(
                "user-profile route must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Produce the descriptor the host pushes onto its strategy list.
    ///
    /// This is the registration gate: an invalid configuration yields a
    /// [`FederationError::Config`] and no descriptor.
    pub fn strategy_registration(&self) -> Result<StrategyRegistration, FederationError> {
        self.validate()?;
        Ok(StrategyRegistration {
            name: self.provider.clone(),
            url: format!("/auth/{}", self.provider),
            callback_url: self.callback_path.clone(),
            icon: self.icon.clone(),
            scope: self
                .scope
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }
}

/// What the host's authentication-strategy list needs to know about this
/// provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyRegistration {
    /// Provider name.
    pub name: String,
    /// Login entry-point path.
    pub url: String,
    /// Callback path.
    pub callback_url: String,
    /// Login-page icon identifier.
    pub icon: String,
    /// Requested scopes, split from the configured comma-separated list.
    pub scope: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_provider_name() {
        let config = AdapterConfig::new("acme", StrategyKind::OAuth2, "https://id.acme.test/me");
        assert_eq!(config.callback_path, "/auth/acme/callback");
        assert_eq!(config.scope, "profile");
        assert_eq!(config.icon, "fa-check-square");
        assert!(config.skip_consent_banner);
    }

    #[test]
    fn validate_rejects_empty_provider() {
        let config = AdapterConfig::new("", StrategyKind::OAuth2, "https://id.acme.test/me");
        assert!(matches!(
            config.validate(),
            Err(FederationError::Config(_))
        ));
    }

    #[test]
    fn validate_rejects_empty_user_route() {
        let config = AdapterConfig::new("acme", StrategyKind::OAuth, "");
        assert!(matches!(
            config.validate(),
            Err(FederationError::Config(_))
        ));
    }

    #[test]
    fn strategy_kind_parses_recognized_values_only() {
        assert_eq!("oauth".parse::<StrategyKind>().unwrap(), StrategyKind::OAuth);
        assert_eq!(
            "oauth2".parse::<StrategyKind>().unwrap(),
            StrategyKind::OAuth2
        );
        assert!("saml".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn registration_splits_scope_list() {
        let config = AdapterConfig::new("acme", StrategyKind::OAuth2, "https://id.acme.test/me")
            .with_scope("profile, email,groups");
        let reg = config.strategy_registration().unwrap();
        assert_eq!(reg.name, "acme");
        assert_eq!(reg.url, "/auth/acme");
        assert_eq!(reg.scope, vec!["profile", "email", "groups"]);
    }

    #[test]
    fn registration_refused_on_invalid_config() {
        let config = AdapterConfig::new("", StrategyKind::OAuth2, "https://id.acme.test/me");
        assert!(config.strategy_registration().is_err());
    }
}
