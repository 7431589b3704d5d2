//! Default normalization strategy for OIDC-shaped user-profile payloads:
//! `sub`, `preferred_username`, `email`, and an optional `roles` array.

use serde_json::Value;

use fedlink_core::{CanonicalProfile, FederationError, ProfileNormalizer};

/// Normalizer for the common OIDC claim names. Swap in a different
/// [`ProfileNormalizer`] to adapt to a provider with another payload shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct OidcNormalizer;

impl OidcNormalizer {
    /// Create the normalizer.
    pub fn new() -> Self {
        Self
    }
}

// Some providers issue numeric subject identifiers.
fn string_claim(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

impl ProfileNormalizer for OidcNormalizer {
    fn normalize(&self, raw: &Value) -> Result<CanonicalProfile, FederationError> {
        let obj = raw.as_object().ok_or_else(|| {
            FederationError::ProfileParse("payload is not a JSON object".to_string())
        })?;

        let external_id = string_claim(obj.get("sub"));
        if external_id.is_empty() {
            return Err(FederationError::ProfileParse(
                "missing subject identifier (sub)".to_string(),
            ));
        }

        let email = string_claim(obj.get("email"));
        if email.is_empty() {
            return Err(FederationError::ProfileParse(
                "missing email".to_string(),
            ));
        }

        let display_name = string_claim(obj.get("preferred_username"));

        let is_admin = match obj.get("roles") {
            Some(Value::Array(roles)) => roles.iter().any(|r| r.as_str() == Some("admin")),
            _ => false,
        };

        Ok(CanonicalProfile {
            external_id,
            display_name,
            email,
            is_admin,
            provider: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_a_full_payload() {
        let raw = json!({
            "sub": "ext-42",
            "preferred_username": "alice",
            "email": "alice@example.com",
            "roles": ["admin"]
        });
        let profile = OidcNormalizer::new().normalize(&raw).unwrap();

        assert_eq!(profile.external_id, "ext-42");
        assert_eq!(profile.display_name, "alice");
        assert_eq!(profile.email, "alice@example.com");
        assert!(profile.is_admin);
        assert!(profile.provider.is_empty());
    }

    #[test]
    fn absent_roles_default_to_non_admin() {
        let raw = json!({
            "sub": "ext-42",
            "preferred_username": "alice",
            "email": "alice@example.com"
        });
        let profile = OidcNormalizer::new().normalize(&raw).unwrap();
        assert!(!profile.is_admin);
    }

    #[test]
    fn non_array_roles_default_to_non_admin() {
        let raw = json!({
            "sub": "ext-42",
            "email": "alice@example.com",
            "roles": "admin"
        });
        let profile = OidcNormalizer::new().normalize(&raw).unwrap();
        assert!(!profile.is_admin);
    }

    #[test]
    fn other_roles_are_not_admin() {
        let raw = json!({
            "sub": "ext-42",
            "email": "alice@example.com",
            "roles": ["moderator", "editor"]
        });
        let profile = OidcNormalizer::new().normalize(&raw).unwrap();
        assert!(!profile.is_admin);
    }

    #[test]
    fn numeric_subject_identifiers_are_accepted() {
        let raw = json!({ "sub": 12345, "email": "alice@example.com" });
        let profile = OidcNormalizer::new().normalize(&raw).unwrap();
        assert_eq!(profile.external_id, "12345");
    }

    #[test]
    fn empty_payload_is_rejected() {
        let err = OidcNormalizer::new().normalize(&json!({})).unwrap_err();
        assert!(matches!(err, FederationError::ProfileParse(_)));
    }

    #[test]
    fn missing_email_is_rejected() {
        let raw = json!({ "sub": "ext-42", "preferred_username": "alice" });
        assert!(matches!(
            OidcNormalizer::new().normalize(&raw),
            Err(FederationError::ProfileParse(_))
        ));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(matches!(
            OidcNormalizer::new().normalize(&json!("just a string")),
            Err(FederationError::ProfileParse(_))
        ));
    }

    #[test]
    fn missing_display_name_is_tolerated() {
        let raw = json!({ "sub": "ext-42", "email": "alice@example.com" });
        let profile = OidcNormalizer::new().normalize(&raw).unwrap();
        assert!(profile.display_name.is_empty());
    }
}
