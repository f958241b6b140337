//! Static bearer-token validator.

use std::collections::HashMap;

use async_trait::async_trait;
use authn_resolver_sdk::{TokenClaims, TokenValidationError, TokenValidatorClient};
use secrecy::{ExposeSecret, SecretString};

use crate::config::TokenMapping;

/// Validates bearer tokens against a fixed table.
///
/// Stands in for an upstream issuer: a token is valid iff it is listed.
/// Scope prefix stripping happens here, before claims reach the resolver.
pub struct StaticTokenValidator {
    tokens: HashMap<String, TokenClaims>,
    scope_prefix: Option<String>,
}

impl StaticTokenValidator {
    #[must_use]
    pub fn new(mappings: &[TokenMapping], scope_prefix: Option<String>) -> Self {
        let tokens = mappings
            .iter()
            .map(|m| (m.token.clone(), m.claims.clone()))
            .collect();

        Self {
            tokens,
            scope_prefix,
        }
    }

    fn strip_prefix(&self, mut claims: TokenClaims) -> TokenClaims {
        if let Some(prefix) = self.scope_prefix.as_deref() {
            claims.scopes = claims
                .scopes
                .into_iter()
                .map(|scope| match scope.strip_prefix(prefix) {
                    Some(stripped) => stripped.to_owned(),
                    None => scope,
                })
                .collect();
        }
        claims
    }
}

#[async_trait]
impl TokenValidatorClient for StaticTokenValidator {
    async fn validate(
        &self,
        bearer_token: &SecretString,
    ) -> Result<TokenClaims, TokenValidationError> {
        let raw = bearer_token.expose_secret();
        if raw.is_empty() {
            return Err(TokenValidationError("empty token".to_owned()));
        }

        let claims = self
            .tokens
            .get(raw)
            .cloned()
            .ok_or_else(|| TokenValidationError("unknown token".to_owned()))?;

        Ok(self.strip_prefix(claims))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use resolutions_security::authority_set;

    use super::*;

    fn mapping(token: &str, subject: &str, scopes: &[&str]) -> TokenMapping {
        TokenMapping {
            token: token.to_owned(),
            claims: TokenClaims {
                subject: subject.to_owned(),
                scopes: authority_set(scopes.iter().copied()),
                ..TokenClaims::default()
            },
        }
    }

    #[tokio::test]
    async fn known_token_yields_claims() {
        let validator =
            StaticTokenValidator::new(&[mapping("t-user", "user", &["resolution:read"])], None);

        let claims = validator
            .validate(&SecretString::from("t-user".to_owned()))
            .await
            .unwrap();

        assert_eq!(claims.subject, "user");
        assert_eq!(claims.scopes, authority_set(["resolution:read"]));
    }

    #[tokio::test]
    async fn unknown_and_empty_tokens_are_rejected() {
        let validator = StaticTokenValidator::new(&[mapping("t-user", "user", &[])], None);

        for raw in ["", "t-other"] {
            let result = validator.validate(&SecretString::from(raw.to_owned())).await;
            assert!(result.is_err(), "token {raw:?} should be rejected");
        }
    }

    #[tokio::test]
    async fn scope_prefix_is_stripped() {
        let validator = StaticTokenValidator::new(
            &[mapping(
                "t-user",
                "user",
                &["SCOPE_resolution:read", "resolution:write"],
            )],
            Some("SCOPE_".to_owned()),
        );

        let claims = validator
            .validate(&SecretString::from("t-user".to_owned()))
            .await
            .unwrap();

        assert_eq!(
            claims.scopes,
            authority_set(["resolution:read", "resolution:write"])
        );
    }
}
