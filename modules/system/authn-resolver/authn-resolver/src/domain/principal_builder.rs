//! Freezes a resolved identity into a [`Principal`].

use authn_resolver_sdk::{Identity, TokenClaims};
use resolutions_security::{AuthenticationMethod, AuthoritySet, Principal};
use secrecy::SecretString;

use super::error::DomainError;

/// Claims of a validated bearer token together with the token itself.
#[derive(Debug, Clone)]
pub struct ValidatedToken {
    pub claims: TokenClaims,
    pub raw: SecretString,
}

/// Compose an identity, its effective authorities and optional token into a principal.
///
/// The attribute map is the token's claim map when a token is present and
/// empty otherwise.
///
/// # Errors
///
/// Returns [`DomainError::MissingIdentity`] if `identity` is `None`.
pub fn build_principal(
    identity: Option<&Identity>,
    effective_authorities: AuthoritySet,
    token: Option<ValidatedToken>,
) -> Result<Principal, DomainError> {
    let identity = identity.ok_or(DomainError::MissingIdentity)?;

    let builder = Principal::builder()
        .name(identity.name())
        .authorities(effective_authorities);

    let principal = match token {
        None => builder.method(AuthenticationMethod::Password).build(),
        Some(ValidatedToken { claims, raw }) => builder
            .method(AuthenticationMethod::Bearer)
            .attributes(claims.attributes)
            .bearer_token(raw)
            .build(),
    };

    Ok(principal)
}
