//! Authority reconciliation between the stored identity and a token.

use resolutions_security::AuthoritySet;

/// Compute the effective authorities of a request.
///
/// `identity_authorities` must already be role-expanded. Without token
/// scopes (password login) they are returned as-is. With token scopes the
/// result is the exact, case-sensitive intersection: a token can narrow what
/// the account may do, never widen it. An empty result is not an error.
#[must_use]
pub fn reconcile(
    identity_authorities: &AuthoritySet,
    token_authorities: Option<&AuthoritySet>,
) -> AuthoritySet {
    match token_authorities {
        None => identity_authorities.clone(),
        Some(scopes) => identity_authorities
            .intersection(scopes)
            .cloned()
            .collect(),
    }
}
