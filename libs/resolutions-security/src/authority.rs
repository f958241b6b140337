use std::collections::BTreeSet;

/// A set of authority strings.
///
/// Ordered so that logs and serialized principals are deterministic.
/// Comparison is exact and case-sensitive; no normalization is applied.
pub type AuthoritySet = BTreeSet<String>;

/// Build an [`AuthoritySet`] from anything yielding string-like items.
pub fn authority_set<I, S>(authorities: I) -> AuthoritySet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    authorities.into_iter().map(Into::into).collect()
}
