//! Password verification by `{id}`-prefixed hash encoding.

use authn_resolver_sdk::PasswordVerifier;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Supported hash encodings, selected by the `{id}` prefix of a stored hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    /// Plain text. Development only.
    Noop,
    /// Lower-case hex of the SHA-256 digest.
    Sha256,
}

impl Encoding {
    fn parse(password_hash: &str) -> Option<(Self, &str)> {
        let rest = password_hash.strip_prefix('{')?;
        let (id, encoded) = rest.split_once('}')?;
        let encoding = match id {
            "noop" => Self::Noop,
            "sha256" => Self::Sha256,
            _ => return None,
        };
        Some((encoding, encoded))
    }
}

/// Dispatches on the `{id}` prefix of the stored hash.
///
/// A hash with no prefix or an unknown id never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelegatingPasswordVerifier;

impl DelegatingPasswordVerifier {
    /// Encode `password` as `{sha256}<hex>`.
    #[must_use]
    pub fn encode_sha256(password: &str) -> String {
        format!("{{sha256}}{}", hex::encode(Sha256::digest(password.as_bytes())))
    }
}

impl PasswordVerifier for DelegatingPasswordVerifier {
    fn verify(&self, password: &SecretString, password_hash: &str) -> bool {
        let Some((encoding, encoded)) = Encoding::parse(password_hash) else {
            return false;
        };

        let presented = Sha256::digest(password.expose_secret().as_bytes());
        let stored: [u8; 32] = match encoding {
            // Compared as digests: both sides are 32 bytes whatever the password.
            Encoding::Noop => Sha256::digest(encoded.as_bytes()).into(),
            Encoding::Sha256 => {
                let Some(digest) = hex::decode(encoded)
                    .ok()
                    .and_then(|bytes| <[u8; 32]>::try_from(bytes).ok())
                else {
                    return false;
                };
                digest
            }
        };
        presented.as_slice().ct_eq(stored.as_slice()).into()
    }
}
