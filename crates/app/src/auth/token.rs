//! API token generation and hashing.
//!
//! Tokens look like `st_<64 hex chars>`. Only the SHA-256 digest of the whole token is stored,
//! so a token is shown once when issued and can never be recovered afterwards.

use std::fmt;

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

/// API token identifier prefix.
pub const API_TOKEN_PREFIX: &str = "st";

/// Number of secret bytes encoded in a token.
pub const API_TOKEN_SECRET_BYTES: usize = 32;

const API_TOKEN_SECRET_HEX_CHARS: usize = API_TOKEN_SECRET_BYTES * 2;

/// A freshly issued raw token. Its `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digest stored in place of the token.
    #[must_use]
    pub fn hash(&self) -> String {
        hash_api_token(&self.0)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(**redacted**)")
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[must_use]
pub fn generate_api_token() -> ApiToken {
    let mut secret = [0_u8; API_TOKEN_SECRET_BYTES];

    OsRng.fill_bytes(&mut secret);

    ApiToken(format!("{API_TOKEN_PREFIX}_{}", hex::encode(secret)))
}

/// Lowercase hex SHA-256 digest of a raw token.
#[must_use]
pub fn hash_api_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// Whether `token` has the shape of an issued token. Cheap check done before any lookup.
#[must_use]
pub fn is_well_formed(token: &str) -> bool {
    token
        .strip_prefix(API_TOKEN_PREFIX)
        .and_then(|rest| rest.strip_prefix('_'))
        .is_some_and(|secret| {
            secret.len() == API_TOKEN_SECRET_HEX_CHARS
                && secret.bytes().all(|b| b.is_ascii_hexdigit())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_are_well_formed_and_distinct() {
        let first = generate_api_token();
        let second = generate_api_token();

        assert!(is_well_formed(first.as_str()), "{first}");
        assert!(first.as_str().starts_with("st_"));
        assert_ne!(first, second);
    }

    #[test]
    fn hash_is_stable_lowercase_hex() {
        let token = generate_api_token();

        assert_eq!(token.hash(), hash_api_token(token.as_str()));
        assert_eq!(token.hash().len(), 64);
        assert!(token.hash().bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    }

    #[test]
    fn hash_of_known_input() {
        assert_eq!(
            hash_api_token("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("st_"));
        assert!(!is_well_formed("lt_00"));
        assert!(!is_well_formed(&format!("st_{}", "z".repeat(64))));
        assert!(!is_well_formed(&format!("xx_{}", "a".repeat(64))));
    }

    #[test]
    fn debug_output_is_redacted() {
        let token = generate_api_token();

        assert_eq!(format!("{token:?}"), "ApiToken(**redacted**)");
    }
}
