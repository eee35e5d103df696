//! Anti-forgery tokens bound to the authenticated user.
//!
//! A token is the SHA-256 digest of the server secret and the user
//! identifier, separated by a NUL byte, rendered as lowercase hex. Every
//! form carries it in the `csrf_token` field.

use crate::todo::domain::UserId;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Anti-forgery validation failure.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("anti-forgery token missing or invalid")]
pub struct CsrfRejection;

/// Issues and verifies anti-forgery tokens.
#[derive(Clone)]
pub struct CsrfTokens {
    secret: Vec<u8>,
}

impl CsrfTokens {
    /// Creates a token issuer keyed by `secret`.
    #[must_use]
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Returns the token forms must echo for `user_id`.
    #[must_use]
    pub fn token_for(&self, user_id: &UserId) -> String {
        let digest = Sha256::new()
            .chain_update(&self.secret)
            .chain_update([0_u8])
            .chain_update(user_id.as_str().as_bytes())
            .finalize();
        digest
            .iter()
            .flat_map(|byte| [byte >> 4, byte & 0x0f])
            .filter_map(|nibble| char::from_digit(u32::from(nibble), 16))
            .collect()
    }

    /// Checks a submitted token in constant time.
    ///
    /// # Errors
    ///
    /// Returns [`CsrfRejection`] when the token is absent or does not match.
    pub fn verify(&self, user_id: &UserId, submitted: &str) -> Result<(), CsrfRejection> {
        let expected = self.token_for(user_id);
        if expected.len() != submitted.len() {
            return Err(CsrfRejection);
        }
        let difference = expected
            .bytes()
            .zip(submitted.bytes())
            .fold(0_u8, |acc, (left, right)| acc | (left ^ right));
        if difference == 0 {
            Ok(())
        } else {
            Err(CsrfRejection)
        }
    }
}

impl std::fmt::Debug for CsrfTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsrfTokens").finish_non_exhaustive()
    }
}
