//! # Password Hashing
//!
//! Salted one-way password hashing for rowbind.
//!
//! Hash text is laid out as `sha256$<salt-hex>$<digest-hex>` where the digest
//! is SHA-256 over the raw salt bytes followed by the plaintext. The salt is
//! drawn per call from the operating system's CSPRNG, so two hashes of the
//! same plaintext differ while both verify. Verification parses the embedded
//! salt, recomputes the digest, and compares exactly: case and whitespace
//! both matter.
//!
//! ## Example
//! ```rust
//! use rowbind_auth::{hash_password, verify_password};
//!
//! # fn main() -> Result<(), rowbind_auth::AuthError> {
//! let hash = hash_password("testing")?;
//! assert!(verify_password("testing", &hash));
//! assert!(!verify_password("Testing", &hash));
//! # Ok(())
//! # }
//! ```

mod error;

use sha2::{Digest, Sha256};
use tracing::warn;

pub use error::{AuthError, AuthErrorExt};

/// Salt length in raw bytes (32 hex characters on the wire).
const SALT_LEN: usize = 16;

/// Scheme tag carried in the hash text for forward-compatible upgrades.
const SCHEME: &str = "sha256";

/// Hashes `plain` with a fresh random salt.
///
/// # Errors
/// Returns [`AuthError::Internal`] if the operating system's entropy source
/// fails. This is a rare critical failure that usually indicates an
/// environment-level issue with the OS entropy pool.
pub fn hash_password(plain: &str) -> Result<String, AuthError> {
    let mut salt = [0u8; SALT_LEN];
    getrandom::fill(&mut salt).map_err(|e| AuthError::Internal {
        message: e.to_string().into(),
        context: Some("Failed to generate password salt".into()),
    })?;

    Ok(format!("{SCHEME}${}${}", hex::encode(salt), hex::encode(digest(&salt, plain))))
}

/// Checks `plain` against previously produced hash text.
///
/// Malformed hash text verifies false rather than failing; the caller is
/// treating it as a credential check, not a parser.
#[must_use]
pub fn verify_password(plain: &str, hash: &str) -> bool {
    let mut parts = hash.split('$');
    let (Some(scheme), Some(salt_hex), Some(digest_hex), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        warn!("Password hash does not follow the scheme$salt$digest layout");
        return false;
    };
    if scheme != SCHEME {
        warn!(scheme, "Unsupported password hash scheme");
        return false;
    }
    let Ok(salt) = hex::decode(salt_hex) else {
        warn!("Password hash salt is not valid hex");
        return false;
    };

    hex::encode(digest(&salt, plain)) == digest_hex
}

fn digest(salt: &[u8], plain: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(plain.as_bytes());
    hasher.finalize().into()
}
