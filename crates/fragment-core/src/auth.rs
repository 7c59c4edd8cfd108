// ABOUTME: Pure credential checks for configuration writes.
// ABOUTME: Hashes the submitted password and compares it against the configured digest.

use sha2::{Digest, Sha256};

/// Uppercase hex SHA-256 digest of a plaintext password. This is the form
/// the server is configured with; the plaintext itself is never stored.
pub fn password_digest(password: &str) -> String {
    hex::encode_upper(Sha256::digest(password.as_bytes()))
}

/// Check a submitted password against the configured digest.
///
/// The submitted plaintext is re-hashed and the two fixed-length digests are
/// compared case-insensitively, so the configured digest may be in either
/// case. An empty expected digest never matches: it means writes are
/// disabled, not that the empty password is accepted.
pub fn verify_password(expected_digest: &str, password: &str) -> bool {
    if expected_digest.is_empty() {
        return false;
    }

    password_digest(password).eq_ignore_ascii_case(expected_digest)
}
