//! Password digest stored in the `users.password` column.
//!
//! The digest is an unsalted SHA-256 of the plaintext, hex encoded. This is a
//! known weakness: equal passwords share a digest and the column is open to
//! precomputed-table attacks. It stays deterministic because sign-in matches
//! identifier and digest in a single lookup, and because existing stores hold
//! digests in this exact format.

use sha2::{Digest, Sha256};

pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}
