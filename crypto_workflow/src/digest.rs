// crypto_demo/crypto_workflow/src/digest.rs

use sha2::{Digest as _, Sha256};

/// Length of a SHA-256 digest rendered as hex.
pub const DIGEST_HEX_LEN: usize = 64;

/// SHA-256 of the UTF-8 bytes of `input`, as lowercase hex.
///
/// Deterministic and unsalted, so the sender and receiver sides agree on
/// the digest of the same text. Runs locally and never suspends.
pub fn digest(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Whether `candidate` has the shape of a value returned by [`digest`].
pub fn is_digest_hex(candidate: &str) -> bool {
    if candidate.len() != DIGEST_HEX_LEN {
        return false;
    }
    candidate.chars().all(|c| c.is_ascii_hexdigit())
}
