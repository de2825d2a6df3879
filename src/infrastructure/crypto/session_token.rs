//! Session token generation and hashing
//!
//! The web surface authenticates with an opaque random token carried in
//! the `sessionid` cookie. Only the SHA-256 hash is ever persisted, so a
//! leaked database cannot be replayed as live cookies.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Generate an opaque session token: 32 random bytes, hex-encoded.
pub fn generate_session_token() -> String {
    let mut rng = rand::thread_rng();
    let random_bytes: [u8; 32] = rng.gen();
    hex::encode(random_bytes)
}

/// Hash a session token for storage using SHA-256
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique_and_hex() {
        let a = generate_session_token();
        let b = generate_session_token();
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_is_stable_and_distinct_from_token() {
        let token = generate_session_token();
        assert_eq!(hash_session_token(&token), hash_session_token(&token));
        assert_ne!(hash_session_token(&token), token);
    }
}
