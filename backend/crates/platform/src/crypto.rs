//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 tag length in bytes
pub const HMAC_SHA256_LEN: usize = 32;

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Encoded length of `byte_len` bytes in unpadded base64
pub const fn urlsafe_encoded_len(byte_len: usize) -> usize {
    (byte_len * 4).div_ceil(3)
}

/// Random token of `byte_len` bytes, URL-safe base64 without padding
pub fn random_token_urlsafe(byte_len: usize) -> String {
    encode_urlsafe(&random_bytes(byte_len))
}

/// URL-safe base64 without padding
pub fn encode_urlsafe(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

pub fn decode_urlsafe(s: &str) -> Option<Vec<u8>> {
    URL_SAFE_NO_PAD.decode(s).ok()
}

/// Whether `s` has the exact shape of a [`random_token_urlsafe`] output
pub fn is_urlsafe_token(s: &str, byte_len: usize) -> bool {
    s.len() == urlsafe_encoded_len(byte_len)
        && s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        && URL_SAFE_NO_PAD
            .decode(s)
            .is_ok_and(|decoded| decoded.len() == byte_len)
}

/// Compute HMAC-SHA256
///
/// HMAC accepts keys of any length, so `None` is not expected in practice.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Option<[u8; HMAC_SHA256_LEN]> {
    let mut mac = HmacSha256::new_from_slice(key).ok()?;
    mac.update(data);
    Some(mac.finalize().into_bytes().into())
}

/// Check an HMAC-SHA256 tag in constant time
pub fn verify_hmac_sha256(key: &[u8], data: &[u8], tag: &[u8]) -> bool {
    let Ok(mut mac) = HmacSha256::new_from_slice(key) else {
        return false;
    };
    mac.update(data);
    mac.verify_slice(tag).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_token_length() {
        assert_eq!(urlsafe_encoded_len(64), 86);
        assert_eq!(urlsafe_encoded_len(32), 43);

        let token = random_token_urlsafe(64);
        assert_eq!(token.len(), 86);
        assert!(is_urlsafe_token(&token, 64));
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = random_token_urlsafe(64);
        let b = random_token_urlsafe(64);
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        let token = random_token_urlsafe(64);
        assert!(!is_urlsafe_token(&token[..85], 64));
        assert!(!is_urlsafe_token(&format!("{}=", &token[..85]), 64));
        assert!(!is_urlsafe_token(&"+".repeat(86), 64));
        assert!(!is_urlsafe_token("", 64));
    }

    #[test]
    fn test_hmac_consistency() {
        let key = [7u8; 32];
        let data = b"user:1";

        let tag = hmac_sha256(&key, data).unwrap();
        assert_eq!(tag, hmac_sha256(&key, data).unwrap());
        assert_ne!(tag, hmac_sha256(&[8u8; 32], data).unwrap());
        assert_ne!(tag, hmac_sha256(&key, b"user:2").unwrap());
    }

    #[test]
    fn test_verify_hmac() {
        let key = random_bytes(32);
        let tag = hmac_sha256(&key, b"payload").unwrap();

        assert!(verify_hmac_sha256(&key, b"payload", &tag));
        assert!(!verify_hmac_sha256(&key, b"payload!", &tag));
        assert!(!verify_hmac_sha256(&key, b"payload", &tag[..31]));
        assert!(!verify_hmac_sha256(&[0u8; 32], b"payload", &tag));
    }
}
