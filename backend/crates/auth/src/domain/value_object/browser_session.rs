//! Browser Session Token
//!
//! Stateless credential for sign-ins without "remember me". Nothing is
//! stored, so issuing one never supersedes the user's remembered session.
//!
//! Wire form: `bs.` followed by unpadded URL-safe base64 of
//! `user_id (i32 BE) || expires_at (i64 BE, unix seconds) || HMAC-SHA256`
//! where the tag covers the first 12 bytes.

use chrono::{DateTime, Duration, Utc};
use platform::crypto::{self, HMAC_SHA256_LEN};

use crate::domain::value_object::user_id::UserId;

pub const BROWSER_TOKEN_PREFIX: &str = "bs.";

const PAYLOAD_LEN: usize = 4 + 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserSession {
    pub user_id: UserId,
    /// Whole seconds; sub-second precision is not carried on the wire
    pub expires_at: DateTime<Utc>,
}

impl BrowserSession {
    pub fn new(user_id: UserId, ttl: Duration) -> Self {
        Self::new_at(user_id, Utc::now(), ttl)
    }

    pub fn new_at(user_id: UserId, now: DateTime<Utc>, ttl: Duration) -> Self {
        let expires_at = now + ttl;
        Self {
            user_id,
            expires_at: DateTime::from_timestamp(expires_at.timestamp(), 0).unwrap_or(expires_at),
        }
    }

    /// Whether a presented credential uses this format
    pub fn is_browser_token(raw: &str) -> bool {
        raw.starts_with(BROWSER_TOKEN_PREFIX)
    }

    fn payload(&self) -> [u8; PAYLOAD_LEN] {
        let mut payload = [0u8; PAYLOAD_LEN];
        payload[..4].copy_from_slice(&self.user_id.value().to_be_bytes());
        payload[4..].copy_from_slice(&self.expires_at.timestamp().to_be_bytes());
        payload
    }

    /// Signed wire form
    pub fn sign(&self, secret: &[u8]) -> Option<String> {
        let payload = self.payload();
        let tag = crypto::hmac_sha256(secret, &payload)?;

        let mut token = Vec::with_capacity(PAYLOAD_LEN + HMAC_SHA256_LEN);
        token.extend_from_slice(&payload);
        token.extend_from_slice(&tag);
        Some(format!(
            "{BROWSER_TOKEN_PREFIX}{}",
            crypto::encode_urlsafe(&token)
        ))
    }

    /// Decode a presented token; `None` unless the tag matches and
    /// `expires_at` is after `now`
    pub fn verify(raw: &str, secret: &[u8], now: DateTime<Utc>) -> Option<Self> {
        let encoded = raw.strip_prefix(BROWSER_TOKEN_PREFIX)?;
        let bytes = crypto::decode_urlsafe(encoded)?;
        if bytes.len() != PAYLOAD_LEN + HMAC_SHA256_LEN {
            return None;
        }

        let (payload, tag) = bytes.split_at(PAYLOAD_LEN);
        if !crypto::verify_hmac_sha256(secret, payload, tag) {
            return None;
        }

        let user_id = i32::from_be_bytes(payload[..4].try_into().ok()?);
        let expires_at = i64::from_be_bytes(payload[4..].try_into().ok()?);
        let expires_at = DateTime::from_timestamp(expires_at, 0)?;

        (expires_at > now).then_some(Self {
            user_id: UserId::from_raw(user_id),
            expires_at,
        })
    }
}
