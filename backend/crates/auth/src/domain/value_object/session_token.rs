//! Session Token Value Object
//!
//! 64 random bytes rendered as unpadded URL-safe base64 (86 characters).
//! The full value is a bearer credential: `Debug` and logs only ever see
//! [`SessionToken::redacted`].

use std::fmt;

use platform::crypto;

/// Entropy of a freshly issued token
pub const SESSION_TOKEN_BYTES: usize = 64;

/// Characters of a token that may appear in logs
pub const LOG_PREFIX_LEN: usize = 10;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a new random token
    pub fn generate() -> Self {
        Self(crypto::random_token_urlsafe(SESSION_TOKEN_BYTES))
    }

    /// Wrap a token presented by a client, without validation
    ///
    /// Presented tokens of any shape are looked up the same way; a malformed
    /// one is simply never found.
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Whether the token has the shape of one this system issues
    pub fn is_well_formed(&self) -> bool {
        crypto::is_urlsafe_token(&self.0, SESSION_TOKEN_BYTES)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Log-safe prefix, e.g. `"aB3dE6gH9k..."`
    pub fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(LOG_PREFIX_LEN).collect();
        format!("{prefix}...")
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken")
            .field(&self.redacted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape() {
        let token = SessionToken::generate();
        assert_eq!(token.as_str().len(), 86);
        assert!(token.is_well_formed());
    }

    #[test]
    fn test_generated_tokens_differ() {
        assert_ne!(SessionToken::generate(), SessionToken::generate());
    }

    #[test]
    fn test_presented_garbage_is_not_well_formed() {
        assert!(!SessionToken::from_raw("").is_well_formed());
        assert!(!SessionToken::from_raw("not a token").is_well_formed());
        assert!(!SessionToken::from_raw("a".repeat(200)).is_well_formed());
    }

    #[test]
    fn test_redaction() {
        let token = SessionToken::generate();
        let redacted = token.redacted();
        assert_eq!(redacted.len(), LOG_PREFIX_LEN + 3);
        assert!(token.as_str().starts_with(&redacted[..LOG_PREFIX_LEN]));

        let debug = format!("{:?}", token);
        assert!(!debug.contains(token.as_str()));
    }

    #[test]
    fn test_short_token_redaction() {
        assert_eq!(SessionToken::from_raw("abc").redacted(), "abc...");
    }
}
