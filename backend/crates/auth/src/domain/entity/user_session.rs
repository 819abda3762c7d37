//! User Session Entity
//!
//! A persisted session token bound to one user. Valid iff the row exists
//! and `expires_at` is strictly in the future.

use chrono::{DateTime, Duration, Utc};

use crate::domain::value_object::{session_token::SessionToken, user_id::UserId};

#[derive(Debug, Clone)]
pub struct UserSession {
    pub token: SessionToken,
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
}

impl UserSession {
    /// Create a session with a fresh token
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, ttl: Duration) -> Self {
        Self::new_at(user_id, ttl, Utc::now())
    }

    pub fn new_at(user_id: UserId, ttl: Duration, now: DateTime<Utc>) -> Self {
        Self {
            token: SessionToken::generate(),
            user_id,
            expires_at: now + ttl,
        }
    }

    /// Expired at `now` (an expiry equal to `now` counts as expired)
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Time left before expiry, zero once expired
    pub fn remaining(&self) -> Duration {
        (self.expires_at - Utc::now()).max(Duration::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_expiry() {
        let now = Utc::now();
        let session = UserSession::new_at(UserId::from_raw(1), Duration::days(30), now);

        assert_eq!(session.expires_at, now + Duration::days(30));
        assert!(!session.is_expired_at(now));
        assert!(session.is_expired_at(now + Duration::days(30)));
        assert!(session.token.is_well_formed());
    }

    #[test]
    fn test_remaining() {
        let session = UserSession::new(UserId::from_raw(1), Duration::hours(1));
        assert!(session.remaining() > Duration::minutes(59));

        let past = UserSession::new_at(
            UserId::from_raw(1),
            Duration::hours(1),
            Utc::now() - Duration::hours(2),
        );
        assert!(past.is_expired());
        assert_eq!(past.remaining(), Duration::zero());
    }
}
