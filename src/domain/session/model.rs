//! Web session domain entity

use chrono::{DateTime, Utc};

/// Server-side session backing the `sessionid` cookie.
///
/// Only the SHA-256 hash of the cookie token is stored; the raw token
/// never touches the database.
#[derive(Debug, Clone)]
pub struct Session {
    pub token_hash: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Clone)]
pub struct NewSession {
    pub token_hash: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn expiry_is_inclusive_of_the_deadline() {
        let now = Utc::now();
        let session = Session {
            token_hash: "abc".into(),
            user_id: "u1".into(),
            created_at: now,
            expires_at: now + Duration::hours(1),
        };
        assert!(!session.is_expired(now));
        assert!(session.is_expired(now + Duration::hours(1)));
        assert!(session.is_expired(now + Duration::hours(2)));
    }
}
