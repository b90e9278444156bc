use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an SSO token.
///
/// Binds a user identity to the application the token was issued for.
/// Timestamps are Unix seconds; `exp` follows RFC 7519 so standard JWT
/// libraries enforce it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject user identifier
    pub user_id: i64,

    /// Subject email
    pub email: String,

    /// Application the token is scoped to
    pub app_id: i32,

    /// Expiration time
    pub exp: i64,

    /// Issued at
    pub iat: i64,
}

impl Claims {
    /// Build claims for a token issued at `issued_at` and valid for `ttl`.
    ///
    /// Expiry is computed once here and never extended.
    pub fn issue(
        user_id: i64,
        email: impl Into<String>,
        app_id: i32,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            user_id,
            email: email.into(),
            app_id,
            exp: (issued_at + ttl).timestamp(),
            iat: issued_at.timestamp(),
        }
    }

    /// Time-to-live the claims were issued with.
    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.exp - self.iat)
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
