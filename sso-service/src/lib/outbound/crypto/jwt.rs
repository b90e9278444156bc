use auth::Claims;
use auth::JwtError;
use auth::JwtHandler;
use chrono::Duration;
use chrono::Utc;

use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::Application;
use crate::domain::auth::models::User;
use crate::domain::auth::ports::TokenIssuer;

/// Issues HS256 tokens signed with the requesting application's secret.
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtTokenIssuer;

impl JwtTokenIssuer {
    pub fn new() -> Self {
        Self
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(
        &self,
        user: &User,
        application: &Application,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let handler = JwtHandler::new(application.secret.as_bytes()).map_err(|e| match e {
            JwtError::MissingSecret => TokenError::MissingSecret,
            other => TokenError::SigningFailed(other.to_string()),
        })?;

        let claims = Claims::issue(
            user.id.0,
            user.email.as_str(),
            application.id.0,
            Utc::now(),
            ttl,
        );

        handler
            .encode(&claims)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::models::AppId;
    use crate::domain::auth::models::EmailAddress;
    use crate::domain::auth::models::PasswordHash;
    use crate::domain::auth::models::UserId;

    fn user() -> User {
        User {
            id: UserId(11),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password_hash: PasswordHash::new("irrelevant"),
            is_admin: false,
        }
    }

    fn application(id: i32, secret: &str) -> Application {
        Application {
            id: AppId(id),
            name: format!("app-{}", id),
            secret: secret.to_string(),
        }
    }

    #[test]
    fn test_issue_binds_identity_and_expiry() {
        let ttl = Duration::minutes(30);
        let issued_at = Utc::now().timestamp();

        let token = JwtTokenIssuer::new()
            .issue(&user(), &application(1, "test-secret"), ttl)
            .unwrap();

        let claims = JwtHandler::new(b"test-secret")
            .unwrap()
            .decode(&token)
            .unwrap();

        assert_eq!(claims.user_id, 11);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.app_id, 1);
        assert!((claims.exp - (issued_at + ttl.num_seconds())).abs() <= 1);
    }

    #[test]
    fn test_token_rejected_by_other_application_secret() {
        let token = JwtTokenIssuer::new()
            .issue(&user(), &application(1, "secret-a"), Duration::hours(1))
            .unwrap();

        let result = JwtHandler::new(b"secret-b").unwrap().decode(&token);
        assert!(matches!(result, Err(JwtError::InvalidSignature)));
    }

    #[test]
    fn test_missing_secret() {
        let result = JwtTokenIssuer::new().issue(&user(), &application(1, ""), Duration::hours(1));
        assert!(matches!(result, Err(TokenError::MissingSecret)));
    }
}
