use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// HS256 token handler bound to one signing secret.
///
/// Each application signs with its own secret, so a handler is built per
/// application. A token encoded by one handler fails signature validation
/// under any other secret.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a handler for a signing secret.
    ///
    /// # Errors
    /// * `MissingSecret` - The secret is empty
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Encode and sign claims.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode a token, checking signature and expiry.
    ///
    /// # Errors
    /// * `InvalidSignature` - Token was not signed with this handler's secret
    /// * `TokenExpired` - `exp` is in the past
    /// * `DecodingFailed` - Token is malformed or claims are missing
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_required_spec_claims(&["exp"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    _ => JwtError::DecodingFailed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;

    fn claims() -> Claims {
        Claims::issue(1, "alice@example.com", 1, Utc::now(), Duration::hours(1))
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(b"test-secret").unwrap();
        let claims = claims();

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(JwtHandler::new(b""), Err(JwtError::MissingSecret)));
    }

    #[test]
    fn test_decode_invalid_token() {
        let handler = JwtHandler::new(b"test-secret").unwrap();

        let result = handler.decode("invalid.token.here");
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let app_a = JwtHandler::new(b"secret-of-app-a").unwrap();
        let app_b = JwtHandler::new(b"secret-of-app-b").unwrap();

        let token = app_a.encode(&claims()).expect("Failed to encode token");

        let result = app_b.decode(&token);
        assert!(matches!(result, Err(JwtError::InvalidSignature)));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(b"test-secret").unwrap();
        let issued_at = Utc::now() - Duration::hours(3);
        let claims = Claims::issue(1, "alice@example.com", 1, issued_at, Duration::hours(1));

        let token = handler.encode(&claims).unwrap();

        assert!(matches!(handler.decode(&token), Err(JwtError::TokenExpired)));
    }
}
