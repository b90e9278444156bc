use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email is empty")]
    Empty,

    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Failure reported by the identity store.
///
/// Every store outcome is one of success, `NotFound`, `Conflict` or `Internal`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Unique constraint violated")]
    Conflict,

    #[error("Storage error: {0}")]
    Internal(String),
}

/// Catastrophic failure while hashing a password.
#[derive(Debug, Clone, Error)]
#[error("Password hashing failed: {0}")]
pub struct HashError(pub String);

/// Failure while issuing a token.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Application has no signing secret")]
    MissingSecret,

    #[error("Token signing failed: {0}")]
    SigningFailed(String),
}

/// Domain error returned by every authentication operation.
///
/// Dependency failures are classified into exactly one of these before
/// leaving the service. `Internal` keeps the underlying detail for logs;
/// transports must not echo it.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown email or wrong password, deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid application")]
    InvalidApplication,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("Internal failure: {0}")]
    Internal(String),
}

impl From<HashError> for AuthError {
    fn from(err: HashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
