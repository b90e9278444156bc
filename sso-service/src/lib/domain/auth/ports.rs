use async_trait::async_trait;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::HashError;
use crate::domain::auth::errors::RepositoryError;
use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::Application;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::PasswordHash;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for authentication operations exposed to transports.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a token scoped to the requested application.
    ///
    /// # Arguments
    /// * `command` - Email, plaintext password and application id
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `InvalidApplication` - Application id does not resolve
    /// * `Internal` - Store, hashing or signing fault
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;

    /// Register a new user with an irreversibly hashed password.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// Identifier assigned to the new user
    ///
    /// # Errors
    /// * `InvalidInput` - Password is empty
    /// * `UserAlreadyExists` - Email is already registered
    /// * `Internal` - Store or hashing fault
    async fn register_new_user(&self, command: RegisterUserCommand) -> Result<UserId, AuthError>;

    /// Report whether a user carries the administrator flag.
    ///
    /// # Arguments
    /// * `user_id` - User ID
    ///
    /// # Returns
    /// The stored flag, verbatim
    ///
    /// # Errors
    /// * `UserNotFound` - User does not exist
    /// * `Internal` - Store fault
    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
}

/// Persistence operations for users.
///
/// All operations are point reads or writes keyed by a unique field.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Returns
    /// Identifier assigned by the store (never `UserId::EMPTY`)
    ///
    /// # Errors
    /// * `Conflict` - Email is already registered
    /// * `Internal` - Storage operation failed
    async fn create(
        &self,
        email: &EmailAddress,
        password_hash: &PasswordHash,
    ) -> Result<UserId, RepositoryError>;

    /// Retrieve user by email.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `Internal` - Storage operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<User, RepositoryError>;

    /// Retrieve the administrator flag of a user.
    ///
    /// # Errors
    /// * `NotFound` - No user with this id
    /// * `Internal` - Storage operation failed
    async fn find_admin_flag(&self, id: UserId) -> Result<bool, RepositoryError>;
}

/// Read-only access to registered applications.
#[async_trait]
pub trait ApplicationRepository: Send + Sync + 'static {
    /// Retrieve application by identifier.
    ///
    /// # Errors
    /// * `NotFound` - No application with this id
    /// * `Internal` - Storage operation failed
    async fn find_by_id(&self, id: AppId) -> Result<Application, RepositoryError>;
}

/// One-way salted password hashing.
///
/// Async because hashing is CPU-bound and must run off the request executor.
#[async_trait]
pub trait CredentialHasher: Send + Sync + 'static {
    /// Produce a salted digest. Fails only on internal faults, never on input content.
    async fn hash(&self, password: &str) -> Result<PasswordHash, HashError>;

    /// Check a plaintext against a stored digest.
    ///
    /// Returns `false` both on mismatch and on a malformed digest; callers
    /// cannot tell the two apart.
    async fn verify(&self, hash: &PasswordHash, password: &str) -> bool;
}

/// Signs claims on behalf of an application.
pub trait TokenIssuer: Send + Sync + 'static {
    /// Issue a token for `user`, signed with `application`'s secret, expiring after `ttl`.
    ///
    /// # Errors
    /// * `MissingSecret` - Application has no secret
    /// * `SigningFailed` - Encoding or signing failed
    fn issue(
        &self,
        user: &User,
        application: &Application,
        ttl: Duration,
    ) -> Result<String, TokenError>;
}
