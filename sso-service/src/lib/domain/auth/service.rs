use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use super::errors::AuthError;
use super::errors::RepositoryError;
use super::models::LoginCommand;
use super::models::RegisterUserCommand;
use super::models::UserId;
use super::ports::ApplicationRepository;
use super::ports::AuthServicePort;
use super::ports::CredentialHasher;
use super::ports::TokenIssuer;
use super::ports::UserRepository;

/// Authentication orchestrator.
///
/// Composes the identity store, the credential hasher and the token issuer
/// into login, registration and admin lookup. Holds no per-call state; every
/// call re-resolves users and applications from the store.
pub struct AuthService<UR, AR, H, T>
where
    UR: UserRepository,
    AR: ApplicationRepository,
    H: CredentialHasher,
    T: TokenIssuer,
{
    user_repository: Arc<UR>,
    application_repository: Arc<AR>,
    credential_hasher: Arc<H>,
    token_issuer: Arc<T>,
    token_ttl: Duration,
}

impl<UR, AR, H, T> AuthService<UR, AR, H, T>
where
    UR: UserRepository,
    AR: ApplicationRepository,
    H: CredentialHasher,
    T: TokenIssuer,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `user_repository` - User persistence implementation
    /// * `application_repository` - Application lookup implementation
    /// * `credential_hasher` - Password hashing implementation
    /// * `token_issuer` - Token signing implementation
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(
        user_repository: Arc<UR>,
        application_repository: Arc<AR>,
        credential_hasher: Arc<H>,
        token_issuer: Arc<T>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_repository,
            application_repository,
            credential_hasher,
            token_issuer,
            token_ttl,
        }
    }
}

#[async_trait]
impl<UR, AR, H, T> AuthServicePort for AuthService<UR, AR, H, T>
where
    UR: UserRepository,
    AR: ApplicationRepository,
    H: CredentialHasher,
    T: TokenIssuer,
{
    #[tracing::instrument(name = "auth.login", skip_all, fields(app_id = %command.app_id))]
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError> {
        tracing::info!("Attempting to login user");
        tracing::debug!(email = %command.email, "Login requested");

        if command.password.is_empty() {
            tracing::warn!("Empty password rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let user = match self.user_repository.find_by_email(&command.email).await {
            Ok(user) => user,
            Err(RepositoryError::NotFound) => {
                tracing::warn!("User not found");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to get user");
                return Err(AuthError::Internal(e.to_string()));
            }
        };

        if !self
            .credential_hasher
            .verify(&user.password_hash, &command.password)
            .await
        {
            tracing::info!(user_id = %user.id, "Password verification failed");
            return Err(AuthError::InvalidCredentials);
        }

        let application = match self
            .application_repository
            .find_by_id(command.app_id)
            .await
        {
            Ok(application) => application,
            Err(RepositoryError::NotFound) => {
                tracing::warn!("Application not found");
                return Err(AuthError::InvalidApplication);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to get application");
                return Err(AuthError::Internal(e.to_string()));
            }
        };

        let token = self
            .token_issuer
            .issue(&user, &application, self.token_ttl)
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to issue token");
                AuthError::from(e)
            })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(token)
    }

    #[tracing::instrument(name = "auth.register_new_user", skip_all)]
    async fn register_new_user(&self, command: RegisterUserCommand) -> Result<UserId, AuthError> {
        tracing::info!("Registering new user");
        tracing::debug!(email = %command.email, "Registration requested");

        if command.password.trim().is_empty() {
            return Err(AuthError::InvalidInput("password is required"));
        }

        let password_hash = self
            .credential_hasher
            .hash(&command.password)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to generate password hash");
                AuthError::from(e)
            })?;

        let user_id = match self
            .user_repository
            .create(&command.email, &password_hash)
            .await
        {
            Ok(user_id) => user_id,
            Err(RepositoryError::Conflict) => {
                tracing::warn!("User already exists");
                return Err(AuthError::UserAlreadyExists);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save user");
                return Err(AuthError::Internal(e.to_string()));
            }
        };

        if user_id.is_empty() {
            tracing::error!("Store assigned the empty user id");
            return Err(AuthError::Internal(
                "store returned empty user id".to_string(),
            ));
        }

        tracing::info!(user_id = %user_id, "User registered");

        Ok(user_id)
    }

    #[tracing::instrument(name = "auth.is_admin", skip_all, fields(user_id = %user_id))]
    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        tracing::info!("Checking if user is admin");

        if user_id.is_empty() {
            return Err(AuthError::UserNotFound);
        }

        let is_admin = match self.user_repository.find_admin_flag(user_id).await {
            Ok(is_admin) => is_admin,
            Err(RepositoryError::NotFound) => {
                tracing::warn!("User not found");
                return Err(AuthError::UserNotFound);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to get user");
                return Err(AuthError::Internal(e.to_string()));
            }
        };

        tracing::info!(is_admin, "Checked if user is admin");

        Ok(is_admin)
    }
}
