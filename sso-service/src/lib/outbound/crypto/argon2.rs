use async_trait::async_trait;
use auth::PasswordError;
use auth::PasswordHasher;
use tokio::task::JoinError;

use crate::domain::auth::errors::HashError;
use crate::domain::auth::models::PasswordHash;
use crate::domain::auth::ports::CredentialHasher;

/// Credential hasher backed by `auth::PasswordHasher` (Argon2id).
///
/// Hashing and verification run on the blocking pool so concurrent requests
/// keep making progress.
#[derive(Clone, Default)]
pub struct Argon2CredentialHasher {
    hasher: PasswordHasher,
}

impl Argon2CredentialHasher {
    pub fn new(hasher: PasswordHasher) -> Self {
        Self { hasher }
    }
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    async fn hash(&self, password: &str) -> Result<PasswordHash, HashError> {
        let hasher = self.hasher.clone();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| HashError(e.to_string()))?
            .map(PasswordHash::new)
            .map_err(|e| HashError(e.to_string()))
    }

    async fn verify(&self, hash: &PasswordHash, password: &str) -> bool {
        let hasher = self.hasher.clone();
        let hash = hash.as_str().to_owned();
        let password = password.to_owned();

        verification_outcome(
            tokio::task::spawn_blocking(move || hasher.verify(&password, &hash)).await,
        )
    }
}

/// Collapses a verification result into the port's `bool`.
///
/// Only `Ok(Ok(true))` is a match. Every fault is logged at error level with
/// `internal = true` so it is not mistaken for a credential mismatch.
fn verification_outcome(result: Result<Result<bool, PasswordError>, JoinError>) -> bool {
    match result {
        Ok(Ok(matches)) => matches,
        Ok(Err(PasswordError::MalformedHash(reason))) => {
            tracing::warn!(reason = %reason, "Stored password hash is malformed");
            false
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, internal = true, "Password verification failed");
            false
        }
        // Panic or runtime shutdown in the blocking pool, not a wrong password
        Err(e) => {
            tracing::error!(
                error = %e,
                internal = true,
                "Password verification task failed, reporting no match"
            );
            false
        }
    }
}
