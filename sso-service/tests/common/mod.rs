#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use auth::PasswordHasher;
use axum::Router;
use sso_service::domain::auth::errors::RepositoryError;
use sso_service::domain::auth::models::AppId;
use sso_service::domain::auth::models::Application;
use sso_service::domain::auth::models::EmailAddress;
use sso_service::domain::auth::models::PasswordHash;
use sso_service::domain::auth::models::User;
use sso_service::domain::auth::models::UserId;
use sso_service::domain::auth::ports::ApplicationRepository;
use sso_service::domain::auth::ports::UserRepository;
use sso_service::domain::auth::service::AuthService;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::inbound::http::router::create_router;
use sso_service::outbound::crypto::Argon2CredentialHasher;
use sso_service::outbound::crypto::JwtTokenIssuer;

pub const APP_ID: i32 = 1;
pub const APP_SECRET: &str = "test-secret";
pub const TOKEN_TTL_MINUTES: i64 = 60;

pub type TestAuthService = AuthService<
    InMemoryIdentityStore,
    InMemoryIdentityStore,
    Argon2CredentialHasher,
    JwtTokenIssuer,
>;

/// Identity store kept in process memory, seeded with one application.
#[derive(Default)]
pub struct InMemoryIdentityStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_user_id: i64,
    users: HashMap<i64, User>,
    applications: HashMap<i32, Application>,
}

impl InMemoryIdentityStore {
    pub fn seeded() -> Self {
        let store = Self::default();
        store.add_application(APP_ID, "test", APP_SECRET);
        store
    }

    pub fn add_application(&self, id: i32, name: &str, secret: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.applications.insert(
            id,
            Application {
                id: AppId(id),
                name: name.to_string(),
                secret: secret.to_string(),
            },
        );
    }

    pub fn promote_to_admin(&self, id: UserId) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(user) = inner.users.get_mut(&id.0) {
            user.is_admin = true;
        }
    }

    pub fn stored_hash(&self, email: &str) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner
            .users
            .values()
            .find(|user| user.email.as_str() == email)
            .map(|user| user.password_hash.as_str().to_string())
    }

    pub fn user_count(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryIdentityStore {
    async fn create(
        &self,
        email: &EmailAddress,
        password_hash: &PasswordHash,
    ) -> Result<UserId, RepositoryError> {
        let mut inner = self.inner.lock().unwrap();

        if inner.users.values().any(|user| &user.email == email) {
            return Err(RepositoryError::Conflict);
        }

        inner.next_user_id += 1;
        let id = UserId(inner.next_user_id);
        inner.users.insert(
            id.0,
            User {
                id,
                email: email.clone(),
                password_hash: password_hash.clone(),
                is_admin: false,
            },
        );

        Ok(id)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<User, RepositoryError> {
        let inner = self.inner.lock().unwrap();
        inner
            .users
            .values()
            .find(|user| &user.email == email)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_admin_flag(&self, id: UserId) -> Result<bool, RepositoryError> {
        let inner = self.inner.lock().unwrap();
        inner
            .users
            .get(&id.0)
            .map(|user| user.is_admin)
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryIdentityStore {
    async fn find_by_id(&self, id: AppId) -> Result<Application, RepositoryError> {
        let inner = self.inner.lock().unwrap();
        inner
            .applications
            .get(&id.0)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

/// Argon2id with minimal cost so tests stay quick in debug builds.
pub fn fast_password_hasher() -> PasswordHasher {
    PasswordHasher::with_params(1024, 1, 1).expect("valid argon2 params")
}

/// Fully wired service over the in-memory store.
pub struct TestApp {
    pub store: Arc<InMemoryIdentityStore>,
    pub service: Arc<TestAuthService>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryIdentityStore::seeded());
        let service = Arc::new(AuthService::new(
            Arc::clone(&store),
            Arc::clone(&store),
            Arc::new(Argon2CredentialHasher::new(fast_password_hasher())),
            Arc::new(JwtTokenIssuer::new()),
            chrono::Duration::minutes(TOKEN_TTL_MINUTES),
        ));

        Self { store, service }
    }

    pub fn grpc(&self) -> AuthGrpcService<TestAuthService> {
        AuthGrpcService::new(Arc::clone(&self.service))
    }

    pub fn router(&self) -> Router {
        create_router(Arc::clone(&self.service), Duration::from_secs(10))
    }
}
