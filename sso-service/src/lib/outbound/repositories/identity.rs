use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::auth::errors::RepositoryError;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::Application;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::PasswordHash;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::ApplicationRepository;
use crate::domain::auth::ports::UserRepository;

/// Postgres-backed identity store serving both users and applications.
#[derive(Clone)]
pub struct PostgresIdentityStore {
    pool: PgPool,
}

impl PostgresIdentityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: PgRow) -> Result<User, RepositoryError> {
        let email: String = row.try_get("email").map_err(internal)?;

        Ok(User {
            id: UserId(row.try_get("id").map_err(internal)?),
            email: EmailAddress::new(email)
                .map_err(|e| RepositoryError::Internal(e.to_string()))?,
            password_hash: PasswordHash::new(
                row.try_get::<String, _>("pass_hash").map_err(internal)?,
            ),
            is_admin: row.try_get("is_admin").map_err(internal)?,
        })
    }
}

fn internal(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Internal(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresIdentityStore {
    async fn create(
        &self,
        email: &EmailAddress,
        password_hash: &PasswordHash,
    ) -> Result<UserId, RepositoryError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (email, pass_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key")
                {
                    return RepositoryError::Conflict;
                }
            }
            internal(e)
        })?;

        Ok(UserId(row.try_get("id").map_err(internal)?))
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<User, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, pass_hash, is_admin
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(internal)?;

        match row {
            Some(r) => Self::row_to_user(r),
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn find_admin_flag(&self, id: UserId) -> Result<bool, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT is_admin
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(internal)?;

        match row {
            Some(r) => r.try_get("is_admin").map_err(internal),
            None => Err(RepositoryError::NotFound),
        }
    }
}

#[async_trait]
impl ApplicationRepository for PostgresIdentityStore {
    async fn find_by_id(&self, id: AppId) -> Result<Application, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, secret
            FROM apps
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(internal)?;

        match row {
            Some(r) => Ok(Application {
                id: AppId(r.try_get("id").map_err(internal)?),
                name: r.try_get("name").map_err(internal)?,
                secret: r.try_get("secret").map_err(internal)?,
            }),
            None => Err(RepositoryError::NotFound),
        }
    }
}
