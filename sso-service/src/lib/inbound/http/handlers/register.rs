use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn register<S: AuthServicePort>(
    State(state): State<AppState<S>>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    if body.email.is_empty() {
        return Err(ApiError::BadRequest("email is required".to_string()));
    }
    if body.password.is_empty() {
        return Err(ApiError::BadRequest("password is required".to_string()));
    }

    let email = EmailAddress::new(body.email)
        .map_err(|e| ApiError::BadRequest(format!("Invalid email: {}", e)))?;

    let user_id = state
        .auth_service
        .register_new_user(RegisterUserCommand::new(email, body.password))
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        RegisterResponseData { user_id: user_id.0 },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub user_id: i64,
}
