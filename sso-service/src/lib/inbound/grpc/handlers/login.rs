use std::sync::Arc;

use tonic::Status;

use crate::domain::auth::models::AppId;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login<S: AuthServicePort>(
    service: Arc<S>,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    if request.email.is_empty() {
        return Err(Status::invalid_argument("email is required"));
    }

    if request.password.is_empty() {
        return Err(Status::invalid_argument("password is required"));
    }

    let app_id = AppId(request.app_id);
    if app_id.is_empty() {
        return Err(Status::invalid_argument("app_id is required"));
    }

    // A malformed email can never match a user; answer as for any bad credential
    let email = EmailAddress::new(request.email)
        .map_err(|_| Status::invalid_argument("invalid email or password"))?;

    let token = service
        .login(LoginCommand::new(email, request.password, app_id))
        .await?;

    Ok(LoginResponse { token })
}
