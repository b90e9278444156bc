use std::sync::Arc;

use tonic::Status;

use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::RegisterUserCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register<S: AuthServicePort>(
    service: Arc<S>,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    if request.email.is_empty() {
        return Err(Status::invalid_argument("email is required"));
    }

    if request.password.is_empty() {
        return Err(Status::invalid_argument("password is required"));
    }

    let email = EmailAddress::new(request.email)
        .map_err(|e| Status::invalid_argument(format!("Invalid email: {}", e)))?;

    let user_id = service
        .register_new_user(RegisterUserCommand::new(email, request.password))
        .await?;

    Ok(RegisterResponse { user_id: user_id.0 })
}
