use std::sync::Arc;

use tonic::Status;

use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::proto::IsAdminRequest;
use crate::proto::IsAdminResponse;

pub async fn is_admin<S: AuthServicePort>(
    service: Arc<S>,
    request: IsAdminRequest,
) -> Result<IsAdminResponse, Status> {
    let user_id = UserId(request.user_id);
    if user_id.is_empty() {
        return Err(Status::invalid_argument("user_id is required"));
    }

    let is_admin = service.is_admin(user_id).await?;

    Ok(IsAdminResponse { is_admin })
}
