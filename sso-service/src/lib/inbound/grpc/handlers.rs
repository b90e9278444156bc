use tonic::Status;

use crate::domain::auth::errors::AuthError;

pub mod is_admin;
pub mod login;
pub mod register;

/// Collapse domain errors into generic gRPC statuses.
///
/// Messages are fixed per kind; internal detail never reaches the caller.
impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Status::invalid_argument("invalid email or password"),
            AuthError::InvalidApplication => Status::invalid_argument("invalid app id"),
            AuthError::UserAlreadyExists => Status::already_exists("user already exists"),
            AuthError::UserNotFound => Status::not_found("user not found"),
            AuthError::InvalidInput(message) => Status::invalid_argument(message),
            AuthError::Internal(_) => Status::internal("internal error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;

    #[test]
    fn test_internal_detail_not_disclosed() {
        let status = Status::from(AuthError::Internal(
            "duplicate key value violates unique constraint".to_string(),
        ));

        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), "internal error");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Status::from(AuthError::InvalidCredentials).code(),
            Code::InvalidArgument
        );
        assert_eq!(
            Status::from(AuthError::InvalidApplication).code(),
            Code::InvalidArgument
        );
        assert_eq!(
            Status::from(AuthError::UserAlreadyExists).code(),
            Code::AlreadyExists
        );
        assert_eq!(Status::from(AuthError::UserNotFound).code(), Code::NotFound);
    }
}
