//! Auth errors.

use thiserror::Error;
use tiendita::users::RoleError;

use crate::{api::ApiError, storage::StorageError};

#[derive(Debug, Error)]
pub enum AuthError {
    /// The API rejected the credentials.
    #[error("credenciales inválidas")]
    InvalidCredentials,

    /// The login response carried a role id this client does not know.
    #[error(transparent)]
    Role(#[from] RoleError),

    #[error(transparent)]
    Api(ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ApiError> for AuthError {
    fn from(error: ApiError) -> Self {
        if error.is_unauthorized() {
            return Self::InvalidCredentials;
        }

        Self::Api(error)
    }
}
