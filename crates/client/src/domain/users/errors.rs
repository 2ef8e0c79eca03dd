//! Users errors.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum UsersError {
    #[error("usuario no encontrado")]
    NotFound,

    #[error(transparent)]
    Api(ApiError),
}

impl From<ApiError> for UsersError {
    fn from(error: ApiError) -> Self {
        if error.is_not_found() {
            return Self::NotFound;
        }

        Self::Api(error)
    }
}
