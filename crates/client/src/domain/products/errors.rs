//! Products errors.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum ProductsError {
    #[error("producto no encontrado")]
    NotFound,

    #[error(transparent)]
    Api(ApiError),
}

impl From<ApiError> for ProductsError {
    fn from(error: ApiError) -> Self {
        if error.is_not_found() {
            return Self::NotFound;
        }

        Self::Api(error)
    }
}
