//! Categories errors.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum CategoriesError {
    #[error("categoría no encontrada")]
    NotFound,

    #[error(transparent)]
    Api(ApiError),
}

impl From<ApiError> for CategoriesError {
    fn from(error: ApiError) -> Self {
        if error.is_not_found() {
            return Self::NotFound;
        }

        Self::Api(error)
    }
}
