//! Orders errors.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum OrdersError {
    #[error("pedido no encontrado")]
    NotFound,

    #[error(transparent)]
    Api(ApiError),
}

impl From<ApiError> for OrdersError {
    fn from(error: ApiError) -> Self {
        if error.is_not_found() {
            return Self::NotFound;
        }

        Self::Api(error)
    }
}

/// Errors raised by the fulfillment workflow.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The order is not in the pending list this workflow holds.
    #[error("el pedido #{0} no está pendiente")]
    NotPending(i64),

    /// The transition request failed; the pending list was left untouched.
    #[error(transparent)]
    Orders(#[from] OrdersError),
}
