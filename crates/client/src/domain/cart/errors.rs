//! Cart store errors.

use thiserror::Error;
use tiendita::cart::CartError;

use crate::{domain::orders::OrdersError, storage::StorageError};

#[derive(Debug, Error)]
pub enum CartStoreError {
    /// Purchase confirmation was attempted on an empty cart.
    #[error("el carrito está vacío")]
    Empty,

    #[error(transparent)]
    Line(#[from] CartError),

    /// The order-confirmation request failed; the cart was left untouched.
    #[error(transparent)]
    Orders(#[from] OrdersError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to encode cart state")]
    Encode(#[source] serde_json::Error),
}
