//! Operator order-fulfillment workflow.

use std::sync::Arc;

use tiendita::orders::{Order, OrderStatus};

use crate::domain::orders::{
    errors::{OrdersError, WorkflowError},
    service::OrdersService,
};

/// Pending-order list plus the two terminal transitions an operator can
/// apply. A transition is sent only after the caller's explicit confirmation
/// step; on success the order leaves the pending list for good and its
/// authoritative state lives server-side. A failed transition leaves the
/// list untouched, and there is no automatic retry.
pub struct FulfillmentWorkflow {
    orders: Arc<dyn OrdersService>,
    pending: Vec<Order>,
}

impl FulfillmentWorkflow {
    /// Fetch the pending list.
    ///
    /// # Errors
    ///
    /// Returns an error when the list fetch fails.
    pub async fn load(orders: Arc<dyn OrdersService>) -> Result<Self, OrdersError> {
        let pending = orders.pending().await?;

        Ok(Self { orders, pending })
    }

    #[must_use]
    pub fn pending(&self) -> &[Order] {
        &self.pending
    }

    /// Mark the order delivered.
    ///
    /// # Errors
    ///
    /// See [`FulfillmentWorkflow::transition`].
    pub async fn deliver(&mut self, pedido_id: i64) -> Result<(), WorkflowError> {
        self.transition(pedido_id, OrderStatus::Entregado).await
    }

    /// Reject the order.
    ///
    /// # Errors
    ///
    /// See [`FulfillmentWorkflow::transition`].
    pub async fn reject(&mut self, pedido_id: i64) -> Result<(), WorkflowError> {
        self.transition(pedido_id, OrderStatus::Rechazado).await
    }

    /// Apply `estado` to one pending order and drop exactly that order from
    /// the list on success.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::NotPending`] for an unknown id, or the
    /// transition failure with the pending list unchanged.
    pub async fn transition(
        &mut self,
        pedido_id: i64,
        estado: OrderStatus,
    ) -> Result<(), WorkflowError> {
        if !self.pending.iter().any(|order| order.pedido_id == pedido_id) {
            return Err(WorkflowError::NotPending(pedido_id));
        }

        self.orders.set_status(pedido_id, estado).await?;

        self.pending.retain(|order| order.pedido_id != pedido_id);

        Ok(())
    }
}
