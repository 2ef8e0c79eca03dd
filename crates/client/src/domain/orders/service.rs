//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use serde::Serialize;
use tiendita::orders::{ConfirmOrderRequest, Order, OrderStatus};

use crate::{api::ApiClient, domain::orders::errors::OrdersError};

#[derive(Debug, Serialize)]
struct StatusChange {
    estado_id: i64,
}

#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    api: Arc<ApiClient>,
}

impl HttpOrdersService {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    async fn pending(&self) -> Result<Vec<Order>, OrdersError> {
        Ok(self.api.get("/pedidos/pendientes").await?)
    }

    async fn all(&self) -> Result<Vec<Order>, OrdersError> {
        Ok(self.api.get("/pedidos/pedidos").await?)
    }

    async fn history(&self) -> Result<Vec<Order>, OrdersError> {
        Ok(self.api.get("/pedidos/historial").await?)
    }

    async fn confirm(&self, order: ConfirmOrderRequest) -> Result<(), OrdersError> {
        self.api.post_unit("/pedidos/confirmar", &order).await?;

        Ok(())
    }

    async fn set_status(&self, pedido_id: i64, estado: OrderStatus) -> Result<(), OrdersError> {
        self.api
            .put_unit(
                &format!("/pedidos/{pedido_id}/estado"),
                &StatusChange {
                    estado_id: estado.wire_id(),
                },
            )
            .await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Orders awaiting operator action.
    async fn pending(&self) -> Result<Vec<Order>, OrdersError>;

    /// Every order, for the back-office table.
    async fn all(&self) -> Result<Vec<Order>, OrdersError>;

    /// The signed-in client's order history.
    async fn history(&self) -> Result<Vec<Order>, OrdersError>;

    /// Submit a purchase confirmation.
    async fn confirm(&self, order: ConfirmOrderRequest) -> Result<(), OrdersError>;

    /// Apply a status transition to one order.
    async fn set_status(&self, pedido_id: i64, estado: OrderStatus) -> Result<(), OrdersError>;
}
