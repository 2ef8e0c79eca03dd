//! Order read models, statuses, and all-orders table helpers.

use std::fmt;

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order lifecycle status as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pendiente,
    Confirmado,

    #[serde(rename = "En Envío")]
    EnEnvio,

    Entregado,
    Rechazado,
    Cancelado,
}

impl OrderStatus {
    /// Numeric `estado_id` accepted by the status-transition endpoint.
    #[must_use]
    pub const fn wire_id(self) -> i64 {
        match self {
            Self::Pendiente => 1,
            Self::Confirmado => 2,
            Self::EnEnvio => 3,
            Self::Entregado => 4,
            Self::Rechazado => 5,
            Self::Cancelado => 6,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::Confirmado => "Confirmado",
            Self::EnEnvio => "En Envío",
            Self::Entregado => "Entregado",
            Self::Rechazado => "Rechazado",
            Self::Cancelado => "Cancelado",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order read model served by the `/pedidos` resource group.
///
/// The pending and history endpoints use snake_case keys while the
/// all-orders endpoint uses PascalCase ones; the aliases absorb both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(alias = "PedidoID")]
    pub pedido_id: i64,

    #[serde(alias = "ClienteNombre")]
    pub cliente: String,

    /// Product summary line, e.g. `"Café x2, Pan x1"`.
    #[serde(default)]
    pub productos: Option<String>,

    pub total: Decimal,

    #[serde(default)]
    pub estado: Option<OrderStatus>,

    #[serde(default)]
    pub fecha: Option<Timestamp>,
}

/// Line item submitted on purchase confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub producto_id: i64,
    pub cantidad: u32,
    pub subtotal: Decimal,
}

/// Body of `POST /pedidos/confirmar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmOrderRequest {
    pub usuario_id: i64,
    pub total: Decimal,
    pub detalles: Vec<OrderDetail>,
}

/// Column of the all-orders table to sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSortKey {
    PedidoId,
    Cliente,
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Orders whose customer name contains `term` case-insensitively, or whose
/// id contains it as digits. An empty term matches everything.
#[must_use]
pub fn search_orders(orders: &[Order], term: &str) -> Vec<Order> {
    if term.is_empty() {
        return orders.to_vec();
    }

    let needle = term.to_lowercase();

    orders
        .iter()
        .filter(|order| {
            order.cliente.to_lowercase().contains(&needle)
                || order.pedido_id.to_string().contains(term)
        })
        .cloned()
        .collect()
}

/// Sort orders in place by the given column and direction.
pub fn sort_orders(orders: &mut [Order], key: OrderSortKey, direction: SortDirection) {
    orders.sort_by(|a, b| {
        let ordering = match key {
            OrderSortKey::PedidoId => a.pedido_id.cmp(&b.pedido_id),
            OrderSortKey::Cliente => a.cliente.cmp(&b.cliente),
            OrderSortKey::Total => a.total.cmp(&b.total),
        };

        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn order(pedido_id: i64, cliente: &str, total: i64) -> Order {
        Order {
            pedido_id,
            cliente: cliente.to_string(),
            productos: None,
            total: Decimal::from(total),
            estado: Some(OrderStatus::Pendiente),
            fecha: None,
        }
    }

    #[test]
    fn wire_ids_match_the_transition_endpoint() {
        assert_eq!(OrderStatus::Entregado.wire_id(), 4);
        assert_eq!(OrderStatus::Rechazado.wire_id(), 5);
        assert_eq!(OrderStatus::Pendiente.wire_id(), 1);
    }

    #[test]
    fn status_decodes_accented_variant() -> TestResult {
        let status: OrderStatus = serde_json::from_str(r#""En Envío""#)?;

        assert_eq!(status, OrderStatus::EnEnvio);

        Ok(())
    }

    #[test]
    fn order_decodes_pending_wire_shape() -> TestResult {
        let json = r#"{
            "pedido_id": 12,
            "cliente": "Ana",
            "productos": "Café x2",
            "total": 91.0,
            "estado": "Pendiente"
        }"#;

        let order: Order = serde_json::from_str(json)?;

        assert_eq!(order.pedido_id, 12);
        assert_eq!(order.estado, Some(OrderStatus::Pendiente));

        Ok(())
    }

    #[test]
    fn order_decodes_pascal_case_wire_shape() -> TestResult {
        let json = r#"{"PedidoID": 3, "ClienteNombre": "Luis", "total": 10}"#;

        let order: Order = serde_json::from_str(json)?;

        assert_eq!(order.pedido_id, 3);
        assert_eq!(order.cliente, "Luis");
        assert_eq!(order.estado, None);

        Ok(())
    }

    #[test]
    fn confirm_request_serialises_expected_keys() -> TestResult {
        let request = ConfirmOrderRequest {
            usuario_id: 1,
            total: Decimal::from(25),
            detalles: vec![OrderDetail {
                producto_id: 4,
                cantidad: 2,
                subtotal: Decimal::from(20),
            }],
        };

        let value = serde_json::to_value(&request)?;

        assert_eq!(value["usuario_id"], 1);
        assert_eq!(value["detalles"][0]["producto_id"], 4);

        Ok(())
    }

    #[test]
    fn search_matches_customer_name_case_insensitively() {
        let orders = vec![order(1, "Ana", 10), order(2, "Luis", 20)];

        let found = search_orders(&orders, "ana");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pedido_id, 1);
    }

    #[test]
    fn search_matches_order_id_digits() {
        let orders = vec![order(17, "Ana", 10), order(2, "Luis", 20)];

        let found = search_orders(&orders, "17");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].cliente, "Ana");
    }

    #[test]
    fn empty_search_returns_all_orders() {
        let orders = vec![order(1, "Ana", 10), order(2, "Luis", 20)];

        assert_eq!(search_orders(&orders, "").len(), 2);
    }

    #[test]
    fn sorting_by_total_descending() {
        let mut orders = vec![order(1, "Ana", 10), order(2, "Luis", 30), order(3, "Eva", 20)];

        sort_orders(&mut orders, OrderSortKey::Total, SortDirection::Descending);

        let ids: Vec<i64> = orders.iter().map(|o| o.pedido_id).collect();

        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn sorting_by_customer_ascending() {
        let mut orders = vec![order(1, "Luis", 10), order(2, "Ana", 30)];

        sort_orders(&mut orders, OrderSortKey::Cliente, SortDirection::Ascending);

        assert_eq!(orders[0].cliente, "Ana");
    }
}
