//! Operator dashboard aggregation.

use thiserror::Error;
use tiendita::{
    orders::{Order, OrderStatus},
    users::{self, User},
};

use crate::domain::{
    categories::{CategoriesError, CategoriesService},
    orders::{OrdersError, OrdersService},
    products::{ProductsError, ProductsService},
    users::{UsersError, UsersService},
};

/// The customer with the most pending orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopCustomer {
    pub nombre: String,
    pub pedidos: usize,
}

/// Aggregated figures for the operator home view.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_usuarios: usize,
    pub total_productos: usize,
    pub total_ordenes: usize,
    pub ordenes_pendientes: usize,
    pub total_categorias: usize,
    pub usuario_con_mas_pedidos: Option<TopCustomer>,
    pub operadores: Vec<User>,
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Users(#[from] UsersError),

    #[error(transparent)]
    Products(#[from] ProductsError),

    #[error(transparent)]
    Orders(#[from] OrdersError),

    #[error(transparent)]
    Categories(#[from] CategoriesError),
}

/// Issue the five list fetches concurrently and aggregate once all complete.
/// Any single failure yields the dashboard error state; there is no retry.
///
/// # Errors
///
/// Returns the first fetch failure.
pub async fn load_dashboard(
    users: &dyn UsersService,
    products: &dyn ProductsService,
    orders: &dyn OrdersService,
    categories: &dyn CategoriesService,
) -> Result<DashboardSummary, DashboardError> {
    let (usuarios, productos, pendientes, todas, categorias) = tokio::try_join!(
        async { users.list().await.map_err(DashboardError::from) },
        async { products.list().await.map_err(DashboardError::from) },
        async { orders.pending().await.map_err(DashboardError::from) },
        async { orders.all().await.map_err(DashboardError::from) },
        async { categories.list().await.map_err(DashboardError::from) },
    )?;

    let ordenes_pendientes = pendientes
        .iter()
        .filter(|order| order.estado == Some(OrderStatus::Pendiente))
        .count();

    Ok(DashboardSummary {
        total_usuarios: usuarios.len(),
        total_productos: productos.len(),
        total_ordenes: todas.len(),
        ordenes_pendientes,
        total_categorias: categorias.len(),
        usuario_con_mas_pedidos: top_customer(&pendientes),
        operadores: users::operators(&usuarios),
    })
}

/// First-seen customer with the strictly highest pending-order count.
fn top_customer(orders: &[Order]) -> Option<TopCustomer> {
    let mut counts: Vec<TopCustomer> = Vec::new();

    for order in orders {
        if let Some(entry) = counts
            .iter_mut()
            .find(|entry| entry.nombre == order.cliente)
        {
            entry.pedidos += 1;
        } else {
            counts.push(TopCustomer {
                nombre: order.cliente.clone(),
                pedidos: 1,
            });
        }
    }

    counts
        .into_iter()
        .fold(None, |best: Option<TopCustomer>, entry| match best {
            Some(best) if best.pedidos >= entry.pedidos => Some(best),
            _ => Some(entry),
        })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;
    use tiendita::products::{Product, ProductStatus};

    use crate::{
        api::ApiError,
        domain::{
            categories::MockCategoriesService, orders::MockOrdersService,
            products::MockProductsService, users::MockUsersService,
        },
    };

    use super::*;

    fn pending_order(pedido_id: i64, cliente: &str) -> Order {
        Order {
            pedido_id,
            cliente: cliente.to_string(),
            productos: None,
            total: Decimal::from(10),
            estado: Some(OrderStatus::Pendiente),
            fecha: None,
        }
    }

    fn user(id: i64, nombre: &str, rol: &str) -> User {
        User {
            id,
            nombre: nombre.to_string(),
            correo: format!("{nombre}@tienda.gt").to_lowercase(),
            telefono: None,
            rol: Some(rol.to_string()),
            estado: Some("Activo".to_string()),
        }
    }

    fn product(id: i64) -> Product {
        Product {
            id,
            nombre: format!("Producto {id}"),
            descripcion: None,
            precio: Decimal::from(10),
            stock: None,
            categoria: None,
            imagen: None,
            estado: ProductStatus::Activo,
        }
    }

    #[tokio::test]
    async fn aggregates_all_five_fetches() -> TestResult {
        let mut users = MockUsersService::new();
        let mut products = MockProductsService::new();
        let mut orders = MockOrdersService::new();
        let mut categories = MockCategoriesService::new();

        users
            .expect_list()
            .return_once(|| Ok(vec![user(1, "Ana", "Cliente"), user(2, "Luis", "Operador")]));
        products
            .expect_list()
            .return_once(|| Ok(vec![product(1), product(2), product(3)]));
        orders.expect_pending().return_once(|| {
            Ok(vec![
                pending_order(1, "Ana"),
                pending_order(2, "Ana"),
                pending_order(3, "Eva"),
            ])
        });
        orders.expect_all().return_once(|| {
            Ok(vec![
                pending_order(1, "Ana"),
                pending_order(2, "Ana"),
                pending_order(3, "Eva"),
                pending_order(4, "Luis"),
            ])
        });
        categories.expect_list().return_once(|| Ok(Vec::new()));

        let summary = load_dashboard(&users, &products, &orders, &categories).await?;

        assert_eq!(summary.total_usuarios, 2);
        assert_eq!(summary.total_productos, 3);
        assert_eq!(summary.total_ordenes, 4);
        assert_eq!(summary.ordenes_pendientes, 3);
        assert_eq!(summary.total_categorias, 0);
        assert_eq!(
            summary.usuario_con_mas_pedidos,
            Some(TopCustomer {
                nombre: "Ana".to_string(),
                pedidos: 2
            })
        );
        assert_eq!(summary.operadores.len(), 1);
        assert_eq!(summary.operadores[0].nombre, "Luis");

        Ok(())
    }

    #[tokio::test]
    async fn any_failing_fetch_fails_the_dashboard() {
        let mut users = MockUsersService::new();
        let mut products = MockProductsService::new();
        let mut orders = MockOrdersService::new();
        let mut categories = MockCategoriesService::new();

        users.expect_list().return_once(|| Ok(Vec::new()));
        products.expect_list().return_once(|| {
            Err(ProductsError::Api(ApiError::Status {
                status: 500,
                message: "boom".to_string(),
            }))
        });
        orders.expect_pending().return_once(|| Ok(Vec::new()));
        orders.expect_all().return_once(|| Ok(Vec::new()));
        categories.expect_list().return_once(|| Ok(Vec::new()));

        let result = load_dashboard(&users, &products, &orders, &categories).await;

        assert!(
            matches!(result, Err(DashboardError::Products(_))),
            "expected Products error, got {result:?}"
        );
    }

    #[test]
    fn top_customer_prefers_the_first_on_ties() {
        let orders = vec![
            pending_order(1, "Ana"),
            pending_order(2, "Eva"),
            pending_order(3, "Ana"),
            pending_order(4, "Eva"),
        ];

        let top = top_customer(&orders);

        assert_eq!(
            top,
            Some(TopCustomer {
                nombre: "Ana".to_string(),
                pedidos: 2
            })
        );
    }

    #[test]
    fn top_customer_is_none_without_orders() {
        assert_eq!(top_customer(&[]), None);
    }
}
