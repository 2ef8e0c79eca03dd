//! Pending-order fulfillment and the all-orders table.

use std::sync::Arc;

use clap::Args;
use tiendita::{
    orders::{OrderSortKey, SortDirection, search_orders, sort_orders},
    table,
};
use tiendita_client::{context::AppContext, domain::orders::FulfillmentWorkflow};

use crate::{prompt, render};

#[derive(Debug, Args)]
pub(crate) struct OrdersArgs {
    /// Show every order instead of the pending list
    #[arg(long)]
    all: bool,

    /// Filter by customer name or order id
    #[arg(long, default_value = "")]
    search: String,

    /// Sort column: id, cliente, or total
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    desc: bool,

    /// Zero-based page
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Rows per page
    #[arg(long, default_value_t = 10)]
    per_page: usize,
}

#[derive(Debug, Args)]
pub(crate) struct TransitionArgs {
    /// Order id
    pedido_id: i64,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

pub(crate) async fn list(context: &AppContext, args: OrdersArgs) -> Result<(), String> {
    if args.all {
        return list_all(context, args).await;
    }

    let workflow = FulfillmentWorkflow::load(Arc::clone(&context.orders))
        .await
        .map_err(|error| format!("no se pudieron cargar los pedidos: {error}"))?;

    if workflow.pending().is_empty() {
        println!("No hay órdenes pendientes.");

        return Ok(());
    }

    println!("{}", render::orders_table(workflow.pending()));

    Ok(())
}

async fn list_all(context: &AppContext, args: OrdersArgs) -> Result<(), String> {
    let orders = context
        .orders
        .all()
        .await
        .map_err(|error| format!("no se pudieron cargar los pedidos: {error}"))?;

    let mut found = search_orders(&orders, &args.search);

    if let Some(sort) = args.sort.as_deref() {
        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };

        sort_orders(&mut found, parse_sort_key(sort)?, direction);
    }

    let pages = table::page_count(found.len(), args.per_page);
    let page = table::paginate(&found, args.page, args.per_page);

    if page.is_empty() {
        println!("No hay órdenes.");

        return Ok(());
    }

    println!("{}", render::orders_table(&page));
    println!("Página {} de {pages}", args.page + 1);

    Ok(())
}

pub(crate) async fn deliver(context: &AppContext, args: TransitionArgs) -> Result<(), String> {
    transition(context, args, Action::Deliver).await
}

pub(crate) async fn reject(context: &AppContext, args: TransitionArgs) -> Result<(), String> {
    transition(context, args, Action::Reject).await
}

#[derive(Clone, Copy)]
enum Action {
    Deliver,
    Reject,
}

async fn transition(
    context: &AppContext,
    args: TransitionArgs,
    action: Action,
) -> Result<(), String> {
    let verb = match action {
        Action::Deliver => "entregar",
        Action::Reject => "rechazar",
    };

    // explicit confirmation before the state-changing request goes out
    if !args.yes {
        let question = format!(
            "¿Está seguro de que desea {verb} el pedido #{}?",
            args.pedido_id
        );

        if !prompt::confirm(&question).map_err(|error| format!("failed to read answer: {error}"))? {
            println!("Acción cancelada.");

            return Ok(());
        }
    }

    let mut workflow = FulfillmentWorkflow::load(Arc::clone(&context.orders))
        .await
        .map_err(|error| format!("no se pudieron cargar los pedidos: {error}"))?;

    let result = match action {
        Action::Deliver => workflow.deliver(args.pedido_id).await,
        Action::Reject => workflow.reject(args.pedido_id).await,
    };

    result.map_err(|error| format!("no se pudo actualizar el estado del pedido: {error}"))?;

    match action {
        Action::Deliver => println!("Pedido entregado."),
        Action::Reject => println!("Pedido rechazado."),
    }

    println!("Órdenes pendientes: {}", workflow.pending().len());

    Ok(())
}

fn parse_sort_key(value: &str) -> Result<OrderSortKey, String> {
    match value {
        "id" => Ok(OrderSortKey::PedidoId),
        "cliente" => Ok(OrderSortKey::Cliente),
        "total" => Ok(OrderSortKey::Total),
        other => Err(format!(
            "unknown sort column {other:?}; expected id, cliente, or total"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_keys_parse_by_name() {
        assert!(matches!(parse_sort_key("id"), Ok(OrderSortKey::PedidoId)));
        assert!(matches!(parse_sort_key("cliente"), Ok(OrderSortKey::Cliente)));
        assert!(matches!(parse_sort_key("total"), Ok(OrderSortKey::Total)));
        assert!(parse_sort_key("fecha").is_err());
    }
}
