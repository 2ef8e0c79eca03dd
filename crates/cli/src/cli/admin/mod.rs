//! Operator back office.

use clap::{Args, Subcommand};
use tiendita_client::{context::AppContext, dashboard};

use crate::render;

mod categories;
mod orders;
mod products;
mod users;

#[derive(Debug, Args)]
pub(crate) struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Debug, Subcommand)]
enum AdminSubcommand {
    /// Aggregated dashboard figures
    Dashboard,

    /// Pending orders, or every order with --all
    Orders(orders::OrdersArgs),

    /// Mark a pending order delivered
    Deliver(orders::TransitionArgs),

    /// Reject a pending order
    Reject(orders::TransitionArgs),

    /// User management
    Users(users::UsersCommand),

    /// Category management
    Categories(categories::CategoriesCommand),

    /// Product management
    Products(products::ProductsCommand),
}

pub(crate) async fn run(context: &AppContext, command: AdminCommand) -> Result<(), String> {
    match command.command {
        AdminSubcommand::Dashboard => show_dashboard(context).await,
        AdminSubcommand::Orders(args) => orders::list(context, args).await,
        AdminSubcommand::Deliver(args) => orders::deliver(context, args).await,
        AdminSubcommand::Reject(args) => orders::reject(context, args).await,
        AdminSubcommand::Users(command) => users::run(context, command).await,
        AdminSubcommand::Categories(command) => categories::run(context, command).await,
        AdminSubcommand::Products(command) => products::run(context, command).await,
    }
}

async fn show_dashboard(context: &AppContext) -> Result<(), String> {
    let summary = dashboard::load_dashboard(
        context.users.as_ref(),
        context.products.as_ref(),
        context.orders.as_ref(),
        context.categories.as_ref(),
    )
    .await
    .map_err(|error| format!("no se pudo cargar el panel: {error}"))?;

    println!("{}", render::dashboard_summary(&summary));

    if !summary.operadores.is_empty() {
        println!("Operadores:");
        println!("{}", render::users_table(&summary.operadores));
    }

    Ok(())
}
