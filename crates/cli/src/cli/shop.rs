//! Storefront views: product browsing, featured rotation, order history.

use clap::{Args, Subcommand};
use tiendita::{catalog, products::Product};
use tiendita_client::{context::AppContext, task::ScopedTask};

use crate::render;

#[derive(Debug, Args)]
pub(crate) struct ShopCommand {
    #[command(subcommand)]
    command: ShopSubcommand,
}

#[derive(Debug, Subcommand)]
enum ShopSubcommand {
    /// List active products, optionally filtered
    Products(ProductsArgs),

    /// Show one product in detail
    Show(ShowArgs),

    /// Show the rotating featured product
    Featured(FeaturedArgs),

    /// Show your order history
    History,
}

#[derive(Debug, Args)]
struct ProductsArgs {
    /// Case-insensitive name filter
    #[arg(long, default_value = "")]
    search: String,

    /// Exact category filter
    #[arg(long, default_value = "")]
    category: String,
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Product id
    id: i64,
}

#[derive(Debug, Args)]
struct FeaturedArgs {
    /// Keep rotating until interrupted
    #[arg(long)]
    watch: bool,
}

pub(crate) async fn run(context: &AppContext, command: ShopCommand) -> Result<(), String> {
    match command.command {
        ShopSubcommand::Products(args) => products(context, args).await,
        ShopSubcommand::Show(args) => show(context, args).await,
        ShopSubcommand::Featured(args) => featured(context, args).await,
        ShopSubcommand::History => history(context).await,
    }
}

async fn products(context: &AppContext, args: ProductsArgs) -> Result<(), String> {
    let products = context
        .products
        .list_active()
        .await
        .map_err(|error| format!("no se pudieron cargar los productos: {error}"))?;

    let filtered = catalog::filter_products(&products, &args.search, &args.category);

    if filtered.is_empty() {
        println!("No hay productos disponibles.");

        return Ok(());
    }

    println!("{}", render::products_table(&filtered));

    Ok(())
}

async fn show(context: &AppContext, args: ShowArgs) -> Result<(), String> {
    let product = context
        .products
        .get(args.id)
        .await
        .map_err(|error| format!("no se pudo cargar el producto: {error}"))?;

    println!("{} ({})", product.nombre, render::format_price(product.precio));

    if let Some(descripcion) = &product.descripcion {
        println!("{descripcion}");
    }

    if let Some(categoria) = &product.categoria {
        println!("Categoría: {categoria}");
    }

    if let Some(stock) = product.stock {
        println!("Stock: {stock}");
    }

    Ok(())
}

async fn featured(context: &AppContext, args: FeaturedArgs) -> Result<(), String> {
    let products = context
        .products
        .list_active()
        .await
        .map_err(|error| format!("no se pudieron cargar los productos: {error}"))?;

    if products.is_empty() {
        println!("No hay productos disponibles.");

        return Ok(());
    }

    if !args.watch {
        print_featured(&products);

        return Ok(());
    }

    let ticker = ScopedTask::spawn(rotate(products));

    tokio::signal::ctrl_c()
        .await
        .map_err(|error| format!("failed to wait for interrupt: {error}"))?;

    // tearing down the view aborts the rotation tick
    drop(ticker);

    Ok(())
}

/// Cosmetic background tick; reseeds its RNG on every rotation.
async fn rotate(products: Vec<Product>) {
    let mut interval = tokio::time::interval(catalog::FEATURED_ROTATION_INTERVAL);

    loop {
        interval.tick().await;

        print_featured(&products);
    }
}

fn print_featured(products: &[Product]) {
    if let Some(product) = catalog::pick_featured(products, &mut rand::thread_rng()) {
        println!(
            "★ {} ({})",
            product.nombre,
            render::format_price(product.precio)
        );

        if let Some(descripcion) = &product.descripcion {
            println!("  {descripcion}");
        }
    }
}

async fn history(context: &AppContext) -> Result<(), String> {
    let orders = context
        .orders
        .history()
        .await
        .map_err(|error| format!("no se pudo cargar el historial: {error}"))?;

    if orders.is_empty() {
        println!("Aún no tienes pedidos.");

        return Ok(());
    }

    println!("{}", render::orders_table(&orders));

    Ok(())
}
