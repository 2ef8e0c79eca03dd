//! Shopping cart views.

use clap::{Args, Subcommand};
use tiendita_client::context::AppContext;

use crate::render;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Add one unit of a product to the cart
    Add(AddArgs),

    /// Remove the line at the given index
    Remove(LineArgs),

    /// Change a line quantity by a delta (never below 1)
    Qty(QtyArgs),

    /// Show the cart contents and total
    Show,

    /// Confirm the purchase and place the order
    Confirm(ConfirmArgs),

    /// Cancel the purchase, emptying the cart
    Cancel,
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Product id
    product_id: i64,
}

#[derive(Debug, Args)]
struct LineArgs {
    /// Cart line index, as shown by `cart show`
    index: usize,
}

#[derive(Debug, Args)]
struct QtyArgs {
    /// Cart line index, as shown by `cart show`
    index: usize,

    /// Quantity delta, e.g. `1` or `-1`
    #[arg(allow_hyphen_values = true)]
    delta: i32,
}

#[derive(Debug, Args)]
struct ConfirmArgs {
    /// Account id the order is placed for
    #[arg(long, default_value_t = 1)]
    user_id: i64,
}

pub(crate) async fn run(context: &AppContext, command: CartCommand) -> Result<(), String> {
    match command.command {
        CartSubcommand::Add(args) => add(context, args).await,
        CartSubcommand::Remove(args) => remove(context, args),
        CartSubcommand::Qty(args) => change_quantity(context, args),
        CartSubcommand::Show => show(context),
        CartSubcommand::Confirm(args) => confirm(context, args).await,
        CartSubcommand::Cancel => cancel(context),
    }
}

async fn add(context: &AppContext, args: AddArgs) -> Result<(), String> {
    let product = context
        .products
        .get(args.product_id)
        .await
        .map_err(|error| format!("no se pudo cargar el producto: {error}"))?;

    if !product.estado.is_active() {
        return Err(format!("{} no está disponible", product.nombre));
    }

    context
        .cart
        .add(&product)
        .map_err(|error| format!("no se pudo agregar al carrito: {error}"))?;

    println!("{} agregado al carrito", product.nombre);

    Ok(())
}

fn remove(context: &AppContext, args: LineArgs) -> Result<(), String> {
    let removed = context
        .cart
        .remove(args.index)
        .map_err(|error| format!("no se pudo eliminar la línea: {error}"))?;

    println!("Producto eliminado del carrito: {}", removed.name);

    Ok(())
}

fn change_quantity(context: &AppContext, args: QtyArgs) -> Result<(), String> {
    let quantity = context
        .cart
        .change_quantity(args.index, args.delta)
        .map_err(|error| format!("no se pudo actualizar la cantidad: {error}"))?;

    println!("Cantidad actualizada: {quantity}");

    Ok(())
}

fn show(context: &AppContext) -> Result<(), String> {
    let snapshot = context.cart.snapshot();

    if snapshot.is_empty() {
        println!("No hay productos en el carrito.");

        return Ok(());
    }

    println!("{}", render::cart_table(&snapshot.lines, snapshot.total));

    Ok(())
}

async fn confirm(context: &AppContext, args: ConfirmArgs) -> Result<(), String> {
    let total = context
        .cart
        .confirm_purchase(context.orders.as_ref(), args.user_id)
        .await
        .map_err(|error| format!("no se pudo confirmar la compra: {error}"))?;

    println!("Compra confirmada. Total: {}", render::format_price(total));

    Ok(())
}

fn cancel(context: &AppContext) -> Result<(), String> {
    context
        .cart
        .clear()
        .map_err(|error| format!("no se pudo cancelar la compra: {error}"))?;

    println!("Compra cancelada.");

    Ok(())
}
