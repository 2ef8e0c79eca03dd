//! Back-office product management.

use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use tiendita::{
    catalog,
    products::{NewProduct, ProductUpdate},
    validate::{self, ProductForm},
};
use tiendita_client::context::AppContext;

use crate::{cli::auth::field_errors, prompt, render};

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List every product, active or not
    List(ListArgs),

    /// Create a product
    Create(PayloadArgs),

    /// Update a product
    Update(UpdateArgs),

    /// Delete a product
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Case-insensitive name filter
    #[arg(long, default_value = "")]
    search: String,
}

#[derive(Debug, Args)]
struct PayloadArgs {
    /// Product name
    #[arg(long)]
    nombre: String,

    /// Product description
    #[arg(long)]
    descripcion: Option<String>,

    /// Unit price
    #[arg(long)]
    precio: Decimal,

    /// Units in stock
    #[arg(long)]
    stock: i64,

    /// Category id
    #[arg(long)]
    categoria_id: i64,

    /// Status id from the status catalog
    #[arg(long)]
    estado_id: i64,

    /// Image reference
    #[arg(long)]
    imagen: Option<String>,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// Product id
    id: i64,

    #[command(flatten)]
    payload: PayloadArgs,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// Product id
    id: i64,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

pub(crate) async fn run(context: &AppContext, command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List(args) => list(context, args).await,
        ProductsSubcommand::Create(args) => create(context, args).await,
        ProductsSubcommand::Update(args) => update(context, args).await,
        ProductsSubcommand::Delete(args) => delete(context, args).await,
    }
}

async fn list(context: &AppContext, args: ListArgs) -> Result<(), String> {
    let products = context
        .products
        .list()
        .await
        .map_err(|error| format!("no se pudieron cargar los productos: {error}"))?;

    let filtered = catalog::filter_products(&products, &args.search, "");

    if filtered.is_empty() {
        println!("No hay productos.");

        return Ok(());
    }

    println!("{}", render::products_table(&filtered));

    Ok(())
}

fn validate_payload(args: &PayloadArgs) -> Result<(), String> {
    validate::validate_product(&ProductForm {
        nombre: &args.nombre,
        precio: args.precio,
        stock: args.stock,
        categoria_id: Some(args.categoria_id),
        estado_id: Some(args.estado_id),
    })
    .map_err(field_errors)
}

async fn create(context: &AppContext, args: PayloadArgs) -> Result<(), String> {
    validate_payload(&args)?;

    context
        .products
        .create(NewProduct {
            nombre: args.nombre,
            descripcion: args.descripcion,
            precio: args.precio,
            stock: args.stock,
            categoria_id: args.categoria_id,
            estado_id: args.estado_id,
            imagen: args.imagen,
        })
        .await
        .map_err(|error| format!("no se pudo crear el producto: {error}"))?;

    println!("Producto creado.");

    Ok(())
}

async fn update(context: &AppContext, args: UpdateArgs) -> Result<(), String> {
    validate_payload(&args.payload)?;

    context
        .products
        .update(
            args.id,
            ProductUpdate {
                nombre: args.payload.nombre,
                descripcion: args.payload.descripcion,
                precio: args.payload.precio,
                stock: args.payload.stock,
                categoria_id: args.payload.categoria_id,
                estado_id: args.payload.estado_id,
                imagen: args.payload.imagen,
            },
        )
        .await
        .map_err(|error| format!("no se pudo actualizar el producto: {error}"))?;

    println!("Producto actualizado.");

    Ok(())
}

async fn delete(context: &AppContext, args: DeleteArgs) -> Result<(), String> {
    if !args.yes {
        let question = format!("¿Estás seguro de eliminar el producto {}?", args.id);

        if !prompt::confirm(&question).map_err(|error| format!("failed to read answer: {error}"))? {
            println!("Acción cancelada.");

            return Ok(());
        }
    }

    context
        .products
        .delete(args.id)
        .await
        .map_err(|error| format!("no se pudo eliminar el producto: {error}"))?;

    println!("Producto eliminado.");

    Ok(())
}
