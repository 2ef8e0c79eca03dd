//! Back-office category management.

use clap::{Args, Subcommand};
use tiendita::products::CategoryPayload;
use tiendita_client::context::AppContext;

use crate::{prompt, render};

#[derive(Debug, Args)]
pub(crate) struct CategoriesCommand {
    #[command(subcommand)]
    command: CategoriesSubcommand,
}

#[derive(Debug, Subcommand)]
enum CategoriesSubcommand {
    /// List categories
    List,

    /// Create a category
    Create(PayloadArgs),

    /// Update a category
    Update(UpdateArgs),

    /// Delete a category
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct PayloadArgs {
    /// Category name
    #[arg(long)]
    nombre: String,

    /// Status id from the status catalog
    #[arg(long, default_value_t = 1)]
    estado_id: i64,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// Category id
    id: i64,

    #[command(flatten)]
    payload: PayloadArgs,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// Category id
    id: i64,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

pub(crate) async fn run(context: &AppContext, command: CategoriesCommand) -> Result<(), String> {
    match command.command {
        CategoriesSubcommand::List => list(context).await,
        CategoriesSubcommand::Create(args) => create(context, args).await,
        CategoriesSubcommand::Update(args) => update(context, args).await,
        CategoriesSubcommand::Delete(args) => delete(context, args).await,
    }
}

async fn list(context: &AppContext) -> Result<(), String> {
    let categories = context
        .categories
        .list()
        .await
        .map_err(|error| format!("no se pudieron cargar las categorías: {error}"))?;

    if categories.is_empty() {
        println!("No hay categorías.");

        return Ok(());
    }

    println!("{}", render::categories_table(&categories));

    Ok(())
}

async fn create(context: &AppContext, args: PayloadArgs) -> Result<(), String> {
    if args.nombre.is_empty() {
        return Err("nombre: Nombre requerido".to_string());
    }

    context
        .categories
        .create(CategoryPayload {
            nombre: args.nombre,
            estado_id: args.estado_id,
        })
        .await
        .map_err(|error| format!("no se pudo crear la categoría: {error}"))?;

    println!("Categoría creada.");

    Ok(())
}

async fn update(context: &AppContext, args: UpdateArgs) -> Result<(), String> {
    if args.payload.nombre.is_empty() {
        return Err("nombre: Nombre requerido".to_string());
    }

    context
        .categories
        .update(
            args.id,
            CategoryPayload {
                nombre: args.payload.nombre,
                estado_id: args.payload.estado_id,
            },
        )
        .await
        .map_err(|error| format!("no se pudo actualizar la categoría: {error}"))?;

    println!("Categoría actualizada.");

    Ok(())
}

async fn delete(context: &AppContext, args: DeleteArgs) -> Result<(), String> {
    if !args.yes {
        let question = format!("¿Estás seguro de eliminar la categoría {}?", args.id);

        if !prompt::confirm(&question).map_err(|error| format!("failed to read answer: {error}"))? {
            println!("Acción cancelada.");

            return Ok(());
        }
    }

    context
        .categories
        .delete(args.id)
        .await
        .map_err(|error| format!("no se pudo eliminar la categoría: {error}"))?;

    println!("Categoría eliminada.");

    Ok(())
}
