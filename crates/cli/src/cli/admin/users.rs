//! Back-office user management.

use clap::{Args, Subcommand};
use tiendita::{
    table,
    users::{NewUser, UserUpdate, search_users},
    validate::{self, RegistrationForm},
};
use tiendita_client::context::AppContext;

use crate::{cli::auth::field_errors, prompt, render};

#[derive(Debug, Args)]
pub(crate) struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Debug, Subcommand)]
enum UsersSubcommand {
    /// List users, filtered and paginated
    List(ListArgs),

    /// Create a user
    Create(CreateArgs),

    /// Update a user
    Update(UpdateArgs),

    /// Delete a user
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Filter by name or email
    #[arg(long, default_value = "")]
    search: String,

    /// Zero-based page
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Rows per page
    #[arg(long, default_value_t = 10)]
    per_page: usize,
}

#[derive(Debug, Args)]
struct CreateArgs {
    /// Full name
    #[arg(long)]
    nombre: String,

    /// Account email
    #[arg(long)]
    correo: String,

    /// Account password
    #[arg(long)]
    contrasena: String,

    /// Eight-digit phone number
    #[arg(long)]
    telefono: Option<String>,

    /// Role id (1 = cliente, 2 = operador)
    #[arg(long, default_value_t = 1)]
    rol_id: i64,

    /// Status id from the status catalog
    #[arg(long, default_value_t = 1)]
    estado_id: i64,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// User id
    id: i64,

    /// Full name
    #[arg(long)]
    nombre: String,

    /// Account email
    #[arg(long)]
    correo: String,

    /// Eight-digit phone number
    #[arg(long)]
    telefono: Option<String>,

    /// Role id (1 = cliente, 2 = operador)
    #[arg(long)]
    rol_id: Option<i64>,

    /// Status id from the status catalog
    #[arg(long, default_value_t = 1)]
    estado_id: i64,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// User id
    id: i64,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

pub(crate) async fn run(context: &AppContext, command: UsersCommand) -> Result<(), String> {
    match command.command {
        UsersSubcommand::List(args) => list(context, args).await,
        UsersSubcommand::Create(args) => create(context, args).await,
        UsersSubcommand::Update(args) => update(context, args).await,
        UsersSubcommand::Delete(args) => delete(context, args).await,
    }
}

async fn list(context: &AppContext, args: ListArgs) -> Result<(), String> {
    let users = context
        .users
        .list()
        .await
        .map_err(|error| format!("no se pudieron cargar los usuarios: {error}"))?;

    let found = search_users(&users, &args.search);
    let pages = table::page_count(found.len(), args.per_page);
    let page = table::paginate(&found, args.page, args.per_page);

    if page.is_empty() {
        println!("No hay usuarios.");

        return Ok(());
    }

    println!("{}", render::users_table(&page));
    println!("Página {} de {pages}", args.page + 1);

    Ok(())
}

async fn create(context: &AppContext, args: CreateArgs) -> Result<(), String> {
    validate::validate_registration(&RegistrationForm {
        nombre: &args.nombre,
        correo: &args.correo,
        contrasena: &args.contrasena,
        telefono: args.telefono.as_deref(),
    })
    .map_err(field_errors)?;

    context
        .users
        .create(NewUser {
            nombre: args.nombre,
            correo: args.correo,
            contrasena: args.contrasena,
            telefono: args.telefono,
            rol_id: args.rol_id,
            estado_id: args.estado_id,
        })
        .await
        .map_err(|error| format!("no se pudo crear el usuario: {error}"))?;

    println!("Usuario creado.");

    Ok(())
}

async fn update(context: &AppContext, args: UpdateArgs) -> Result<(), String> {
    context
        .users
        .update(
            args.id,
            UserUpdate {
                nombre: args.nombre,
                correo: args.correo,
                telefono: args.telefono,
                rol_id: args.rol_id,
                estado_id: args.estado_id,
            },
        )
        .await
        .map_err(|error| format!("no se pudo actualizar el usuario: {error}"))?;

    println!("Usuario actualizado.");

    Ok(())
}

async fn delete(context: &AppContext, args: DeleteArgs) -> Result<(), String> {
    if !args.yes {
        let question = format!("¿Estás seguro de eliminar el usuario {}?", args.id);

        if !prompt::confirm(&question).map_err(|error| format!("failed to read answer: {error}"))? {
            println!("Acción cancelada.");

            return Ok(());
        }
    }

    context
        .users
        .delete(args.id)
        .await
        .map_err(|error| format!("no se pudo eliminar el usuario: {error}"))?;

    println!("Usuario eliminado.");

    Ok(())
}
