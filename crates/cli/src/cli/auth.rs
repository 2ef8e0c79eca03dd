//! Auth entry points: login, logout, registration, password recovery.

use clap::Args;
use tiendita::{
    users::NewUser,
    validate::{self, FieldError, LoginForm, RegistrationForm},
};
use tiendita_client::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Account email
    #[arg(long)]
    correo: String,

    /// Account password
    #[arg(long)]
    contrasena: String,
}

#[derive(Debug, Args)]
pub(crate) struct RegisterArgs {
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
}

#[derive(Debug, Args)]
pub(crate) struct RecoverArgs {
    /// Account email
    #[arg(long)]
    correo: String,
}

#[derive(Debug, Args)]
pub(crate) struct ResetPasswordArgs {
    /// Reset token from the recovery email
    token: String,

    /// New password
    #[arg(long)]
    contrasena: String,
}

pub(crate) async fn login(context: &AppContext, args: LoginArgs) -> Result<(), String> {
    validate::validate_login(&LoginForm {
        correo: &args.correo,
        contrasena: &args.contrasena,
    })
    .map_err(field_errors)?;

    let role = context
        .login(&args.correo, &args.contrasena)
        .await
        .map_err(|error| format!("no se pudo iniciar sesión: {error}"))?;

    println!("¡Inicio de sesión exitoso! Eres un {role}.");

    Ok(())
}

pub(crate) fn logout(context: &AppContext) -> Result<(), String> {
    context
        .logout()
        .map_err(|error| format!("no se pudo cerrar la sesión: {error}"))?;

    println!("Adiós, vuelva pronto!");

    Ok(())
}

pub(crate) async fn register(context: &AppContext, args: RegisterArgs) -> Result<(), String> {
    validate::validate_registration(&RegistrationForm {
        nombre: &args.nombre,
        correo: &args.correo,
        contrasena: &args.contrasena,
        telefono: args.telefono.as_deref(),
    })
    .map_err(field_errors)?;

    context
        .auth
        .register(NewUser::registration(
            args.nombre,
            args.correo,
            args.contrasena,
            args.telefono,
        ))
        .await
        .map_err(|error| format!("no se pudo registrar: {error}"))?;

    println!("Usuario registrado exitosamente!");

    Ok(())
}

pub(crate) async fn recover(context: &AppContext, args: RecoverArgs) -> Result<(), String> {
    context
        .auth
        .recover(&args.correo)
        .await
        .map_err(|error| format!("no se pudo solicitar la recuperación: {error}"))?;

    println!("Revisa tu correo para continuar con la recuperación.");

    Ok(())
}

pub(crate) async fn reset_password(
    context: &AppContext,
    args: ResetPasswordArgs,
) -> Result<(), String> {
    context
        .auth
        .reset_password(&args.token, &args.contrasena)
        .await
        .map_err(|error| format!("no se pudo restablecer la contraseña: {error}"))?;

    println!("Contraseña actualizada.");

    Ok(())
}

pub(super) fn field_errors(errors: Vec<FieldError>) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
