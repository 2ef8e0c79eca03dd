use clap::{Parser, Subcommand};
use tiendita_client::context::AppContext;

use crate::{config::Settings, logging};

mod admin;
mod auth;
mod cart;
mod shop;

#[derive(Debug, Parser)]
#[command(
    name = "tiendita",
    about = "Tiendita storefront and back-office client",
    long_about = None
)]
pub(crate) struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sign in with email and password
    Login(auth::LoginArgs),

    /// Sign out and clear local state
    Logout,

    /// Register a new client account
    Register(auth::RegisterArgs),

    /// Request a password-recovery email
    Recover(auth::RecoverArgs),

    /// Complete a password reset with the emailed token
    ResetPassword(auth::ResetPasswordArgs),

    /// Browse the storefront
    Shop(shop::ShopCommand),

    /// Manage the shopping cart
    Cart(cart::CartCommand),

    /// Operator back office
    Admin(admin::AdminCommand),
}

impl Commands {
    /// Everything except the auth entry points sits behind the route guard.
    const fn is_protected(&self) -> bool {
        !matches!(
            self,
            Self::Login(_) | Self::Register(_) | Self::Recover(_) | Self::ResetPassword(_)
        )
    }
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        logging::init(&self.settings)
            .map_err(|error| format!("failed to initialise logging: {error}"))?;

        let context = AppContext::new(&self.settings.api_url, &self.settings.state_file)
            .map_err(|error| error.to_string())?;

        tracing::debug!(api_url = %self.settings.api_url, "client context ready");

        // the guard re-checks the persisted token on every invocation
        if self.command.is_protected() {
            context.guard.require().map_err(|error| error.to_string())?;
        }

        match self.command {
            Commands::Login(args) => auth::login(&context, args).await,
            Commands::Logout => auth::logout(&context),
            Commands::Register(args) => auth::register(&context, args).await,
            Commands::Recover(args) => auth::recover(&context, args).await,
            Commands::ResetPassword(args) => auth::reset_password(&context, args).await,
            Commands::Shop(command) => shop::run(&context, command).await,
            Commands::Cart(command) => cart::run(&context, command).await,
            Commands::Admin(command) => admin::run(&context, command).await,
        }
    }
}
