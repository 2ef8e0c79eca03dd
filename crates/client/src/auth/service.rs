//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tiendita::users::{NewUser, Role};

use crate::{
    api::ApiClient,
    auth::{
        errors::AuthError,
        models::{
            LoginRequest, LoginResponse, RecoverRequest, ResetPasswordRequest, Session,
            SessionToken,
        },
    },
};

#[derive(Debug, Clone)]
pub struct HttpAuthService {
    api: Arc<ApiClient>,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, correo: &str, contrasena: &str) -> Result<Session, AuthError> {
        let response: LoginResponse = self
            .api
            .post(
                "/auth/login",
                &LoginRequest {
                    correo: correo.to_string(),
                    contrasena: contrasena.to_string(),
                },
            )
            .await?;

        let role = Role::from_wire(response.rol)?;

        Ok(Session {
            token: SessionToken::new(response.token),
            role,
        })
    }

    async fn register(&self, user: NewUser) -> Result<(), AuthError> {
        self.api.post_unit("/usuarios", &user).await?;

        Ok(())
    }

    async fn recover(&self, correo: &str) -> Result<(), AuthError> {
        self.api
            .post_unit(
                "/auth/recuperar",
                &RecoverRequest {
                    correo: correo.to_string(),
                },
            )
            .await?;

        Ok(())
    }

    async fn reset_password(&self, token: &str, contrasena: &str) -> Result<(), AuthError> {
        self.api
            .post_unit(
                &format!("/auth/reset-password/{token}"),
                &ResetPasswordRequest {
                    contrasena: contrasena.to_string(),
                },
            )
            .await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for an authenticated session.
    async fn login(&self, correo: &str, contrasena: &str) -> Result<Session, AuthError>;

    /// Self-register a new client account.
    async fn register(&self, user: NewUser) -> Result<(), AuthError>;

    /// Request a password-recovery email.
    async fn recover(&self, correo: &str) -> Result<(), AuthError>;

    /// Complete a password reset with the emailed token.
    async fn reset_password(&self, token: &str, contrasena: &str) -> Result<(), AuthError>;
}
