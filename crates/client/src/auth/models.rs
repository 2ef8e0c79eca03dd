//! Auth wire models and the session itself.

use std::fmt;

use serde::{Deserialize, Serialize};
use tiendita::users::Role;
use zeroize::Zeroize;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub correo: String,
    pub contrasena: String,
}

/// Successful login response; `rol` is the numeric role id.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub rol: i64,
}

/// Body of `POST /auth/recuperar`.
#[derive(Debug, Clone, Serialize)]
pub struct RecoverRequest {
    pub correo: String,
}

/// Body of `POST /auth/reset-password/{token}`.
#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub contrasena: String,
}

/// Bearer token of the current session; zeroed on drop and redacted in
/// debug output.
#[derive(Clone)]
pub struct SessionToken {
    value: String,
}

impl SessionToken {
    #[must_use]
    pub fn new(value: String) -> Self {
        Self { value }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(**redacted**)")
    }
}

impl Drop for SessionToken {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// An authenticated session.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: SessionToken,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn login_response_decodes_wire_shape() -> TestResult {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token": "abc123", "rol": 2}"#)?;

        assert_eq!(response.token, "abc123");
        assert_eq!(response.rol, 2);

        Ok(())
    }

    #[test]
    fn session_token_debug_output_is_redacted() {
        let token = SessionToken::new("super-secret".to_string());

        assert_eq!(format!("{token:?}"), "SessionToken(**redacted**)");
    }
}
