//! User read models and client-side roles.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `rol_id` assigned to self-registered accounts.
pub const CLIENT_ROLE_ID: i64 = 1;

/// `estado_id` for the active status.
pub const ACTIVE_STATUS_ID: i64 = 1;

/// Client-side role derived from the login response's numeric `rol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Client,
    Operator,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("unrecognised role id {0}")]
    UnknownId(i64),

    #[error("unrecognised role {0:?}")]
    UnknownName(String),
}

impl Role {
    /// Map the login response's `rol` field (1 = client, 2 = operator).
    ///
    /// # Errors
    ///
    /// Returns [`RoleError::UnknownId`] for any other id.
    pub const fn from_wire(rol: i64) -> Result<Self, RoleError> {
        match rol {
            1 => Ok(Self::Client),
            2 => Ok(Self::Operator),
            other => Err(RoleError::UnknownId(other)),
        }
    }

    /// Persisted spelling of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Operator => "operator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "client" => Ok(Self::Client),
            "operator" => Ok(Self::Operator),
            other => Err(RoleError::UnknownName(other.to_string())),
        }
    }
}

/// User row as served by `/usuarios`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub nombre: String,
    pub correo: String,

    #[serde(default)]
    pub telefono: Option<String>,

    /// Display role name, e.g. `"Operador"`.
    #[serde(default)]
    pub rol: Option<String>,

    #[serde(default)]
    pub estado: Option<String>,
}

/// Payload for registering or creating a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub nombre: String,
    pub correo: String,
    pub contrasena: String,
    pub telefono: Option<String>,
    pub rol_id: i64,
    pub estado_id: i64,
}

impl NewUser {
    /// Self-registration payload: always a client in the active state.
    #[must_use]
    pub fn registration(
        nombre: String,
        correo: String,
        contrasena: String,
        telefono: Option<String>,
    ) -> Self {
        Self {
            nombre,
            correo,
            contrasena,
            telefono,
            rol_id: CLIENT_ROLE_ID,
            estado_id: ACTIVE_STATUS_ID,
        }
    }
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserUpdate {
    pub nombre: String,
    pub correo: String,
    pub telefono: Option<String>,
    pub rol_id: Option<i64>,
    pub estado_id: i64,
}

/// Users whose name or email contains `term` case-insensitively.
#[must_use]
pub fn search_users(users: &[User], term: &str) -> Vec<User> {
    if term.is_empty() {
        return users.to_vec();
    }

    let needle = term.to_lowercase();

    users
        .iter()
        .filter(|user| {
            user.nombre.to_lowercase().contains(&needle)
                || user.correo.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Users carrying the operator display role.
#[must_use]
pub fn operators(users: &[User]) -> Vec<User> {
    users
        .iter()
        .filter(|user| user.rol.as_deref() == Some("Operador"))
        .cloned()
        .collect()
}
