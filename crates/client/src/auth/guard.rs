//! Route guard for protected navigation.

use std::sync::Arc;

use thiserror::Error;

use crate::storage::{Storage, TOKEN_KEY};

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Permit,
    RedirectToLogin,
}

/// Raised when a protected command is reached without a session.
#[derive(Debug, Error)]
#[error("inicia sesión para continuar")]
pub struct NotAuthenticated;

/// Gate over protected navigation.
///
/// The check reads the persisted token on every call, so it is re-evaluated
/// per navigation. Any non-empty token passes, independent of role; this
/// proves authentication only, not capability.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    storage: Arc<dyn Storage>,
}

impl RouteGuard {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    #[must_use]
    pub fn check(&self) -> GuardDecision {
        match self.storage.get(TOKEN_KEY) {
            Some(token) if !token.is_empty() => GuardDecision::Permit,
            Some(_) | None => GuardDecision::RedirectToLogin,
        }
    }

    /// Fail unless a session token is present.
    ///
    /// # Errors
    ///
    /// Returns [`NotAuthenticated`] when the check does not permit.
    pub fn require(&self) -> Result<(), NotAuthenticated> {
        match self.check() {
            GuardDecision::Permit => Ok(()),
            GuardDecision::RedirectToLogin => Err(NotAuthenticated),
        }
    }
}
