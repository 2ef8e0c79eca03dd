//! Authentication: login/logout, the observable session store, and the
//! route guard for protected navigation.

mod errors;
mod guard;
mod models;
mod service;
mod session;

pub use errors::AuthError;
pub use guard::{GuardDecision, NotAuthenticated, RouteGuard};
pub use models::{
    LoginRequest, LoginResponse, RecoverRequest, ResetPasswordRequest, Session, SessionToken,
};
pub use service::{AuthService, HttpAuthService, MockAuthService};
pub use session::{SessionState, SessionStore};
