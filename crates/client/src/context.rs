//! App context: wires every service and store over one storage backend.

use std::{path::Path, sync::Arc};

use thiserror::Error;
use tiendita::users::Role;

use crate::{
    api::ApiClient,
    auth::{AuthError, AuthService, HttpAuthService, RouteGuard, SessionStore},
    domain::{
        cart::CartStore,
        categories::{CategoriesService, HttpCategoriesService},
        orders::{HttpOrdersService, OrdersService},
        products::{HttpProductsService, ProductsService},
        statuses::{HttpStatusesService, StatusesService},
        users::{HttpUsersService, UsersService},
    },
    storage::{FileStorage, Storage, StorageError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to open client state")]
    Storage(#[from] StorageError),
}

/// Shared handle to the client's services and stores.
#[derive(Clone)]
pub struct AppContext {
    pub session: Arc<SessionStore>,
    pub cart: Arc<CartStore>,
    pub guard: RouteGuard,
    pub auth: Arc<dyn AuthService>,
    pub products: Arc<dyn ProductsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub statuses: Arc<dyn StatusesService>,
    pub orders: Arc<dyn OrdersService>,
    pub users: Arc<dyn UsersService>,
}

impl AppContext {
    /// Build the context with state persisted at `state_file`.
    ///
    /// # Errors
    ///
    /// Returns an error when the state file exists but cannot be opened.
    pub fn new(base_url: &str, state_file: &Path) -> Result<Self, AppInitError> {
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::open(state_file)?);

        Ok(Self::with_storage(base_url, storage))
    }

    /// Build the context over an existing storage backend.
    #[must_use]
    pub fn with_storage(base_url: &str, storage: Arc<dyn Storage>) -> Self {
        let api = Arc::new(ApiClient::new(base_url, Arc::clone(&storage)));

        Self {
            session: Arc::new(SessionStore::open(Arc::clone(&storage))),
            cart: Arc::new(CartStore::open(Arc::clone(&storage))),
            guard: RouteGuard::new(storage),
            auth: Arc::new(HttpAuthService::new(Arc::clone(&api))),
            products: Arc::new(HttpProductsService::new(Arc::clone(&api))),
            categories: Arc::new(HttpCategoriesService::new(Arc::clone(&api))),
            statuses: Arc::new(HttpStatusesService::new(Arc::clone(&api))),
            orders: Arc::new(HttpOrdersService::new(Arc::clone(&api))),
            users: Arc::new(HttpUsersService::new(api)),
        }
    }

    /// Exchange credentials for a session and persist it.
    ///
    /// # Errors
    ///
    /// Returns the login or persistence failure; nothing is stored on
    /// failure.
    pub async fn login(&self, correo: &str, contrasena: &str) -> Result<Role, AuthError> {
        let session = self.auth.login(correo, contrasena).await?;
        let role = session.role;

        self.session.establish(session)?;

        Ok(role)
    }

    /// Sign out: drop the session and every persisted client key (`token`,
    /// `role`, `cart`), notifying both stores.
    ///
    /// # Errors
    ///
    /// Returns an error when the persisted keys cannot be removed.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.session.clear()?;
        self.cart.clear()?;

        Ok(())
    }
}
