//! Users service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tiendita::users::{NewUser, User, UserUpdate};

use crate::{api::ApiClient, domain::users::errors::UsersError};

#[derive(Debug, Clone)]
pub struct HttpUsersService {
    api: Arc<ApiClient>,
}

impl HttpUsersService {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UsersService for HttpUsersService {
    async fn list(&self) -> Result<Vec<User>, UsersError> {
        Ok(self.api.get("/usuarios").await?)
    }

    async fn create(&self, user: NewUser) -> Result<(), UsersError> {
        self.api.post_unit("/usuarios", &user).await?;

        Ok(())
    }

    async fn update(&self, id: i64, user: UserUpdate) -> Result<(), UsersError> {
        self.api.put_unit(&format!("/usuarios/{id}"), &user).await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), UsersError> {
        self.api.delete_unit(&format!("/usuarios/{id}")).await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Retrieves all users.
    async fn list(&self) -> Result<Vec<User>, UsersError>;

    /// Creates a new user.
    async fn create(&self, user: NewUser) -> Result<(), UsersError>;

    /// Updates an existing user.
    async fn update(&self, id: i64, user: UserUpdate) -> Result<(), UsersError>;

    /// Deletes a user.
    async fn delete(&self, id: i64) -> Result<(), UsersError>;
}
