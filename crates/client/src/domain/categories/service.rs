//! Categories service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tiendita::products::{Category, CategoryPayload};

use crate::{api::ApiClient, domain::categories::errors::CategoriesError};

#[derive(Debug, Clone)]
pub struct HttpCategoriesService {
    api: Arc<ApiClient>,
}

impl HttpCategoriesService {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CategoriesService for HttpCategoriesService {
    async fn list(&self) -> Result<Vec<Category>, CategoriesError> {
        Ok(self.api.get("/categorias").await?)
    }

    async fn create(&self, category: CategoryPayload) -> Result<(), CategoriesError> {
        self.api.post_unit("/categorias", &category).await?;

        Ok(())
    }

    async fn update(&self, id: i64, category: CategoryPayload) -> Result<(), CategoriesError> {
        self.api
            .put_unit(&format!("/categorias/{id}"), &category)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), CategoriesError> {
        self.api.delete_unit(&format!("/categorias/{id}")).await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieves all categories.
    async fn list(&self) -> Result<Vec<Category>, CategoriesError>;

    /// Creates a new category.
    async fn create(&self, category: CategoryPayload) -> Result<(), CategoriesError>;

    /// Updates an existing category.
    async fn update(&self, id: i64, category: CategoryPayload) -> Result<(), CategoriesError>;

    /// Deletes a category.
    async fn delete(&self, id: i64) -> Result<(), CategoriesError>;
}
