//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tiendita::{
    catalog,
    products::{NewProduct, Product, ProductUpdate},
};

use crate::{api::ApiClient, domain::products::errors::ProductsError};

#[derive(Debug, Clone)]
pub struct HttpProductsService {
    api: Arc<ApiClient>,
}

impl HttpProductsService {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ProductsService for HttpProductsService {
    async fn list(&self) -> Result<Vec<Product>, ProductsError> {
        Ok(self.api.get("/productos").await?)
    }

    async fn list_active(&self) -> Result<Vec<Product>, ProductsError> {
        let products = self.list().await?;

        Ok(catalog::active_products(&products))
    }

    async fn get(&self, id: i64) -> Result<Product, ProductsError> {
        Ok(self.api.get(&format!("/productos/{id}")).await?)
    }

    async fn create(&self, product: NewProduct) -> Result<(), ProductsError> {
        self.api.post_unit("/productos", &product).await?;

        Ok(())
    }

    async fn update(&self, id: i64, product: ProductUpdate) -> Result<(), ProductsError> {
        self.api
            .put_unit(&format!("/productos/{id}"), &product)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ProductsError> {
        self.api.delete_unit(&format!("/productos/{id}")).await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Every product, for the back office.
    async fn list(&self) -> Result<Vec<Product>, ProductsError>;

    /// Storefront listing: active products only.
    async fn list_active(&self) -> Result<Vec<Product>, ProductsError>;

    /// Retrieve a single product.
    async fn get(&self, id: i64) -> Result<Product, ProductsError>;

    /// Creates a new product.
    async fn create(&self, product: NewProduct) -> Result<(), ProductsError>;

    /// Updates an existing product.
    async fn update(&self, id: i64, product: ProductUpdate) -> Result<(), ProductsError>;

    /// Deletes a product.
    async fn delete(&self, id: i64) -> Result<(), ProductsError>;
}
