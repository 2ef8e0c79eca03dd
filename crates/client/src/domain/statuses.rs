//! The shared status catalog (`/estados`) used by the back-office forms.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tiendita::products::StatusEntry;

use crate::api::ApiClient;

#[derive(Debug, Error)]
pub enum StatusesError {
    #[error(transparent)]
    Api(#[from] crate::api::ApiError),
}

#[derive(Debug, Clone)]
pub struct HttpStatusesService {
    api: Arc<ApiClient>,
}

impl HttpStatusesService {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl StatusesService for HttpStatusesService {
    async fn list(&self) -> Result<Vec<StatusEntry>, StatusesError> {
        Ok(self.api.get("/estados").await?)
    }
}

#[automock]
#[async_trait]
pub trait StatusesService: Send + Sync {
    /// Retrieves all status catalog entries.
    async fn list(&self) -> Result<Vec<StatusEntry>, StatusesError>;
}
