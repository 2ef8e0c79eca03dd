//! Authenticated HTTP client for the storefront API.

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::storage::{Storage, TOKEN_KEY};

/// Errors that can occur when talking to the storefront API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or deserialization failure from the HTTP stack.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Thin request wrapper that attaches the persisted bearer token, mirroring
/// how the session token gates every authenticated call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
    storage: Arc<dyn Storage>,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>, storage: Arc<dyn Storage>) -> Self {
        let mut base_url = base_url.into();

        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            http: Client::new(),
            storage,
        }
    }

    /// GET `path` and decode the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or an
    /// undecodable body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(self.request(Method::GET, path)).await
    }

    /// POST `body` to `path` and decode the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or an
    /// undecodable body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        decode(self.request(Method::POST, path).json(body)).await
    }

    /// POST `body` to `path`, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    pub async fn post_unit<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        discard(self.request(Method::POST, path).json(body)).await
    }

    /// PUT `body` to `path`, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    pub async fn put_unit<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        discard(self.request(Method::PUT, path).json(body)).await
    }

    /// DELETE `path`, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    pub async fn delete_unit(&self, path: &str) -> Result<(), ApiError> {
        discard(self.request(Method::DELETE, path)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request_id = Uuid::now_v7();

        tracing::debug!(%request_id, %method, path, "api request");

        let mut builder = self.http.request(method, self.endpoint(path));

        if let Some(token) = self.storage.get(TOKEN_KEY)
            && !token.is_empty()
        {
            builder = builder.bearer_auth(token);
        }

        builder
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn decode<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = checked(builder).await?;

    Ok(response.json().await?)
}

async fn discard(builder: RequestBuilder) -> Result<(), ApiError> {
    checked(builder).await.map(drop)
}

async fn checked(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder.send().await?;
    let status = response.status();

    if !status.is_success() {
        let message = error_message(response).await;

        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response)
}

/// Pull a human-readable message out of an error response body.
async fn error_message(response: Response) -> String {
    let text = response.text().await.unwrap_or_default();

    if let Ok(value) = serde_json::from_str::<Value>(&text) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }

    if text.is_empty() {
        "no response body".to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::MemoryStorage;

    use super::*;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(base_url, Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn endpoint_joins_base_url_and_path() {
        let api = client("http://localhost:3000/api");

        assert_eq!(
            api.endpoint("/productos"),
            "http://localhost:3000/api/productos"
        );
    }

    #[test]
    fn trailing_slashes_on_the_base_url_are_trimmed() {
        let api = client("http://localhost:3000/api//");

        assert_eq!(
            api.endpoint("/auth/login"),
            "http://localhost:3000/api/auth/login"
        );
    }

    #[test]
    fn status_predicates_match_their_codes() {
        let not_found = ApiError::Status {
            status: 404,
            message: String::new(),
        };

        let unauthorized = ApiError::Status {
            status: 401,
            message: String::new(),
        };

        assert!(not_found.is_not_found());
        assert!(!not_found.is_unauthorized());
        assert!(unauthorized.is_unauthorized());
    }
}
