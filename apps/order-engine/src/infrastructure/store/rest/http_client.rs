//! Thin HTTP client for the data service.

use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api_types::ApiErrorResponse;
use super::config::StoreConfig;
use crate::application::ports::StoreError;

/// HTTP client for the backend data service.
///
/// Success is decided purely by status class: any 2xx is a success,
/// anything else becomes [`StoreError::Rejected`] carrying the body's
/// `error` field when present. Requests are never retried.
#[derive(Debug, Clone)]
pub struct StoreHttpClient {
    client: Client,
    base_url: String,
}

impl StoreHttpClient {
    /// Create a new HTTP client from config.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Make a GET request and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(connection)?;
        Self::read_json(response).await
    }

    /// Make a POST request with a JSON body and decode the JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(connection)?;
        Self::read_json(response).await
    }

    /// Make a PUT request with a JSON body, discarding the response body.
    pub async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(connection)?;
        Self::check(response).await
    }

    /// Make a DELETE request, discarding the response body.
    pub async fn delete(&self, path: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .map_err(connection)?;
        Self::check(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::rejection(status, response).await);
        }
        let text = response.text().await.map_err(connection)?;
        serde_json::from_str(&text).map_err(|e| StoreError::InvalidResponse {
            message: e.to_string(),
        })
    }

    async fn check(response: Response) -> Result<(), StoreError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::rejection(status, response).await)
        }
    }

    async fn rejection(status: StatusCode, response: Response) -> StoreError {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorResponse>(&body)
            .ok()
            .and_then(|parsed| parsed.error)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        StoreError::Rejected {
            status: status.as_u16(),
            message,
        }
    }
}

fn connection(error: reqwest::Error) -> StoreError {
    StoreError::Connection {
        message: error.to_string(),
    }
}
