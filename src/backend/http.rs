//! REST implementation of [`ResourceClient`] over reqwest.

use std::marker::PhantomData;

use anyhow::Context;
use async_trait::async_trait;

use super::{BackendError, ResourceClient};
use crate::entities::Resource;

/// Build the shared reqwest client with the transport defaults.
pub fn build_client() -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .build()
        .context("Failed to create HTTP client")
}

/// JSON client for the collection of `R` under `{base_url}/{R::KIND.path()}`.
pub struct HttpResourceClient<R: Resource> {
    client: reqwest::Client,
    base_url: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> HttpResourceClient<R> {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            _resource: PhantomData,
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, R::KIND.path())
    }

    pub fn item_url(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, R::KIND.path(), id)
    }

    /// Send a request and return the response body, mapping failures.
    async fn execute(&self, request: reqwest::RequestBuilder, target: &str) -> Result<String, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        check_status(status, body, target)
    }
}

/// Map a response status to the body on success or a [`BackendError`].
pub fn check_status(status: u16, body: String, target: &str) -> Result<String, BackendError> {
    match status {
        200..=299 => Ok(body),
        404 => Err(BackendError::NotFound(target.to_string())),
        _ => Err(BackendError::Status { status, body }),
    }
}

/// Decode a single record leniently: an empty or foreign body yields `None`.
pub fn decode_record<R: Resource>(body: &str) -> Option<R> {
    serde_json::from_str::<R>(body).ok()
}

pub fn decode_list<R: Resource>(body: &str) -> Result<Vec<R>, BackendError> {
    serde_json::from_str::<Vec<R>>(body).map_err(|e| BackendError::InvalidData(e.to_string()))
}

#[async_trait]
impl<R: Resource> ResourceClient<R> for HttpResourceClient<R> {
    async fn create(&self, draft: &R::Draft) -> Result<Option<R>, BackendError> {
        let url = self.collection_url();
        log::debug!("POST {}", url);
        let body = self.execute(self.client.post(&url).json(draft), &url).await?;
        Ok(decode_record(&body))
    }

    async fn list_all(&self) -> Result<Vec<R>, BackendError> {
        let url = self.collection_url();
        log::debug!("GET {}", url);
        let body = self.execute(self.client.get(&url), &url).await?;
        decode_list(&body)
    }

    async fn update_by_id(&self, id: i64, draft: &R::Draft) -> Result<Option<R>, BackendError> {
        let url = self.item_url(id);
        log::debug!("PATCH {}", url);
        let body = self.execute(self.client.patch(&url).json(draft), &url).await?;
        Ok(decode_record(&body))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), BackendError> {
        let url = self.item_url(id);
        log::debug!("DELETE {}", url);
        self.execute(self.client.delete(&url), &url).await?;
        Ok(())
    }
}
