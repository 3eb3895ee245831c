//! Client layer for the content API.
//!
//! This module defines the interface every resource client implements, the
//! error type shared by all of them and the [`Clients`] bundle handed to the
//! UI.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::entities::{Module, NewsItem, Resource, Topic};

pub mod http;

pub use http::HttpResourceClient;

/// Common error types for client operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Create / list / update / delete gateway for one resource type.
///
/// Every call is a single attempt. Implementations never retry.
#[async_trait]
pub trait ResourceClient<R: Resource>: Send + Sync {
    /// Create a record. `Ok(None)` means the server accepted the draft but
    /// did not echo back a decodable record.
    async fn create(&self, draft: &R::Draft) -> Result<Option<R>, BackendError>;

    /// Fetch the whole collection in server order.
    async fn list_all(&self) -> Result<Vec<R>, BackendError>;

    /// Replace the editable fields of record `id`. Returns the canonical
    /// record when the server sends one back.
    async fn update_by_id(&self, id: i64, draft: &R::Draft) -> Result<Option<R>, BackendError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), BackendError>;
}

/// One shared client per resource type.
#[derive(Clone)]
pub struct Clients {
    pub topics: Arc<dyn ResourceClient<Topic>>,
    pub news: Arc<dyn ResourceClient<NewsItem>>,
    pub modules: Arc<dyn ResourceClient<Module>>,
}

impl Clients {
    pub fn new(
        topics: Arc<dyn ResourceClient<Topic>>,
        news: Arc<dyn ResourceClient<NewsItem>>,
        modules: Arc<dyn ResourceClient<Module>>,
    ) -> Self {
        Self { topics, news, modules }
    }

    /// HTTP clients for every resource type, sharing one connection pool.
    pub fn http(config: &ApiConfig) -> anyhow::Result<Self> {
        let client = http::build_client()?;
        Ok(Self {
            topics: Arc::new(HttpResourceClient::<Topic>::new(client.clone(), &config.base_url)),
            news: Arc::new(HttpResourceClient::<NewsItem>::new(client.clone(), &config.base_url)),
            modules: Arc::new(HttpResourceClient::<Module>::new(client, &config.base_url)),
        })
    }
}
