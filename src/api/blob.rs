//! HTTP download of binary assets.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use super::BlobFetcher;
use crate::error::Result;

/// Fetches asset bytes over plain HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpBlobFetcher {
    client: Client,
}

impl HttpBlobFetcher {
    /// Create a fetcher sharing an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BlobFetcher for HttpBlobFetcher {
    async fn fetch_blob(&self, url: &str) -> Result<Bytes> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?)
    }
}
