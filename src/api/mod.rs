//! Remote collaborators of the mirror pipeline.
//!
//! The pipeline only needs two capabilities from the network:
//! - [`PageSource`]: pull one page of the saved-tracks listing
//! - [`BlobFetcher`]: download the bytes behind an asset URL
//!
//! [`SpotifyApi`] and [`HttpBlobFetcher`] implement them over HTTP.

pub mod blob;
pub mod spotify;

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde_json::Value;

use crate::error::{MirrorError, Result};

pub use blob::HttpBlobFetcher;
pub use spotify::SpotifyApi;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("spotish/", env!("CARGO_PKG_VERSION"));

/// Source of listing pages.
///
/// `fetch_page(limit, offset)` returns the raw page payload. A page whose
/// `items` array is empty ends the listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<Value>;
}

/// Downloader for binary assets (cover art, preview clips).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobFetcher: Send + Sync {
    async fn fetch_blob(&self, url: &str) -> Result<Bytes>;
}

/// Build the HTTP client shared by the collaborators.
///
/// Without a timeout a stalled request stalls the whole run.
pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| MirrorError::Config(format!("Failed to create HTTP client: {}", e)))
}
