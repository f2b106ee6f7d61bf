//! Spotify Web API page source.
//!
//! Reads the current user's saved tracks (`/v1/me/tracks`). The caller is
//! responsible for obtaining an OAuth access token with the
//! `user-library-read` scope.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use super::PageSource;
use crate::error::{MirrorError, Result};

/// Base URL for the Spotify Web API.
const API_BASE_URL: &str = "https://api.spotify.com/v1/";

/// Saved-tracks listing endpoint.
const SAVED_TRACKS_ENDPOINT: &str = "me/tracks";

/// Spotify Web API client bound to one access token.
///
/// # Example
///
/// ```rust,no_run
/// use spotish::api::{build_client, PageSource, SpotifyApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = SpotifyApi::new(build_client(None)?, "access-token")?;
///     let page = api.fetch_page(20, 0).await?;
///     println!("{}", page["items"].as_array().map_or(0, |i| i.len()));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SpotifyApi {
    client: Client,
    token: String,
    base_url: String,
}

impl SpotifyApi {
    /// Create a client. A blank token is a configuration error.
    pub fn new<S: Into<String>>(client: Client, token: S) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(MirrorError::Config("no access token".to_string()));
        }

        Ok(Self {
            client,
            token,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API root (must end with `/`).
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Make an authenticated GET request with query parameters.
    async fn get_api_with_params(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {} with params: {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(params)
            .send()
            .await?;
        let data: Value = response.json().await?;

        // Spotify reports failures as {"error": {"status": .., "message": ..}}
        if let Some(err) = data.get("error") {
            let error_msg = error_message(err);
            error!("Spotify API error: {}", error_msg);
            return Err(MirrorError::ApiError(error_msg));
        }

        Ok(data)
    }
}

/// Render the `error` member of a Spotify error body.
fn error_message(err: &Value) -> String {
    match (err.get("status").and_then(|s| s.as_u64()), err.get("message").and_then(|m| m.as_str())) {
        (Some(status), Some(msg)) => format!("{} ({})", msg, status),
        (None, Some(msg)) => msg.to_string(),
        _ => err.as_str().unwrap_or("Unknown error").to_string(),
    }
}

#[async_trait]
impl PageSource for SpotifyApi {
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<Value> {
        let limit = limit.to_string();
        let offset = offset.to_string();
        self.get_api_with_params(
            SAVED_TRACKS_ENDPOINT,
            &[("limit", limit.as_str()), ("offset", offset.as_str())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_token_rejected() {
        let client = Client::new();
        assert!(matches!(SpotifyApi::new(client.clone(), "  "), Err(MirrorError::Config(_))));
        assert!(SpotifyApi::new(client, "token").is_ok());
    }

    #[test]
    fn test_error_message_formats() {
        let err = json!({"status": 401, "message": "The access token expired"});
        assert_eq!(error_message(&err), "The access token expired (401)");

        assert_eq!(error_message(&json!({"message": "nope"})), "nope");
        assert_eq!(error_message(&json!("invalid_client")), "invalid_client");
        assert_eq!(error_message(&json!({})), "Unknown error");
    }

    #[test]
    fn test_base_url_override() {
        let api = SpotifyApi::new(Client::new(), "t")
            .unwrap()
            .with_base_url("http://localhost:9999/v1/");
        assert_eq!(api.base_url, "http://localhost:9999/v1/");
    }
}
