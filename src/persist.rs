//! Writing metadata records and assets to disk.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use tracing::debug;

use crate::api::BlobFetcher;
use crate::error::Result;

/// Indentation of metadata files.
const JSON_INDENT: &[u8] = b"    ";

/// Writes entity records and downloads their assets.
///
/// Holds no state besides the fetcher; every call overwrites its target.
#[derive(Debug)]
pub struct Persister<F> {
    fetcher: F,
}

impl<F: BlobFetcher> Persister<F> {
    /// Create a persister downloading assets through `fetcher`.
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Write `raw` as indented JSON to `path`, replacing any existing file.
    pub fn persist_metadata(&self, path: &Path, raw: &Value) -> Result<()> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
        raw.serialize(&mut ser)?;
        fs::write(path, buf)?;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    /// Download `url` into `path`, replacing any existing file.
    ///
    /// A missing or empty URL is a no-op. Returns whether a file was written.
    pub async fn persist_asset(&self, path: &Path, url: Option<&str>) -> Result<bool> {
        let url = match url {
            Some(url) if !url.is_empty() => url,
            _ => return Ok(false),
        };

        let bytes = self.fetcher.fetch_blob(url).await?;
        fs::write(path, &bytes)?;
        debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(true)
    }
}
