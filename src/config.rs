//! Run configuration.

use std::path::PathBuf;

use crate::error::{MirrorError, Result};

/// Default output directory.
pub const DEFAULT_OUTPUT_ROOT: &str = "tracks";

/// Default number of items requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Read-only configuration of a mirror run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorConfig {
    /// Directory that receives the album tree.
    pub output_root: PathBuf,

    /// Items requested per page.
    pub page_size: u32,

    /// Download album cover art next to the album metadata.
    pub download_parent_asset: bool,

    /// Download the preview clip next to the track metadata.
    pub download_child_asset: bool,

    /// Report every file written through the observer.
    pub verbose_logging: bool,

    /// Hand every raw page to the observer.
    pub debug_dump_raw: bool,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            page_size: DEFAULT_PAGE_SIZE,
            download_parent_asset: false,
            download_child_asset: false,
            verbose_logging: false,
            debug_dump_raw: false,
        }
    }
}

impl MirrorConfig {
    /// Create a configuration with defaults and the given output root.
    pub fn new<P: Into<PathBuf>>(output_root: P) -> Self {
        Self {
            output_root: output_root.into(),
            ..Default::default()
        }
    }

    /// Check the configuration before a run starts.
    pub fn validate(&self) -> Result<()> {
        if self.output_root.as_os_str().is_empty() {
            return Err(MirrorError::Config("no output dir".to_string()));
        }
        if self.page_size == 0 {
            return Err(MirrorError::Config("page size must be positive".to_string()));
        }
        Ok(())
    }
}
