//! The mirror pipeline.
//!
//! [`Mirror`] walks the saved-tracks listing page by page, starting at
//! offset 0 and stopping at the first empty page. For every entry it
//! creates the album and track directories, then writes the album once
//! per run (on the first track that references it) and each track once
//! per run. Any error aborts the run.

use serde_json::Value;
use tracing::{debug, info};

use crate::api::{BlobFetcher, PageSource};
use crate::config::MirrorConfig;
use crate::converters;
use crate::dedup::DedupTracker;
use crate::error::{MirrorError, Result};
use crate::layout::PathLayout;
use crate::models::{EntityKind, SavedTrack};
use crate::persist::Persister;

/// A write the pipeline is about to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteOp {
    /// Album metadata record.
    AlbumMetadata,
    /// Album cover art.
    AlbumImage,
    /// Track metadata record.
    TrackMetadata,
    /// Track preview clip.
    TrackPreview,
}

impl WriteOp {
    /// Short label used in operation logs.
    pub fn label(&self) -> &'static str {
        match self {
            WriteOp::AlbumMetadata => "save album",
            WriteOp::AlbumImage => "save album img",
            WriteOp::TrackMetadata => "save track",
            WriteOp::TrackPreview => "save track preview",
        }
    }
}

/// Hooks for operational output.
///
/// `on_write` is only called when verbose logging is enabled and
/// `on_raw_page` only when raw page dumps are enabled. Formatting is left
/// entirely to the implementation.
pub trait MirrorObserver: Send + Sync {
    /// A file is about to be written for the entity `identifier`.
    fn on_write(&self, _op: WriteOp, _identifier: &str) {}

    /// A non-empty page was received at `offset`.
    fn on_raw_page(&self, _offset: u32, _page: &Value) {}
}

/// Observer forwarding both hooks to `tracing` at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl MirrorObserver for TracingObserver {
    fn on_write(&self, op: WriteOp, identifier: &str) {
        info!("[{:20}]{}", op.label(), identifier);
    }

    fn on_raw_page(&self, offset: u32, page: &Value) {
        match serde_json::to_string_pretty(page) {
            Ok(dump) => info!(offset, "{}", dump),
            Err(e) => debug!("Could not render page at offset {}: {}", offset, e),
        }
    }
}

/// Counters for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorReport {
    /// Pages requested, including the final empty one.
    pub pages_fetched: usize,
    /// Album metadata files written.
    pub albums_written: usize,
    /// Track metadata files written.
    pub tracks_written: usize,
    /// Album covers downloaded.
    pub album_images_written: usize,
    /// Track previews downloaded.
    pub track_previews_written: usize,
}

/// Drives the paginated fetch and persists every entity once per run.
///
/// # Example
///
/// ```rust,no_run
/// use spotish::api::{build_client, HttpBlobFetcher, SpotifyApi};
/// use spotish::{Mirror, MirrorConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = build_client(None)?;
///     let source = SpotifyApi::new(client.clone(), "access-token")?;
///     let mirror = Mirror::new(source, HttpBlobFetcher::new(client), MirrorConfig::default())?;
///
///     let report = mirror.run().await?;
///     println!("{} tracks written", report.tracks_written);
///     Ok(())
/// }
/// ```
pub struct Mirror<S, F, O = TracingObserver> {
    source: S,
    persister: Persister<F>,
    layout: PathLayout,
    config: MirrorConfig,
    observer: O,
}

impl<S: PageSource, F: BlobFetcher> Mirror<S, F, TracingObserver> {
    /// Create a mirror reporting through [`TracingObserver`].
    ///
    /// # Errors
    ///
    /// Returns `Config` if the configuration is invalid.
    pub fn new(source: S, fetcher: F, config: MirrorConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            source,
            persister: Persister::new(fetcher),
            layout: PathLayout::new(&config.output_root),
            config,
            observer: TracingObserver,
        })
    }
}

impl<S: PageSource, F: BlobFetcher, O: MirrorObserver> Mirror<S, F, O> {
    /// Replace the observer.
    pub fn with_observer<O2: MirrorObserver>(self, observer: O2) -> Mirror<S, F, O2> {
        Mirror {
            source: self.source,
            persister: self.persister,
            layout: self.layout,
            config: self.config,
            observer,
        }
    }

    /// Get the run configuration.
    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    /// Get the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mirror the whole listing.
    ///
    /// Each call starts from offset 0 with empty dedup state, so running
    /// twice rewrites everything the second time as well.
    pub async fn run(&self) -> Result<MirrorReport> {
        let page_size = self.config.page_size;
        let mut tracker = DedupTracker::new();
        let mut report = MirrorReport::default();
        let mut offset: u32 = 0;

        loop {
            let page = self.source.fetch_page(page_size, offset).await?;
            report.pages_fetched += 1;

            let items = converters::page_items(&page)?;
            if items.is_empty() {
                break;
            }
            debug!("Page at offset {} has {} items", offset, items.len());

            if self.config.debug_dump_raw {
                self.observer.on_raw_page(offset, &page);
            }

            for item in items {
                let track = converters::parse_saved_item(item)?;
                self.mirror_track(&track, &mut tracker, &mut report).await?;
            }

            offset = offset.checked_add(page_size).ok_or_else(|| {
                MirrorError::Config(format!(
                    "page size {} overflows the listing offset after {}",
                    page_size, offset
                ))
            })?;
        }

        info!(
            "Mirror finished: {} pages, {} albums, {} tracks, {} images, {} previews",
            report.pages_fetched,
            report.albums_written,
            report.tracks_written,
            report.album_images_written,
            report.track_previews_written
        );

        Ok(report)
    }

    /// Persist one listing entry: its album (first sight only) and the track.
    async fn mirror_track(
        &self,
        track: &SavedTrack,
        tracker: &mut DedupTracker,
        report: &mut MirrorReport,
    ) -> Result<()> {
        let album = &track.album;
        let album_id = album.identifier();
        let track_id = track.identifier();

        let album_paths = self.layout.album(&album_id);
        let track_paths = self.layout.track(&album_id, &track_id);

        // Directories are created on every sighting, duplicates included.
        album_paths.create_dir()?;
        track_paths.create_dir()?;

        if tracker.mark(EntityKind::Album, &album.uri) {
            self.notify(WriteOp::AlbumMetadata, &album_id);
            self.persister.persist_metadata(&album_paths.metadata, &album.raw)?;
            report.albums_written += 1;

            if self.config.download_parent_asset {
                if let Some(url) = album.cover_url() {
                    self.notify(WriteOp::AlbumImage, &album_id);
                    if self.persister.persist_asset(&album_paths.asset, Some(url)).await? {
                        report.album_images_written += 1;
                    }
                }
            }
        }

        if tracker.mark(EntityKind::Track, &track.uri) {
            self.notify(WriteOp::TrackMetadata, &track_id);
            self.persister.persist_metadata(&track_paths.metadata, &track.raw)?;
            report.tracks_written += 1;

            if self.config.download_child_asset {
                if let Some(url) = track.preview_url() {
                    self.notify(WriteOp::TrackPreview, &track_id);
                    if self.persister.persist_asset(&track_paths.asset, Some(url)).await? {
                        report.track_previews_written += 1;
                    }
                }
            }
        } else {
            debug!("Skipping already written track {}", track_id);
        }

        Ok(())
    }

    fn notify(&self, op: WriteOp, identifier: &str) {
        if self.config.verbose_logging {
            self.observer.on_write(op, identifier);
        }
    }
}
