//! # spotish
//!
//! Mirror a Spotify saved-tracks library to local storage.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spotish::api::{build_client, HttpBlobFetcher, SpotifyApi};
//! use spotish::{Mirror, MirrorConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = build_client(None)?;
//!     let source = SpotifyApi::new(client.clone(), "access-token")?;
//!
//!     let config = MirrorConfig {
//!         download_parent_asset: true,
//!         ..MirrorConfig::new("tracks")
//!     };
//!     let mirror = Mirror::new(source, HttpBlobFetcher::new(client), config)?;
//!     let report = mirror.run().await?;
//!     println!("{} albums, {} tracks", report.albums_written, report.tracks_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Layout
//!
//! Every album gets a directory named after its identifier
//! (`"{total_tracks:02}:{uri}:{name}"`), holding the album record, the
//! optional cover and one sub-directory per track
//! (`"{track_number:02}:{uri}:{name}"`) with the track record and the
//! optional preview clip.
//!
//! ## Building Blocks
//!
//! - [`identifier`] - stable entity identifiers
//! - [`DedupTracker`] - per-run "already written" sets
//! - [`PathLayout`] - every path the mirror writes
//! - [`Persister`] - metadata and asset writes
//! - [`api`] - the [`PageSource`](api::PageSource) and
//!   [`BlobFetcher`](api::BlobFetcher) seams with their HTTP implementations

pub mod api;
pub mod config;
pub mod converters;
pub mod dedup;
pub mod error;
pub mod identifier;
pub mod layout;
mod mirror;
pub mod models;
pub mod persist;

// Main interface (recommended)
pub use mirror::{Mirror, MirrorObserver, MirrorReport, TracingObserver, WriteOp};

pub use config::MirrorConfig;
pub use dedup::DedupTracker;
pub use error::MirrorError;
pub use layout::{EntityPaths, PathLayout};
pub use models::{EntityKind, SavedAlbum, SavedTrack};
pub use persist::Persister;
