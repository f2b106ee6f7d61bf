//! On-disk layout of the mirror.
//!
//! ```text
//! {root}/
//!   {album_id}/
//!     {album_id}.json
//!     {album_id}.jpg
//!     {track_id}/
//!       {track_id}.json
//!       {track_id}.mp3
//! ```
//!
//! Every path the pipeline touches is computed here, so an entity's
//! metadata file and its asset always share one stem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::EntityKind;

/// Directory, metadata file and asset file of one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityPaths {
    /// Directory holding the entity (and, for albums, its tracks).
    pub dir: PathBuf,
    /// `{dir}/{id}.json`
    pub metadata: PathBuf,
    /// `{dir}/{id}.jpg` for albums, `{dir}/{id}.mp3` for tracks.
    pub asset: PathBuf,
}

impl EntityPaths {
    fn new(dir: PathBuf, stem: &str, kind: EntityKind) -> Self {
        Self {
            metadata: dir.join(format!("{}.json", stem)),
            asset: dir.join(format!("{}.{}", stem, kind.asset_extension())),
            dir,
        }
    }

    /// Create the entity directory and any missing parents.
    ///
    /// Succeeds when the directory already exists.
    pub fn create_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }
}

/// Path computation rooted at the output directory.
#[derive(Debug, Clone)]
pub struct PathLayout {
    root: PathBuf,
}

impl PathLayout {
    /// Create a layout rooted at `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Output root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths for an album.
    pub fn album(&self, album_id: &str) -> EntityPaths {
        let stem = path_component(album_id);
        EntityPaths::new(self.root.join(&stem), &stem, EntityKind::Album)
    }

    /// Paths for a track nested under its album.
    pub fn track(&self, album_id: &str, track_id: &str) -> EntityPaths {
        let stem = path_component(track_id);
        let dir = self.album(album_id).dir.join(&stem);
        EntityPaths::new(dir, &stem, EntityKind::Track)
    }
}

/// Make an identifier usable as a single path component.
///
/// Identifiers are kept verbatim except for `/`, which would otherwise split
/// a name like "AC/DC" into nested directories.
fn path_component(identifier: &str) -> String {
    identifier.replace('/', "_")
}
