//! Album models.

use serde_json::Value;

use super::common::Image;
use crate::identifier;

/// An album as embedded in a saved-track entry.
///
/// Albums are the parent entity: one album owns every track that points
/// back to its `uri`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedAlbum {
    /// Spotify URI, unique per album (e.g. `spotify:album:...`).
    pub uri: String,

    /// Album title. Not unique.
    pub name: String,

    /// Total number of tracks on the album, as reported by the API.
    pub total_tracks: u32,

    /// Cover images, largest first as the API returns them.
    pub images: Vec<Image>,

    /// The full album object as received.
    pub raw: Value,
}

impl SavedAlbum {
    /// URL of the cover art, if the album has any.
    pub fn cover_url(&self) -> Option<&str> {
        self.images
            .first()
            .map(|img| img.url.as_str())
            .filter(|url| !url.is_empty())
    }

    /// Stable identifier used for dedup keys and on-disk names.
    pub fn identifier(&self) -> String {
        identifier::build(self.total_tracks, &self.uri, &self.name)
    }
}
