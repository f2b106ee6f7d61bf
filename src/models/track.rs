//! Track models.

use serde_json::Value;

use super::album::SavedAlbum;
use crate::identifier;

/// A saved track together with the album that owns it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedTrack {
    /// Spotify URI, unique per track.
    pub uri: String,

    /// Track title. Not unique.
    pub name: String,

    /// Position of the track on its album.
    pub track_number: u32,

    /// URL of the 30 second preview clip, when Spotify offers one.
    pub preview_url: Option<String>,

    /// Owning album.
    pub album: SavedAlbum,

    /// The full track object as received (album included).
    pub raw: Value,
}

impl SavedTrack {
    /// URI of the owning album.
    pub fn album_uri(&self) -> &str {
        &self.album.uri
    }

    /// URL of the preview clip, ignoring empty strings.
    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Stable identifier used for dedup keys and on-disk names.
    pub fn identifier(&self) -> String {
        identifier::build(self.track_number, &self.uri, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_identifier_pads_number() {
        let track = SavedTrack {
            uri: "track:1".to_string(),
            name: "Demo Track".to_string(),
            track_number: 7,
            ..Default::default()
        };
        assert_eq!(track.identifier(), "07:track:1:Demo Track");
    }

    #[test]
    fn test_preview_url_empty_is_none() {
        let track = SavedTrack {
            preview_url: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(track.preview_url(), None);
    }

    #[test]
    fn test_album_uri() {
        let track = SavedTrack {
            album: SavedAlbum {
                uri: "album:9".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(track.album_uri(), "album:9");
    }
}
