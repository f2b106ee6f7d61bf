//! Common types shared across all models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Image with URL and optional dimensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// URL to the image.
    pub url: String,

    /// Height in pixels, when reported.
    #[serde(default)]
    pub height: Option<u32>,

    /// Width in pixels, when reported.
    #[serde(default)]
    pub width: Option<u32>,
}

impl Image {
    /// Create a new image without dimensions.
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// The kind of a mirrored entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Parent grouping (an album).
    Album,
    /// Leaf item owned by an album (a track).
    Track,
}

impl EntityKind {
    /// Extension of the binary asset stored next to the metadata file.
    pub fn asset_extension(&self) -> &'static str {
        match self {
            EntityKind::Album => "jpg",
            EntityKind::Track => "mp3",
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Album => "album",
            EntityKind::Track => "track",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
