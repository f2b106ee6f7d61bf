//! Data models for saved-library entities.
//!
//! Two entity kinds exist: albums own tracks. Both are read-only views built
//! fresh from each page payload and carry their raw JSON record along.

pub mod album;
pub mod common;
pub mod track;

// Re-exports for convenience
pub use album::SavedAlbum;
pub use common::{EntityKind, Image};
pub use track::SavedTrack;
