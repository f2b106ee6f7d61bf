//! JSON to model converters.
//!
//! Turns raw saved-tracks page payloads into typed models. Only the fields
//! the pipeline needs are read; everything else travels along untouched in
//! the `raw` record of each model. A missing required field is an error,
//! never silently defaulted. Asset fields (`images`, `preview_url`) are
//! optional: absent means the entity has no asset.

use serde_json::Value;

use crate::error::{MirrorError, Result};
use crate::models::{Image, SavedAlbum, SavedTrack};

/// Get a required object field.
fn get_object<'a>(json: &'a Value, key: &str, context: &str) -> Result<&'a Value> {
    json.get(key)
        .filter(|v| v.is_object())
        .ok_or_else(|| MirrorError::MalformedEntity(format!("{} has no `{}` object", context, key)))
}

/// Get a required string field.
fn get_str(json: &Value, key: &str, context: &str) -> Result<String> {
    json.get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| MirrorError::MalformedEntity(format!("{} has no `{}` string", context, key)))
}

/// Get a required unsigned integer field.
fn get_u32(json: &Value, key: &str, context: &str) -> Result<u32> {
    json.get(key)
        .and_then(|v| v.as_u64())
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| MirrorError::MalformedEntity(format!("{} has no `{}` number", context, key)))
}

/// Get an optional, nullable string field.
fn get_opt_str(json: &Value, key: &str) -> Option<String> {
    json.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}

/// Extract images from an `images` array. Entries without a URL are skipped.
pub fn extract_images(json: &Value) -> Vec<Image> {
    json.get("images")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|img| {
                    let url = img.get("url").and_then(|u| u.as_str())?;
                    Some(Image {
                        url: url.to_string(),
                        height: img.get("height").and_then(|h| h.as_u64()).map(|h| h as u32),
                        width: img.get("width").and_then(|w| w.as_u64()).map(|w| w as u32),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Parse an album object.
pub fn parse_album(json: &Value) -> Result<SavedAlbum> {
    Ok(SavedAlbum {
        uri: get_str(json, "uri", "album")?,
        name: get_str(json, "name", "album")?,
        total_tracks: get_u32(json, "total_tracks", "album")?,
        images: extract_images(json),
        raw: json.clone(),
    })
}

/// Parse a track object with its embedded album.
pub fn parse_track(json: &Value) -> Result<SavedTrack> {
    let album = parse_album(get_object(json, "album", "track")?)?;

    Ok(SavedTrack {
        uri: get_str(json, "uri", "track")?,
        name: get_str(json, "name", "track")?,
        track_number: get_u32(json, "track_number", "track")?,
        preview_url: get_opt_str(json, "preview_url"),
        album,
        raw: json.clone(),
    })
}

/// Borrow the `items` array of a saved-tracks page.
///
/// An empty array marks the end of the listing.
pub fn page_items(json: &Value) -> Result<&Vec<Value>> {
    json.get("items")
        .and_then(|v| v.as_array())
        .ok_or_else(|| MirrorError::MalformedEntity("page has no `items` array".to_string()))
}

/// Parse one entry of a saved-tracks page (`{"added_at": .., "track": {..}}`).
pub fn parse_saved_item(json: &Value) -> Result<SavedTrack> {
    parse_track(get_object(json, "track", "saved item")?)
}

/// Parse one page of the saved-tracks listing, in listing order.
pub fn parse_saved_tracks_page(json: &Value) -> Result<Vec<SavedTrack>> {
    page_items(json)?.iter().map(parse_saved_item).collect()
}
