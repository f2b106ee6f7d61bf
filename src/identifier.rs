//! Stable entity identifiers.
//!
//! A Spotify URI is unique but unreadable, a name is readable but not
//! unique. The identifier joins both behind a zero-padded count so that
//! directory listings sort sensibly and stay collision free.

/// Build the identifier `"{count:02}:{uri}:{name}"`.
///
/// Pure and infallible: inputs are not validated.
pub fn build(count: u32, uri: &str, name: &str) -> String {
    format!("{:02}:{}:{}", count, uri, name)
}
