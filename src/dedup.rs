//! Per-run dedup state.

use std::collections::HashSet;

use crate::models::EntityKind;

/// Remembers which entity URIs this run has already written.
///
/// One set per entity kind. Sets only grow, and the tracker is dropped with
/// the run that created it; nothing is persisted between runs.
#[derive(Debug, Default)]
pub struct DedupTracker {
    albums: HashSet<String>,
    tracks: HashSet<String>,
}

impl DedupTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `uri` of the given kind was already marked.
    pub fn seen(&self, kind: EntityKind, uri: &str) -> bool {
        self.set(kind).contains(uri)
    }

    /// Mark `uri` as written. Returns `true` on first sight.
    pub fn mark(&mut self, kind: EntityKind, uri: &str) -> bool {
        let set = match kind {
            EntityKind::Album => &mut self.albums,
            EntityKind::Track => &mut self.tracks,
        };
        if set.contains(uri) {
            return false;
        }
        set.insert(uri.to_string())
    }

    /// Number of distinct URIs marked for a kind.
    pub fn len(&self, kind: EntityKind) -> usize {
        self.set(kind).len()
    }

    /// Whether nothing of the given kind has been marked yet.
    pub fn is_empty(&self, kind: EntityKind) -> bool {
        self.set(kind).is_empty()
    }

    fn set(&self, kind: EntityKind) -> &HashSet<String> {
        match kind {
            EntityKind::Album => &self.albums,
            EntityKind::Track => &self.tracks,
        }
    }
}
