//! Per-pointer sample history
//!
//! The cache is the authoritative record of every active contact. A track
//! exists from a pointer's "down" until its "up" and is only ever replaced
//! by a longer copy of itself or removed whole.

use crate::capture::input::types::{PointerEvent, PointerId};
use indexmap::IndexMap;
use std::sync::Arc;

/// Ordered, immutable history of one pointer
pub type PointerTrack = Arc<[PointerEvent]>;

/// Point-in-time view of every track, in first-contact order
pub type CacheSnapshot = IndexMap<PointerId, PointerTrack>;

#[derive(Debug, Clone, Default)]
pub struct PointerCache {
    tracks: IndexMap<PointerId, PointerTrack>,
}

impl PointerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a track seeded with two copies of the initiating event
    ///
    /// The seed pair guarantees a delta can be computed before any move.
    /// Replaces an existing track for the same id.
    pub fn begin(&mut self, id: PointerId, event: PointerEvent) {
        let seeded: PointerTrack = Arc::from(vec![event.clone(), event]);
        if let Some(previous) = self.tracks.insert(id.clone(), seeded) {
            tracing::warn!(
                "Pointer {} went down again without lifting; dropped {} samples",
                id,
                previous.len()
            );
        }
    }

    /// Append to an existing track
    ///
    /// Builds a new track value, so snapshots taken earlier keep their
    /// contents. Returns false (and changes nothing) for unknown ids.
    pub fn append(&mut self, id: &PointerId, event: PointerEvent) -> bool {
        let Some(track) = self.tracks.get_mut(id) else {
            tracing::trace!("Ignoring sample for untracked pointer {}", id);
            return false;
        };

        let mut extended = Vec::with_capacity(track.len() + 1);
        extended.extend_from_slice(&track[..]);
        extended.push(event);
        *track = extended.into();
        true
    }

    /// Remove a track whole, returning it if it existed
    pub fn end(&mut self, id: &PointerId) -> Option<PointerTrack> {
        self.tracks.shift_remove(id)
    }

    pub fn snapshot(&self) -> CacheSnapshot {
        self.tracks.clone()
    }

    pub fn get(&self, id: &PointerId) -> Option<&PointerTrack> {
        self.tracks.get(id)
    }

    pub fn contains(&self, id: &PointerId) -> bool {
        self.tracks.contains_key(id)
    }

    /// Iterate tracks in first-contact order
    pub fn iter(&self) -> impl Iterator<Item = (&PointerId, &PointerTrack)> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Drop every track, returning how many were held
    pub fn clear(&mut self) -> usize {
        let dropped = self.tracks.len();
        self.tracks.clear();
        dropped
    }
}
