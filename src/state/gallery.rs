//! Gallery state: load status, breed records, search query, and the
//! transient per-card interaction flags.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<GalleryState>` is provided via context at the app root.
//! Only the controller mutates it; the renderer only reads it.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::collections::HashSet;

use super::breeds::{BreedId, BreedRepository};

/// Lifecycle of the initial catalog load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Catalog and images are still being fetched.
    #[default]
    Loading,
    /// Records are available.
    Ready,
    /// The catalog request failed; no records will be shown.
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    pub status: LoadStatus,
    pub breeds: BreedRepository,
    /// Search text exactly as typed.
    pub query: String,
    /// Records with a "new image" request in flight.
    pub refreshing: HashSet<BreedId>,
    /// Card currently under the pointer.
    pub hovered: Option<BreedId>,
}

impl GalleryState {
    pub fn is_refreshing(&self, id: BreedId) -> bool {
        self.refreshing.contains(&id)
    }

    pub fn is_hovered(&self, id: BreedId) -> bool {
        self.hovered == Some(id)
    }
}
