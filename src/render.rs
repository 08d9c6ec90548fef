//! Pure projection from `GalleryState` to what the page shows.
//!
//! The projection is total and deterministic: the same state always yields
//! an equal `GalleryView`. Components key their card list on `CardView`
//! itself, so a card is rebuilt (and its old handlers dropped) exactly when
//! its projected data changes.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::state::breeds::{BreedId, BreedRecord};
use crate::state::gallery::{GalleryState, LoadStatus};

pub const NEW_IMAGE_LABEL: &str = "New Image";
pub const FETCHING_LABEL: &str = "Fetching...";
pub const RESET_LIKES_LABEL: &str = "Reset Likes";

pub const LOADING_MESSAGE: &str = "Loading breeds...";
pub const LOAD_FAILED_MESSAGE: &str = "Sorry, something went wrong!";
pub const NO_MATCHES_MESSAGE: &str = "No breeds match your search.";
pub const NO_BREEDS_MESSAGE: &str = "No breeds available.";

/// Everything one card displays.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CardView {
    pub id: BreedId,
    pub name: String,
    pub image: String,
    pub alt: String,
    pub likes: u32,
    pub error: Option<String>,
    pub refresh_label: &'static str,
    pub refresh_disabled: bool,
}

/// Whole-page projection: an optional notice plus the visible cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryView {
    pub notice: Option<&'static str>,
    pub cards: Vec<CardView>,
}

pub fn project(state: &GalleryState) -> GalleryView {
    match state.status {
        LoadStatus::Loading => GalleryView { notice: Some(LOADING_MESSAGE), cards: Vec::new() },
        LoadStatus::Failed => GalleryView { notice: Some(LOAD_FAILED_MESSAGE), cards: Vec::new() },
        LoadStatus::Ready => {
            let cards: Vec<CardView> = state
                .breeds
                .filter(&state.query)
                .map(|record| card_view(record, state.is_refreshing(record.id)))
                .collect();
            let notice = if state.breeds.is_empty() {
                Some(NO_BREEDS_MESSAGE)
            } else if cards.is_empty() {
                Some(NO_MATCHES_MESSAGE)
            } else {
                None
            };
            GalleryView { notice, cards }
        }
    }
}

pub fn card_view(record: &BreedRecord, refreshing: bool) -> CardView {
    CardView {
        id: record.id,
        name: record.name.clone(),
        image: record.image.clone(),
        alt: record.name.clone(),
        likes: record.likes,
        error: record.error.clone().filter(|e| !e.is_empty()),
        refresh_label: if refreshing { FETCHING_LABEL } else { NEW_IMAGE_LABEL },
        refresh_disabled: refreshing,
    }
}
