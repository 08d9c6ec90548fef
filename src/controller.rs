//! Interaction controller: user actions and fetch results as discrete intents.
//!
//! DESIGN
//! ======
//! Components never mutate state directly. They build a `GalleryIntent` (or
//! `UiIntent`) and hand it to `dispatch`, which runs the reducer inside the
//! signal update. The reducer's return value says whether anything changed;
//! no-op intents do not notify subscribers, so the view only re-renders after
//! a real mutation has completed.
//!
//! Async work (initial load, image refresh) runs on local tasks that finish
//! by dispatching a settle intent. The in-flight set in `GalleryState` is what
//! keeps a card from issuing a second refresh before the first one settles.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use crate::net::api::BreedApi;
use crate::net::types::FetchError;
use crate::services::gallery::{load_initial_breeds, refresh_image};
use crate::state::breeds::{BreedId, BreedRecord, BreedRepository};
use crate::state::gallery::{GalleryState, LoadStatus};
use crate::state::ui::UiState;

/// Shown on a card whose "new image" request failed.
pub const REFRESH_FAILED_MESSAGE: &str = "Failed to load new image";

/// Commands that mutate gallery state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GalleryIntent {
    /// The initial bulk load settled.
    Loaded(Result<Vec<BreedRecord>, FetchError>),
    /// Card body clicked.
    Like(BreedId),
    ResetLikes(BreedId),
    /// "New image" activated; refused while a request is already in flight.
    RefreshStarted(BreedId),
    /// A "new image" request settled.
    RefreshSettled { id: BreedId, result: Result<String, FetchError> },
    /// Search box changed.
    Search(String),
    HoverEnter(BreedId),
    HoverLeave(BreedId),
}

/// Commands that only affect presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiIntent {
    ToggleDarkMode,
}

/// Apply `intent` to `state`. Returns `true` if the view must re-render.
pub fn reduce(state: &mut GalleryState, intent: GalleryIntent) -> bool {
    match intent {
        GalleryIntent::Loaded(Ok(records)) => {
            state.breeds = BreedRepository::from_records(records);
            log::info!("showing {} breeds", state.breeds.len());
            state.status = LoadStatus::Ready;
            state.refreshing.clear();
            state.hovered = None;
            true
        }
        GalleryIntent::Loaded(Err(err)) => {
            log::error!("error fetching dog breeds: {err}");
            state.breeds = BreedRepository::default();
            state.status = LoadStatus::Failed;
            state.refreshing.clear();
            state.hovered = None;
            true
        }
        GalleryIntent::Like(id) => state.breeds.increment_likes(id),
        GalleryIntent::ResetLikes(id) => state.breeds.reset_likes(id),
        GalleryIntent::RefreshStarted(id) => begin_refresh(state, id).is_some(),
        GalleryIntent::RefreshSettled { id, result } => {
            state.refreshing.remove(&id);
            match result {
                Ok(url) => {
                    state.breeds.set_image(id, url);
                    state.breeds.clear_error(id);
                }
                Err(_) => {
                    state.breeds.set_error(id, REFRESH_FAILED_MESSAGE);
                }
            }
            true
        }
        GalleryIntent::Search(query) => {
            // A card filtered out of view never sees its mouseleave.
            if let Some(id) = state.hovered
                && !state.breeds.get(id).is_some_and(|r| r.matches(&query))
            {
                state.hovered = None;
            }
            state.query = query;
            true
        }
        GalleryIntent::HoverEnter(id) => {
            if state.is_hovered(id) || state.breeds.get(id).is_none() {
                return false;
            }
            state.hovered = Some(id);
            true
        }
        GalleryIntent::HoverLeave(id) => {
            if !state.is_hovered(id) {
                return false;
            }
            state.hovered = None;
            true
        }
    }
}

/// Apply a presentation intent. Returns `true` if anything changed.
///
/// The document itself is updated by an effect watching `UiState`.
pub fn reduce_ui(state: &mut UiState, intent: UiIntent) -> bool {
    match intent {
        UiIntent::ToggleDarkMode => {
            state.dark_mode = !state.dark_mode;
            true
        }
    }
}

/// Mark `id` as refreshing and return its breed name, or `None` if the record
/// is unknown or already has a request in flight.
pub fn begin_refresh(state: &mut GalleryState, id: BreedId) -> Option<String> {
    if state.is_refreshing(id) {
        return None;
    }
    let name = state.breeds.get(id)?.name.clone();
    state.refreshing.insert(id);
    Some(name)
}

/// Fetch a replacement image and wrap the outcome as a settle intent.
pub async fn settle_refresh<A: BreedApi>(api: &A, id: BreedId, name: &str) -> GalleryIntent {
    GalleryIntent::RefreshSettled { id, result: refresh_image(api, name).await }
}

/// Run the initial load and wrap the outcome as a `Loaded` intent.
pub async fn settle_load<A: BreedApi>(api: &A, limit: usize) -> GalleryIntent {
    GalleryIntent::Loaded(load_initial_breeds(api, limit).await)
}

/// Reduce `intent` inside the signal, notifying only on change.
pub fn dispatch(gallery: RwSignal<GalleryState>, intent: GalleryIntent) {
    gallery.maybe_update(|state| reduce(state, intent));
}

pub fn dispatch_ui(ui: RwSignal<UiState>, intent: UiIntent) {
    ui.maybe_update(|state| reduce_ui(state, intent));
}

/// Start the initial load on a local task.
pub fn load_gallery<A: BreedApi + 'static>(gallery: RwSignal<GalleryState>, api: A, limit: usize) {
    leptos::task::spawn_local(async move {
        let intent = settle_load(&api, limit).await;
        dispatch(gallery, intent);
    });
}

/// Dispatch `RefreshStarted` for `id` and return the breed name to fetch.
///
/// Returns `None` (without notifying) when the card is unknown or already has
/// a request in flight.
pub fn start_refresh(gallery: RwSignal<GalleryState>, id: BreedId) -> Option<String> {
    let mut started = false;
    gallery.maybe_update(|state| {
        started = reduce(state, GalleryIntent::RefreshStarted(id));
        started
    });
    if !started {
        return None;
    }
    gallery.with_untracked(|state| state.breeds.get(id).map(|r| r.name.clone()))
}

/// Handle a "new image" activation for card `id`.
///
/// Does nothing if a request for this card is already in flight.
pub fn request_new_image<A: BreedApi + 'static>(gallery: RwSignal<GalleryState>, api: A, id: BreedId) {
    let Some(name) = start_refresh(gallery, id) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let intent = settle_refresh(&api, id, &name).await;
        dispatch(gallery, intent);
    });
}
