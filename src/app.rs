//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::GalleryConfig;
use crate::controller;
use crate::net::api::DogApiClient;
use crate::pages::gallery::GalleryPage;
use crate::state::{gallery::GalleryState, ui::UiState};
use crate::util::dark_mode;

/// Root application component.
///
/// Owns the gallery and UI state signals, provides them (and the API client)
/// to the component tree, mirrors the theme flag onto `<body>`, and starts the
/// initial breed load.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = DogApiClient::new(GalleryConfig::default());
    let gallery = RwSignal::new(GalleryState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(gallery);
    provide_context(ui);
    provide_context(api.clone());

    Effect::new(move || dark_mode::apply(ui.with(|u| u.dark_mode)));

    let limit = api.config().breed_limit;
    controller::load_gallery(gallery, api, limit);

    view! {
        <Title text="Dog Breed Gallery"/>
        <GalleryPage/>
    }
}
