//! Top bar with the search box and the dark-mode toggle.

use leptos::prelude::*;

use crate::controller::{self, GalleryIntent, UiIntent};
use crate::state::gallery::GalleryState;
use crate::state::ui::UiState;

#[component]
pub fn Toolbar() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let toggle_label = move || {
        if ui.with(|u| u.dark_mode) { "Light Mode" } else { "Dark Mode" }
    };

    view! {
        <header class="toolbar">
            <h1 class="toolbar__title">"Dog Breeds"</h1>
            <input
                id="searchInput"
                class="toolbar__search"
                type="search"
                placeholder="Search breeds..."
                prop:value=move || gallery.with(|g| g.query.clone())
                on:input=move |ev| {
                    controller::dispatch(gallery, GalleryIntent::Search(event_target_value(&ev)));
                }
            />
            <button
                id="toggleMode"
                class="btn toolbar__mode"
                on:click=move |_| controller::dispatch_ui(ui, UiIntent::ToggleDarkMode)
            >
                {toggle_label}
            </button>
        </header>
    }
}
