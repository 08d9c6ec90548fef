//! A single breed card: image, name, like count, error text, and actions.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::controller::{self, GalleryIntent};
use crate::net::api::DogApiClient;
use crate::render::{CardView, RESET_LIKES_LABEL};
use crate::state::gallery::GalleryState;

/// Card for one breed.
///
/// Clicking the card body likes the breed; the two buttons stop propagation
/// so they never count as a like. Handlers belong to this card's owner and are
/// dropped with it when the list re-keys.
#[component]
pub fn BreedCard(card: CardView) -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let api = expect_context::<DogApiClient>();
    let id = card.id;

    let on_like = move |_| controller::dispatch(gallery, GalleryIntent::Like(id));
    let on_reset = move |ev: MouseEvent| {
        ev.stop_propagation();
        controller::dispatch(gallery, GalleryIntent::ResetLikes(id));
    };
    let on_new_image = move |ev: MouseEvent| {
        ev.stop_propagation();
        controller::request_new_image(gallery, api.clone(), id);
    };
    let highlighted = move || gallery.with(|g| g.is_hovered(id));

    view! {
        <div
            class="dog-card"
            class:highlighted=highlighted
            on:click=on_like
            on:mouseenter=move |_| controller::dispatch(gallery, GalleryIntent::HoverEnter(id))
            on:mouseleave=move |_| controller::dispatch(gallery, GalleryIntent::HoverLeave(id))
        >
            <img src=card.image alt=card.alt/>
            <h3>{card.name}</h3>
            <p>"Likes: " <span class="likes">{card.likes}</span></p>
            {card.error.map(|message| view! { <p class="error">{message}</p> })}
            <button class="new-image-btn" disabled=card.refresh_disabled on:click=on_new_image>
                {card.refresh_label}
            </button>
            <button class="reset-likes-btn" on:click=on_reset>
                {RESET_LIKES_LABEL}
            </button>
        </div>
    }
}
