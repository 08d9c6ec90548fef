//! Gallery page: toolbar, status notice, and the keyed card list.

use leptos::prelude::*;

use crate::components::breed_card::BreedCard;
use crate::components::toolbar::Toolbar;
use crate::render::{self, CardView};
use crate::state::gallery::GalleryState;

/// The single page of the application.
///
/// The list is keyed by the full `CardView`, so only cards whose projected
/// data changed are torn down and rebuilt.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();

    let view_model = Memo::new(move |_| gallery.with(render::project));
    let notice = move || view_model.with(|v| v.notice);
    let cards = move || view_model.with(|v| v.cards.clone());

    view! {
        <main class="gallery-page">
            <Toolbar/>
            {move || notice().map(|text| view! { <p class="gallery-page__notice">{text}</p> })}
            <div id="dogList" class="dog-list">
                <For
                    each=cards
                    key=|card: &CardView| card.clone()
                    children=|card: CardView| view! { <BreedCard card=card/> }
                />
            </div>
        </main>
    }
}
