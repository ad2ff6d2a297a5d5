//! Genre grid - landing page

use leptos::prelude::*;
use pagepal_core::genres::{self, GenreTile, GENRE_PAGE_TITLE};

use crate::components::Header;

/// Fixed grid of genre tiles
#[component]
pub fn GenrePage() -> impl IntoView {
    let tiles = genres::tiles();

    view! {
        <Header />
        <div class="max-w-5xl mx-auto px-4 py-8">
            <h2 class="text-3xl font-bold mb-8">{GENRE_PAGE_TITLE}</h2>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {tiles.into_iter().map(|tile| view! { <Tile tile=tile /> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn Tile(tile: GenreTile) -> impl IntoView {
    view! {
        <a
            href=tile.path()
            class=format!(
                "genre-tile {} flex flex-col items-center gap-3 p-6 rounded-xl bg-slate-800 hover:bg-slate-700 transition-colors",
                tile.color_class
            )
            data-icon=tile.icon.name()
        >
            <span class="text-4xl">{tile.icon.glyph()}</span>
            <span class="font-semibold">{tile.name}</span>
        </a>
    }
}
