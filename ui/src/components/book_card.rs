//! Book card

use leptos::prelude::*;
use pagepal_core::{Book, BookCard};

/// One tile of the book grid, linking to the book's chat.
#[component]
pub fn BookCardView(book: Book) -> impl IntoView {
    let card = BookCard::new(&book);
    let href = card.route().path();
    let title = card.title().to_string();
    let byline = card.byline();
    let badge = card.genre_badge().map(str::to_string);
    let cover = card
        .cover_url()
        .map(|src| (src.to_string(), card.cover_alt()));

    view! {
        <a
            href=href
            class="block bg-slate-800 hover:bg-slate-700 rounded-xl overflow-hidden transition-colors"
        >
            {cover.map(|(src, alt)| view! {
                <img src=src alt=alt class="w-full h-48 object-cover" />
            })}
            <div class="p-4">
                <h3 class="font-semibold text-lg">{title}</h3>
                <p class="text-sm text-slate-400">{byline}</p>
                {badge.map(|genre| view! {
                    <span class="inline-block mt-2 px-2 py-0.5 text-xs rounded bg-slate-700 text-cyan-300">
                        {genre}
                    </span>
                })}
            </div>
        </a>
    }
}
