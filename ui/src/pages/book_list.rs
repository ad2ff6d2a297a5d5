//! Books of one genre

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use pagepal_core::{BookListPage as BookList, BookListView};

use crate::api;
use crate::components::{BookCardView, Header, LoadingSpinner};

/// Grid of the books in `:genre_name`, refetched whenever the genre changes
#[component]
pub fn BookListPage() -> impl IntoView {
    let params = use_params_map();
    let page = RwSignal::new(BookList::new());

    Effect::new(move |_| {
        let genre = params.with(|p| p.get("genre_name").unwrap_or_default());
        let Some(query) = page.try_update(|p| p.enter(genre)) else {
            return;
        };

        spawn_local(async move {
            let result = api::list_books(&query.genre).await;
            // The page may have been left while the request was in flight.
            page.try_update(|p| p.resolve(query.ticket, result));
        });
    });

    view! {
        <Header />
        <div class="max-w-6xl mx-auto px-4 py-8">
            <a href="/" class="text-sm text-slate-400 hover:text-slate-200">"← All genres"</a>
            <h2 class="text-3xl font-bold mt-2 mb-8">{move || page.with(|p| p.title())}</h2>
            {move || page.with(|p| match p.view() {
                BookListView::Loading => view! {
                    <div class="flex items-center gap-3 text-slate-400">
                        <LoadingSpinner />
                        <p>{p.status_text()}</p>
                    </div>
                }.into_any(),
                BookListView::Failed(_) => view! {
                    <p class="text-red-400">{p.status_text()}</p>
                }.into_any(),
                BookListView::Empty => view! {
                    <p class="text-slate-400">{p.status_text()}</p>
                }.into_any(),
                BookListView::Books(books) => view! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                        {books
                            .iter()
                            .cloned()
                            .map(|book| view! { <BookCardView book=book /> })
                            .collect::<Vec<_>>()}
                    </div>
                }.into_any(),
            })}
        </div>
    }
}
