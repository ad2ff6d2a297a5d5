//! PagePal browser UI
//!
//! Leptos front end over the `pagepal-core` view models: a genre grid, the
//! books of a genre, and a chat about one book.

pub mod api;
pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use pages::{book_list::BookListPage, chat::ChatPage, genres::GenrePage};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=pagepal_core::APP_NAME />
        <Router>
            <main class="min-h-screen bg-slate-900 text-slate-100">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=GenrePage />
                    <Route path=path!("/books/:genre_name") view=BookListPage />
                    <Route path=path!("/chat") view=ChatPage />
                    <Route path=path!("/chat/:book_id") view=ChatPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-500 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
                >
                    "Browse Genres"
                </a>
            </div>
        </div>
    }
}
