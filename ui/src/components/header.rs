//! Header component

use leptos::prelude::*;

/// Page header with the app name and a home link
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header h-16 sticky top-0 z-40 bg-slate-900/90 border-b border-slate-800">
            <div class="h-full max-w-7xl mx-auto px-4 flex items-center justify-between">
                <a href="/" class="hover:opacity-80 transition-opacity">
                    <h1 class="text-xl font-bold">"📚 " {pagepal_core::APP_NAME}</h1>
                </a>
                <nav class="flex items-center gap-2">
                    <a href="/" class="btn btn-ghost">"Genres"</a>
                </nav>
            </div>
        </header>
    }
}
