//! Chat page - conversation about one book

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use pagepal_core::pages::chat::BACK_LABEL;
use pagepal_core::ChatPage as Chat;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::api;
use crate::components::{ChatInput, ChatMessage, Header, TypingIndicator};

/// Chat about the book in `:book_id`
#[component]
pub fn ChatPage() -> impl IntoView {
    let params = use_params_map();
    let page = RwSignal::new(Chat::new());
    let input = RwSignal::new(String::new());
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    // Load the book on entry and whenever the id changes
    Effect::new(move |_| {
        let book_id = params.with(|p| p.get("book_id").unwrap_or_default());
        input.set(String::new());
        let Some(query) = page.try_update(|p| p.enter(&book_id)).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = api::get_book(&query.book_id).await;
            page.try_update(|p| p.resolve_book(query.ticket, result));
        });
    });

    // Auto-scroll to the newest message
    Effect::new(move |_| {
        page.with(|p| (p.transcript().len(), p.is_thinking()));
        if let Some(el) = messages_end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let send_message = move || {
        let text = input.get_untracked();
        let pending = page
            .try_update(|p| {
                p.set_input(text);
                p.begin_send()
            })
            .flatten();
        let Some(pending) = pending else {
            return;
        };
        input.set(String::new());

        spawn_local(async move {
            let result = api::chat(&pending.request).await.map(|r| r.answer);
            page.try_update(|p| p.finish_send(pending.ticket, result));
        });
    };

    let go_back = move |_| {
        let result = window().history().and_then(|history| history.back());
        if let Err(e) = result {
            tracing::warn!("Navigating back failed: {:?}", e);
        }
    };

    view! {
        <div class="h-screen flex flex-col">
            <Header />

            <div class="px-4 py-3 border-b border-slate-800">
                <button on:click=go_back class="text-sm text-slate-400 hover:text-slate-200">
                    "← " {BACK_LABEL}
                </button>
                <h2 class="text-2xl font-bold mt-1">{move || page.with(|p| p.heading())}</h2>
                {move || page.with(|p| p.byline()).map(|byline| view! {
                    <p class="text-sm text-slate-400">{byline}</p>
                })}
                {move || page.with(|p| p.error_banner()).map(|banner| view! {
                    <p class="mt-2 px-3 py-2 rounded bg-red-900/50 text-red-300">{banner}</p>
                })}
            </div>

            <div class="flex-1 overflow-y-auto px-4 py-6 space-y-6">
                {move || page.with(|p| {
                    p.transcript()
                        .iter()
                        .cloned()
                        .map(|message| view! { <ChatMessage message=message /> })
                        .collect::<Vec<_>>()
                })}

                {move || page.with(|p| p.thinking_text()).map(|text| view! {
                    <TypingIndicator text=text />
                })}

                // Scroll anchor
                <div node_ref=messages_end_ref></div>
            </div>

            <ChatInput
                value=input
                on_submit=send_message
                disabled=Signal::derive(move || page.with(|p| !p.can_edit()))
                placeholder=Signal::derive(move || page.with(|p| p.placeholder()))
            />
        </div>
    }
}
