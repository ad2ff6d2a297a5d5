//! Chat message component

use leptos::prelude::*;
use pagepal_core::Message;

/// Render a single chat message
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let is_user = message.is_user();

    view! {
        <div class=format!(
            "flex items-start gap-3 message-appear {}",
            if is_user { "flex-row-reverse" } else { "" }
        )>
            <div class=format!(
                "w-8 h-8 rounded-full flex items-center justify-center text-white text-sm shrink-0 {}",
                if is_user { "bg-blue-500" } else { "bg-violet-600" }
            )>
                {if is_user { "👤" } else { "📖" }}
            </div>

            <div class=format!(
                "px-4 py-3 rounded-2xl max-w-[80%] whitespace-pre-wrap break-words {}",
                if is_user {
                    "bg-blue-600 text-white rounded-tr-sm"
                } else {
                    "bg-slate-800 text-slate-100 rounded-tl-sm"
                }
            )>
                {message.text}
            </div>
        </div>
    }
}
