//! Chat input component

use leptos::prelude::*;

/// Chat textarea with a send button
#[component]
pub fn ChatInput(
    /// Current input value
    value: RwSignal<String>,
    /// Called when user submits
    on_submit: impl Fn() + 'static + Clone,
    /// Whether typing is blocked
    #[prop(into)]
    disabled: Signal<bool>,
    /// Placeholder text
    #[prop(into)]
    placeholder: Signal<String>,
) -> impl IntoView {
    let on_input = move |ev: web_sys::Event| value.set(event_target_value(&ev));

    // Enter submits, Shift+Enter inserts a newline
    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                on_submit();
            }
        }
    };

    let on_button_click = move |_| on_submit();
    let is_empty = Signal::derive(move || value.get().trim().is_empty());

    view! {
        <div class="flex items-end gap-3 p-4 bg-slate-800/50 border-t border-slate-700">
            <textarea
                prop:value=move || value.get()
                on:input=on_input
                on:keydown=on_keydown
                placeholder=move || placeholder.get()
                disabled=move || disabled.get()
                rows="2"
                class="flex-1 px-4 py-3 bg-slate-900 border border-slate-700 rounded-xl resize-none
                       text-slate-100 placeholder-slate-500
                       focus:outline-none focus:ring-2 focus:ring-blue-500
                       disabled:opacity-50 disabled:cursor-not-allowed"
                style="max-height: 200px;"
            ></textarea>
            <button
                on:click=on_button_click
                disabled=move || disabled.get() || is_empty.get()
                class="px-4 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-slate-700
                       disabled:cursor-not-allowed rounded-xl transition-colors"
            >
                "Send"
            </button>
        </div>
    }
}
