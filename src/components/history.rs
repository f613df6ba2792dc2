//! History List Component
//!
//! Renders the session-only list of previous rewrites.

use leptos::*;

use crate::state::global::GlobalState;

/// List of completed rewrites, newest first. Hidden while empty.
#[component]
pub fn HistoryList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            let history = state.history.get();

            if history.is_empty() {
                view! {}.into_view()
            } else {
                view! {
                    <section class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-xl font-semibold mb-4">"Previous Rewrites"</h2>

                        <div class="space-y-3">
                            {history.entries().iter().cloned().map(|entry| view! {
                                <div class="bg-gray-700 rounded-lg p-4">
                                    <div class="flex items-center justify-between mb-2">
                                        <span class="text-sm font-medium text-primary-400">
                                            {entry.tone}
                                        </span>
                                        <span class="text-sm text-gray-400">{entry.timestamp}</span>
                                    </div>
                                    <p class="text-sm text-gray-400 mb-1">
                                        <span class="font-medium">"Original: "</span>
                                        {entry.original}
                                    </p>
                                    <p class="text-sm">
                                        <span class="font-medium">"Rewritten: "</span>
                                        {entry.rewritten}
                                    </p>
                                </div>
                            }).collect_view()}
                        </div>
                    </section>
                }.into_view()
            }
        }}
    }
}
