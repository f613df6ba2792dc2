//! Dashboard Page
//!
//! Main view: submit a message for tone rewriting, show the result and the
//! session's history of previous rewrites.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::components::{HistoryList, InlineLoading};
use crate::state::global::{GlobalState, HistoryEntry, Tone};
use crate::state::session::use_session;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_session();
    let navigate = use_navigate();

    let (input, set_input) = create_signal(String::new());
    let (tone, set_tone) = create_signal(Tone::default());
    let (output, set_output) = create_signal(None::<String>);
    let (rewriting, set_rewriting) = create_signal(false);

    let session_for_submit = session.clone();
    let navigate_for_submit = navigate.clone();
    let state_for_submit = state.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Ignore re-entrant submits until the prior call settles
        if rewriting.get() {
            return;
        }

        let content = input.get();
        if content.trim().is_empty() {
            state_for_submit.show_error("Please enter a message.");
            return;
        }

        set_rewriting.set(true);

        let selected_tone = tone.get();
        let session = session_for_submit.clone();
        let navigate = navigate_for_submit.clone();
        let state = state_for_submit.clone();

        spawn_local(async move {
            // The guard keeps this route token-only, but the token can still
            // be cleared between renders; treat a missing one as expired.
            let Some(token) = session.token() else {
                set_rewriting.set(false);
                navigate("/", Default::default());
                return;
            };

            match api::rewrite(&token, &content, selected_tone.as_str()).await {
                Ok(rewritten) => {
                    set_output.set(Some(rewritten.clone()));
                    state.record_rewrite(HistoryEntry {
                        original: content,
                        rewritten,
                        tone: selected_tone.as_str().to_string(),
                        timestamp: chrono::Local::now().format("%b %d, %H:%M").to_string(),
                    });
                    set_input.set(String::new());
                }
                Err(api::RewriteError::SessionExpired) => {
                    session.log_out();
                    navigate("/", Default::default());
                }
                Err(api::RewriteError::Failed(detail)) => {
                    web_sys::console::error_1(&format!("Rewrite failed: {}", detail).into());
                    state.show_error("Something went wrong while rewriting.");
                }
            }
            set_rewriting.set(false);
        });
    };

    let on_logout = move |_| {
        session.log_out();
        navigate("/", Default::default());
    };

    view! {
        <div class="max-w-3xl mx-auto space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"🔁 ToneShift"</h1>
                    <p class="text-gray-400 mt-1">
                        "Instantly transform your emails with AI-powered tone control."
                    </p>
                </div>

                <button
                    on:click=on_logout
                    class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg font-medium transition-colors"
                >
                    "Logout"
                </button>
            </div>

            // Rewrite form
            <section class="bg-gray-800 rounded-xl p-6">
                <form on:submit=on_submit class="space-y-4">
                    // Tone selector
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Tone"</label>
                        <select
                            on:change=move |ev| set_tone.set(Tone::from_label(&event_target_value(&ev)))
                            prop:value=move || tone.get().as_str().to_string()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            {Tone::ALL.into_iter().map(|t| view! {
                                <option value=t.as_str()>{t.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    // Message input
                    <textarea
                        placeholder="Enter your message here..."
                        prop:value=move || input.get()
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                        rows="4"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none
                               resize-none"
                    />

                    // Submit button
                    <button
                        type="submit"
                        disabled=move || rewriting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors flex items-center justify-center space-x-2"
                    >
                        {move || if rewriting.get() {
                            view! {
                                <InlineLoading />
                                <span>"Rewriting..."</span>
                            }.into_view()
                        } else {
                            view! {
                                <span>"Rewrite Message"</span>
                            }.into_view()
                        }}
                    </button>
                </form>
            </section>

            // Rewritten output, shown once a result arrives
            {move || {
                output.get().map(|text| view! {
                    <section class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-xl font-semibold mb-4">"Rewritten Message"</h2>
                        <div class="bg-gray-700 rounded-lg p-4 whitespace-pre-wrap text-left">
                            {text}
                        </div>
                    </section>
                })
            }}

            // Previous rewrites
            <HistoryList />
        </div>
    }
}
