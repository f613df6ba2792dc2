//! Login Page
//!
//! Collects credentials and opens a session.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::components::InlineLoading;
use crate::state::session::use_session;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (message, set_message) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Ignore re-entrant submits until the prior call settles
        if submitting.get() {
            return;
        }

        set_submitting.set(true);
        set_message.set(None);

        let email_value = email.get();
        let password_value = password.get();
        let session = session.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(token) => {
                    session.log_in(token);
                    navigate("/dashboard", Default::default());
                }
                Err(api::LoginError::InvalidCredentials) => {
                    set_message.set(Some("Invalid credentials".to_string()));
                }
                Err(api::LoginError::Network(detail)) => {
                    web_sys::console::error_1(&format!("Login failed: {}", detail).into());
                    set_message.set(Some("Something went wrong. Please try again.".to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-[80vh] flex items-center justify-center">
            <div class="bg-gray-800 rounded-xl p-8 w-full max-w-md">
                // Brand header
                <div class="text-center mb-6">
                    <div class="text-4xl mb-2">"🔁"</div>
                    <h1 class="text-2xl font-bold">"ToneShift AI"</h1>
                    <p class="text-sm text-gray-400 mt-1">"Professional Email Tone Rewriter"</p>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />

                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors flex items-center justify-center space-x-2"
                    >
                        {move || if submitting.get() {
                            view! {
                                <InlineLoading />
                                <span>"Signing in..."</span>
                            }.into_view()
                        } else {
                            view! {
                                <span>"Login"</span>
                            }.into_view()
                        }}
                    </button>
                </form>

                // Inline error message
                {move || {
                    message.get().map(|msg| view! {
                        <p class="text-red-400 text-sm text-center mt-4">{msg}</p>
                    })
                }}
            </div>
        </div>
    }
}
