//! Route Guard Component
//!
//! Gates protected routes on the presence of a session token.

use leptos::*;
use leptos_router::Redirect;

use crate::state::session::use_session;

/// Renders its children only while a session token is present, otherwise
/// redirects to the login route.
///
/// The check tracks the session signal, so logging out (or a cleared token
/// after an auth failure) immediately bounces the user back to login.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        {move || {
            if session.is_authenticated() {
                children().into_view()
            } else {
                view! { <Redirect path="/" /> }.into_view()
            }
        }}
    }
}
