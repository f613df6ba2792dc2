//! ToneShift
//!
//! AI-powered email tone rewriter built with Leptos (WASM).
//!
//! # Features
//!
//! - Email/password login against the ToneShift backend
//! - Tone-controlled message rewriting
//! - Session-only history of previous rewrites
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the ToneShift API over HTTP; the session token is
//! the only state kept across reloads.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
