//! API Client
//!
//! HTTP communication with the ToneShift backend.

pub mod client;

pub use client::{login, rewrite, LoginError, RewriteError};
