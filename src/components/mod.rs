//! UI Components
//!
//! Reusable Leptos components.

pub mod guard;
pub mod history;
pub mod loading;
pub mod toast;

pub use guard::RequireAuth;
pub use history::HistoryList;
pub use loading::InlineLoading;
pub use toast::Toast;
