//! State Management
//!
//! Session context and global reactive UI state.

pub mod global;
pub mod session;

pub use global::{provide_global_state, GlobalState, History, HistoryEntry, Tone};
pub use session::{provide_session, Session, TokenStore};
