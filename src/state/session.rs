//! Session Context
//!
//! Holds the backend-issued session token. The token is mirrored to a
//! storage backend so it survives page reloads; it is the only durable
//! client state.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

/// localStorage key holding the session token.
pub const TOKEN_KEY: &str = "toneshift_token";

/// Storage backend for the session token.
///
/// Abstracted so components can be exercised in tests without a browser.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Token store backed by the browser's localStorage.
pub struct BrowserStore;

impl TokenStore for BrowserStore {
    fn load(&self) -> Option<String> {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
    }

    fn save(&self, token: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
    }

    fn clear(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-memory token store for tests.
#[derive(Default)]
pub struct MemoryStore {
    token: RefCell<Option<String>>,
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Session context provided to all components.
///
/// Every mutation goes through the store first so the signal and the
/// persisted token never disagree.
#[derive(Clone)]
pub struct Session {
    token: RwSignal<Option<String>>,
    store: Rc<dyn TokenStore>,
}

impl Session {
    /// Create a session seeded from whatever the store already holds.
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        let token = create_rw_signal(store.load());
        Self { token, store }
    }

    /// Persist a freshly issued token and mark the session live.
    pub fn log_in(&self, token: String) {
        self.store.save(&token);
        self.token.set(Some(token));
    }

    /// Drop the token, ending the session.
    pub fn log_out(&self) {
        self.store.clear();
        self.token.set(None);
    }

    /// Current token, if any. Reactive.
    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    /// Whether a usable token is present. Reactive.
    ///
    /// An empty stored string counts as no session.
    pub fn is_authenticated(&self) -> bool {
        self.token.with(|t| t.as_deref().is_some_and(|t| !t.is_empty()))
    }
}

/// Provide the browser-backed session to the component tree.
pub fn provide_session() {
    provide_context(Session::new(Rc::new(BrowserStore)));
}

/// Fetch the session from context.
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::default();
        assert_eq!(store.load(), None);

        store.save("abc123");
        assert_eq!(store.load(), Some("abc123".to_string()));

        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_session_login_persists_token() {
        let runtime = create_runtime();

        let store = Rc::new(MemoryStore::default());
        let session = Session::new(store.clone());
        assert!(!session.is_authenticated());

        session.log_in("abc123".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc123".to_string()));
        assert_eq!(store.load(), Some("abc123".to_string()));

        runtime.dispose();
    }

    #[test]
    fn test_empty_token_is_not_a_session() {
        let runtime = create_runtime();

        let store = Rc::new(MemoryStore::default());
        store.save("");

        let session = Session::new(store);
        assert!(!session.is_authenticated());

        runtime.dispose();
    }

    #[test]
    fn test_session_logout_clears_store() {
        let runtime = create_runtime();

        let store = Rc::new(MemoryStore::default());
        store.save("abc123");

        let session = Session::new(store.clone());
        assert!(session.is_authenticated());

        session.log_out();
        assert!(!session.is_authenticated());
        assert_eq!(store.load(), None);

        runtime.dispose();
    }
}
