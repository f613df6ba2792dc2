//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// Maximum number of history entries kept in memory.
pub const MAX_HISTORY: usize = 50;

/// Writing-style parameter sent with every rewrite request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Professional,
    Formal,
    Casual,
    Friendly,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Professional, Tone::Formal, Tone::Casual, Tone::Friendly];

    /// Wire form, also used as the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Formal => "Formal",
            Tone::Casual => "Casual",
            Tone::Friendly => "Friendly",
        }
    }

    /// Parse a select-box value. Unknown labels fall back to the default.
    pub fn from_label(label: &str) -> Tone {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str() == label)
            .unwrap_or_default()
    }
}

/// One completed rewrite, kept client-side only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub original: String,
    pub rewritten: String,
    pub tone: String,
    pub timestamp: String,
}

/// Ordered list of completed rewrites, newest first.
///
/// Bounded at [`MAX_HISTORY`] entries; not persisted across reloads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Add an entry at the front, evicting the oldest past the cap.
    pub fn prepend(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Completed rewrites, newest first
    pub history: RwSignal<History>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        history: create_rw_signal(History::default()),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Record one completed rewrite.
    pub fn record_rewrite(&self, entry: HistoryEntry) {
        self.history.update(|h| h.prepend(entry));
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry {
            original: format!("original {}", n),
            rewritten: format!("rewritten {}", n),
            tone: "Casual".to_string(),
            timestamp: "2026-01-01 12:00".to_string(),
        }
    }

    #[test]
    fn test_tone_default_is_professional() {
        assert_eq!(Tone::default(), Tone::Professional);
    }

    #[test]
    fn test_tone_label_round_trip() {
        for tone in Tone::ALL {
            assert_eq!(Tone::from_label(tone.as_str()), tone);
        }
    }

    #[test]
    fn test_tone_unknown_label_falls_back() {
        assert_eq!(Tone::from_label("Sarcastic"), Tone::Professional);
        assert_eq!(Tone::from_label(""), Tone::Professional);
    }

    #[test]
    fn test_history_is_newest_first() {
        let mut history = History::default();
        history.prepend(entry(1));
        history.prepend(entry(2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].original, "original 2");
        assert_eq!(history.entries()[1].original, "original 1");
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = History::default();
        for n in 0..MAX_HISTORY + 10 {
            history.prepend(entry(n));
        }

        assert_eq!(history.len(), MAX_HISTORY);
        // Newest survives, oldest were evicted
        assert_eq!(
            history.entries()[0].original,
            format!("original {}", MAX_HISTORY + 9)
        );
        assert_eq!(
            history.entries()[MAX_HISTORY - 1].original,
            format!("original {}", 10)
        );
    }
}
