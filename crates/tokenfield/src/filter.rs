//! Content state machine of the filter variant.
//!
//! The filter's clear button and active look depend only on whether there
//! is something to clear:
//!
//! ```text
//!            first keystroke               PillAdded
//!   Empty ─────────────────────▶ HasText ──────────▶ HasPills
//!     ▲ ◀─────────────────────                           │
//!     │      text cleared                                │
//!     └──────────── last pill removed, text empty ───────┘
//! ```

use crate::targets;

/// What a filter input currently holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FilterContent {
    /// Nothing typed and no pills.
    #[default]
    Empty,
    /// Typed text and no pills.
    HasText,
    /// At least one pill, with or without text.
    HasPills,
}

impl FilterContent {
    /// Derive the state from its inputs.
    pub fn from_parts(text_empty: bool, pill_count: usize) -> Self {
        if pill_count > 0 {
            Self::HasPills
        } else if text_empty {
            Self::Empty
        } else {
            Self::HasText
        }
    }

    /// The clear button shows whenever there is something to clear.
    pub fn close_button_visible(&self) -> bool {
        *self != Self::Empty
    }

    /// A non-empty filter always renders with the active look.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::HasText | Self::HasPills)
    }
}

/// Content change reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEvent {
    /// The free text changed.
    TextChanged {
        /// Whether the text is now empty.
        empty: bool,
    },
    /// A pill was added.
    PillAdded,
    /// A pill was removed.
    PillRemoved,
}

/// Tracks the filter content across events.
#[derive(Debug, Clone)]
pub struct FilterTracker {
    text_empty: bool,
    pills: usize,
}

impl FilterTracker {
    /// An empty filter.
    pub fn new() -> Self {
        Self {
            text_empty: true,
            pills: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> FilterContent {
        FilterContent::from_parts(self.text_empty, self.pills)
    }

    /// Number of pills.
    pub fn pill_count(&self) -> usize {
        self.pills
    }

    /// Whether the free text is empty.
    pub fn text_empty(&self) -> bool {
        self.text_empty
    }

    /// Apply an event and return the new state.
    pub fn apply(&mut self, event: FilterEvent) -> FilterContent {
        let before = self.state();

        match event {
            FilterEvent::TextChanged { empty } => self.text_empty = empty,
            FilterEvent::PillAdded => self.pills += 1,
            FilterEvent::PillRemoved => {
                if self.pills == 0 {
                    tracing::debug!(target: targets::FILTER, "pill removed from empty filter");
                }
                self.pills = self.pills.saturating_sub(1);
            }
        }

        let after = self.state();
        if before != after {
            tracing::trace!(target: targets::FILTER, ?before, ?after, ?event, "filter content changed");
        }
        after
    }
}

impl Default for FilterTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trip() {
        let mut filter = FilterTracker::new();
        assert_eq!(filter.state(), FilterContent::Empty);
        assert!(!filter.state().close_button_visible());

        let state = filter.apply(FilterEvent::TextChanged { empty: false });
        assert_eq!(state, FilterContent::HasText);
        assert!(state.close_button_visible());
        assert!(state.is_active());

        let state = filter.apply(FilterEvent::TextChanged { empty: true });
        assert_eq!(state, FilterContent::Empty);
        assert!(!state.is_active());
    }

    #[test]
    fn pill_round_trip() {
        let mut filter = FilterTracker::new();
        assert_eq!(filter.apply(FilterEvent::PillAdded), FilterContent::HasPills);
        assert_eq!(filter.apply(FilterEvent::PillRemoved), FilterContent::Empty);
    }

    #[test]
    fn pills_dominate_text() {
        let mut filter = FilterTracker::new();
        filter.apply(FilterEvent::TextChanged { empty: false });
        assert_eq!(filter.apply(FilterEvent::PillAdded), FilterContent::HasPills);
        assert_eq!(
            filter.apply(FilterEvent::TextChanged { empty: true }),
            FilterContent::HasPills
        );
        filter.apply(FilterEvent::TextChanged { empty: false });
        // Removing the last pill with text left falls back to HasText
        assert_eq!(filter.apply(FilterEvent::PillRemoved), FilterContent::HasText);
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<parking_lot::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn transitions_log_under_filter_target() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            FilterTracker::new().apply(FilterEvent::PillAdded);
        });

        let output = String::from_utf8(captured.0.lock().clone()).unwrap();
        assert!(output.contains(targets::FILTER), "{output}");
        assert!(!output.contains(targets::RESOLVER), "{output}");
    }

    #[test]
    fn extra_removal_is_ignored() {
        let mut filter = FilterTracker::new();
        assert_eq!(filter.apply(FilterEvent::PillRemoved), FilterContent::Empty);
        assert_eq!(filter.pill_count(), 0);
    }
}
