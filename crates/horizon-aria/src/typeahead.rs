//! Typeahead search over item labels.
//!
//! Typed characters accumulate into a buffer that is cleared after a short
//! idle delay. The buffer is matched case-insensitively against the start of
//! each item's [`search_term`](crate::item::NavigableItem::search_term),
//! beginning after the active item and wrapping around.
//!
//! Typing the same character repeatedly cycles through the items starting
//! with that character instead of searching for "aaa".

use std::time::{Duration, Instant};

use horizon_aria_core::logging::targets;

use crate::item::NavigableItem;

/// Idle delay after which the search buffer resets.
pub const DEFAULT_TYPEAHEAD_DELAY: Duration = Duration::from_millis(500);

/// Incremental prefix search state.
#[derive(Debug, Clone)]
pub struct Typeahead {
    buffer: String,
    last_input: Option<Instant>,
    delay: Duration,
}

impl Default for Typeahead {
    fn default() -> Self {
        Self::new()
    }
}

impl Typeahead {
    /// Create a typeahead with the default delay.
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_TYPEAHEAD_DELAY)
    }

    /// Create a typeahead with a custom reset delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            buffer: String::new(),
            last_input: None,
            delay,
        }
    }

    /// The current search buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Clear the buffer.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.last_input = None;
    }

    /// Feed one character typed at `now` and return the matching index.
    ///
    /// Returns `None` when no item matches; the buffer is kept so the next
    /// character can still extend it.
    pub fn search<I: NavigableItem>(
        &mut self,
        items: &[I],
        current: Option<usize>,
        ch: char,
        now: Instant,
        skip_disabled: bool,
    ) -> Option<usize> {
        if self
            .last_input
            .is_some_and(|last| now.saturating_duration_since(last) > self.delay)
        {
            self.buffer.clear();
        }
        self.last_input = Some(now);
        self.buffer.extend(ch.to_lowercase());

        if items.is_empty() {
            return None;
        }

        let mut chars = self.buffer.chars();
        let first = chars.next();
        let repeating = self.buffer.chars().count() > 1 && chars.all(|c| Some(c) == first);

        // A fresh or repeated character looks past the current item; an
        // extended prefix may keep matching it.
        let (query, offset) = if repeating {
            (self.buffer[..first.map_or(0, char::len_utf8)].to_string(), 1)
        } else if self.buffer.chars().count() == 1 {
            (self.buffer.clone(), 1)
        } else {
            (self.buffer.clone(), 0)
        };

        let len = items.len();
        let start = current.map_or(0, |index| (index.min(len - 1) + offset) % len);
        let found = (0..len).map(|step| (start + step) % len).find(|&index| {
            let item = &items[index];
            if skip_disabled && item.is_disabled() {
                return false;
            }
            item.search_term()
                .is_some_and(|term| term.to_lowercase().starts_with(&query))
        });

        tracing::trace!(
            target: targets::NAVIGATION,
            buffer = %self.buffer,
            found = ?found,
            "typeahead"
        );
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::OptionItem;

    fn fruits() -> Vec<OptionItem<&'static str>> {
        ["Apple", "Banana", "Blueberry", "Cherry", "Blackberry"]
            .into_iter()
            .map(|label| OptionItem::new(label.to_lowercase(), label).with_label(label))
            .collect()
    }

    #[test]
    fn test_single_character_match() {
        let items = fruits();
        let mut typeahead = Typeahead::new();
        let now = Instant::now();
        assert_eq!(typeahead.search(&items, Some(0), 'c', now, true), Some(3));
    }

    #[test]
    fn test_case_insensitive_prefix() {
        let items = fruits();
        let mut typeahead = Typeahead::new();
        let now = Instant::now();
        assert_eq!(typeahead.search(&items, Some(0), 'B', now, true), Some(1));
        assert_eq!(typeahead.search(&items, Some(1), 'l', now, true), Some(2));
        assert_eq!(typeahead.search(&items, Some(2), 'a', now, true), Some(4));
        assert_eq!(typeahead.buffer(), "bla");
    }

    #[test]
    fn test_repeated_character_cycles() {
        let items = fruits();
        let mut typeahead = Typeahead::new();
        let now = Instant::now();
        assert_eq!(typeahead.search(&items, Some(0), 'b', now, true), Some(1));
        assert_eq!(typeahead.search(&items, Some(1), 'b', now, true), Some(2));
        assert_eq!(typeahead.search(&items, Some(2), 'b', now, true), Some(4));
        assert_eq!(typeahead.search(&items, Some(4), 'b', now, true), Some(1));
    }

    #[test]
    fn test_buffer_resets_after_delay() {
        let items = fruits();
        let mut typeahead = Typeahead::new();
        let start = Instant::now();
        typeahead.search(&items, Some(0), 'b', start, true);

        let later = start + DEFAULT_TYPEAHEAD_DELAY + Duration::from_millis(1);
        assert_eq!(typeahead.search(&items, Some(1), 'c', later, true), Some(3));
        assert_eq!(typeahead.buffer(), "c");
    }

    #[test]
    fn test_skips_disabled_items() {
        let mut items = fruits();
        items[1] = OptionItem::new("banana", "Banana")
            .with_label("Banana")
            .with_disabled(true);
        let mut typeahead = Typeahead::new();
        let now = Instant::now();
        assert_eq!(typeahead.search(&items, Some(0), 'b', now, true), Some(2));

        typeahead.reset();
        assert_eq!(typeahead.search(&items, Some(0), 'b', now, false), Some(1));
    }

    #[test]
    fn test_no_match() {
        let items = fruits();
        let mut typeahead = Typeahead::new();
        assert_eq!(typeahead.search(&items, Some(0), 'z', Instant::now(), true), None);
    }
}
