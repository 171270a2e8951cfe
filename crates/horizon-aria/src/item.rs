//! Item capabilities required by the interaction patterns.
//!
//! Items are owned by the host: they come and go as its children mount and
//! unmount. A pattern only ever sees them through an [`Accessor`] that yields
//! the current list, and never mutates them.
//!
//! [`Accessor`]: horizon_aria_core::Accessor

use std::fmt;
use std::sync::Arc;

/// An item that can become the active element of a composite widget.
pub trait NavigableItem {
    /// Stable DOM-style identifier, used for `aria-activedescendant`.
    fn id(&self) -> &str;

    /// Whether the item is disabled.
    fn is_disabled(&self) -> bool;

    /// Move real input focus to the item's element.
    ///
    /// Only called in roving-tabindex mode.
    fn focus(&self) {}

    /// Text matched by typeahead, if the item takes part in it.
    fn search_term(&self) -> Option<String> {
        None
    }
}

/// An item carrying a value that can be selected.
pub trait SelectableItem: NavigableItem {
    /// The value type stored in the selection.
    type Value: Clone;

    /// The item's value.
    fn value(&self) -> Self::Value;
}

impl<T: NavigableItem + ?Sized> NavigableItem for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn is_disabled(&self) -> bool {
        (**self).is_disabled()
    }

    fn focus(&self) {
        (**self).focus()
    }

    fn search_term(&self) -> Option<String> {
        (**self).search_term()
    }
}

impl<T: SelectableItem + ?Sized> SelectableItem for Arc<T> {
    type Value = T::Value;

    fn value(&self) -> Self::Value {
        (**self).value()
    }
}

/// Callback invoked when an item should receive focus.
pub type FocusHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// A ready-made item for hosts that don't have their own item type.
///
/// # Example
///
/// ```
/// use horizon_aria::item::{OptionItem, SelectableItem};
///
/// let item = OptionItem::new("opt-apple", "apple").with_label("Apple");
/// assert_eq!(item.value(), "apple");
/// ```
#[derive(Clone)]
pub struct OptionItem<V> {
    id: String,
    value: V,
    disabled: bool,
    label: Option<String>,
    on_focus: Option<FocusHandler>,
}

impl<V: Clone> OptionItem<V> {
    /// Create an enabled item with an id and value.
    pub fn new(id: impl Into<String>, value: V) -> Self {
        Self {
            id: id.into(),
            value,
            disabled: false,
            label: None,
            on_focus: None,
        }
    }

    /// Set the disabled state using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the typeahead label using builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the focus callback using builder pattern.
    ///
    /// The callback receives the item id.
    pub fn with_focus_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_focus = Some(Arc::new(handler));
        self
    }

    /// Get the typeahead label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl<V: Clone> NavigableItem for OptionItem<V> {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn focus(&self) {
        if let Some(handler) = &self.on_focus {
            handler(&self.id);
        }
    }

    fn search_term(&self) -> Option<String> {
        self.label.clone()
    }
}

impl<V: Clone> SelectableItem for OptionItem<V> {
    type Value = V;

    fn value(&self) -> V {
        self.value.clone()
    }
}

impl<V: fmt::Debug> fmt::Debug for OptionItem<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionItem")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("disabled", &self.disabled)
            .field("label", &self.label)
            .finish()
    }
}

/// Index of the first enabled item.
pub fn first_enabled<I: NavigableItem>(items: &[I]) -> Option<usize> {
    items.iter().position(|item| !item.is_disabled())
}

/// Index of the last enabled item.
pub fn last_enabled<I: NavigableItem>(items: &[I]) -> Option<usize> {
    items.iter().rposition(|item| !item.is_disabled())
}

/// Whether any item is enabled.
pub fn has_enabled<I: NavigableItem>(items: &[I]) -> bool {
    items.iter().any(|item| !item.is_disabled())
}
