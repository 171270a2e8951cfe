//! ARIA roles and attribute sets rendered by the host.

use std::fmt;

/// The ARIA role of a composite widget or one of its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AriaRole {
    /// A numeric input stepped with the keyboard.
    Spinbutton,

    /// A group of mutually exclusive radio buttons.
    RadioGroup,

    /// A radio button inside a radio group.
    Radio,

    /// A list of selectable options.
    Listbox,

    /// An option inside a listbox.
    Option,
}

impl AriaRole {
    /// The `role` attribute token.
    pub fn as_str(self) -> &'static str {
        match self {
            AriaRole::Spinbutton => "spinbutton",
            AriaRole::RadioGroup => "radiogroup",
            AriaRole::Radio => "radio",
            AriaRole::Listbox => "listbox",
            AriaRole::Option => "option",
        }
    }

    /// Whether this role is the container of a composite widget.
    pub fn is_container(self) -> bool {
        matches!(self, AriaRole::RadioGroup | AriaRole::Listbox)
    }
}

impl fmt::Display for AriaRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered set of attributes for one element.
///
/// Attributes keep the order they were first set in. Setting an attribute
/// again replaces its value in place. Absent attributes are simply not
/// present; nothing is rendered as an empty string.
///
/// # Example
///
/// ```
/// use horizon_aria::aria::{AriaAttributes, AriaRole};
///
/// let mut attrs = AriaAttributes::with_role(AriaRole::Spinbutton);
/// attrs.set("aria-valuenow", 5);
/// attrs.set_opt("aria-valuemin", None::<f64>);
///
/// assert_eq!(attrs.get("role"), Some("spinbutton"));
/// assert_eq!(attrs.get("aria-valuenow"), Some("5"));
/// assert!(!attrs.contains("aria-valuemin"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AriaAttributes {
    entries: Vec<(&'static str, String)>,
}

impl AriaAttributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an attribute set starting with `role`.
    pub fn with_role(role: AriaRole) -> Self {
        let mut attrs = Self::new();
        attrs.set("role", role);
        attrs
    }

    /// Set an attribute.
    pub fn set(&mut self, name: &'static str, value: impl fmt::Display) {
        let value = value.to_string();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Set an attribute when `value` is present; remove it otherwise.
    pub fn set_opt<T: fmt::Display>(&mut self, name: &'static str, value: Option<T>) {
        match value {
            Some(value) => self.set(name, value),
            None => self.remove(name),
        }
    }

    /// Set a boolean attribute only when it is `true`.
    pub fn set_flag(&mut self, name: &'static str, on: bool) {
        if on {
            self.set(name, true);
        } else {
            self.remove(name);
        }
    }

    /// Remove an attribute.
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|(existing, _)| *existing != name);
    }

    /// Get an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether an attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
