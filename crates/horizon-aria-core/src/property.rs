//! Property system for Horizon ARIA.
//!
//! Widgets hand their configuration to a pattern as *live* readers rather
//! than snapshots. Every query re-reads the source, so a pattern never holds
//! state it would have to keep in sync with the host by hand.
//!
//! # Types
//!
//! - **[`Property<T>`]**: host-owned storage with change detection
//! - **[`Accessor<T>`]**: a read-only live view (constant, closure, or property)
//! - **[`LinkedProperty<T>`]**: a two-way view, optionally mapped through an
//!   explicit `transform`/`reverse` pair
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_aria_core::{Accessor, LinkedProperty, Property};
//!
//! let disabled = Arc::new(Property::new(false));
//! let is_disabled = Accessor::from_property(disabled.clone());
//! assert!(!is_disabled.get());
//!
//! disabled.set(true);
//! assert!(is_disabled.get());
//!
//! // Expose an `Option<i32>` radio value as a selection list.
//! let value = Arc::new(Property::new(Some(3)));
//! let selection = LinkedProperty::mapped(
//!     value.clone(),
//!     |v: &Option<i32>| v.iter().copied().collect::<Vec<_>>(),
//!     |list: Vec<i32>| list.first().copied(),
//! );
//! assert_eq!(selection.get(), vec![3]);
//! selection.set(vec![7]);
//! assert_eq!(value.get(), Some(7));
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::logging::targets;

/// A reactive property that tracks changes.
///
/// `Property<T>` wraps a value and provides change detection. When `set()` is
/// called, it compares the new value with the current one and returns whether
/// the value actually changed.
///
/// # Example
///
/// ```
/// use horizon_aria_core::Property;
///
/// let prop = Property::new(42);
/// assert!(!prop.set(42));
/// assert!(prop.set(100));
/// assert_eq!(prop.get(), 100);
/// ```
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change detection.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

/// A read-only live view of a value.
///
/// The value is produced on every [`get`](Self::get) call; nothing is cached.
/// Cloning an accessor is cheap and shares the underlying reader.
pub struct Accessor<T> {
    read: Arc<dyn Fn() -> T + Send + Sync>,
}

impl<T: 'static> Accessor<T> {
    /// Create an accessor from a reader closure.
    pub fn new<F>(read: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            read: Arc::new(read),
        }
    }

    /// Read the current value.
    #[inline]
    pub fn get(&self) -> T {
        (self.read)()
    }

    /// Derive a new accessor by applying `f` to every read.
    pub fn map<U, F>(&self, f: F) -> Accessor<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let read = self.read.clone();
        Accessor::new(move || f(read()))
    }
}

impl<T: Clone + Send + Sync + 'static> Accessor<T> {
    /// An accessor that always yields `value`.
    pub fn constant(value: T) -> Self {
        Self::new(move || value.clone())
    }

    /// An accessor reading a shared [`Property`].
    pub fn from_property(property: Arc<Property<T>>) -> Self {
        Self::new(move || property.get())
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        Self {
            read: self.read.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> From<T> for Accessor<T> {
    fn from(value: T) -> Self {
        Self::constant(value)
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Accessor").field(&self.get()).finish()
    }
}

/// A two-way live view of a host value.
///
/// Reads go through `get`, writes through `set`. A linked property built with
/// [`mapped`](Self::mapped) converts between the host representation `S` and
/// the pattern representation `T` using an explicit pair of pure functions, so
/// the direction of every conversion stays visible at the construction site.
pub struct LinkedProperty<T> {
    read: Arc<dyn Fn() -> T + Send + Sync>,
    write: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T: 'static> LinkedProperty<T> {
    /// Create a linked property from explicit reader and writer closures.
    pub fn new<R, W>(read: R, write: W) -> Self
    where
        R: Fn() -> T + Send + Sync + 'static,
        W: Fn(T) + Send + Sync + 'static,
    {
        Self {
            read: Arc::new(read),
            write: Arc::new(write),
        }
    }

    /// Read the current value.
    #[inline]
    pub fn get(&self) -> T {
        (self.read)()
    }

    /// Write a new value through to the host.
    pub fn set(&self, value: T) {
        (self.write)(value);
    }

    /// A read-only accessor sharing this property's reader.
    pub fn accessor(&self) -> Accessor<T> {
        Accessor {
            read: self.read.clone(),
        }
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> LinkedProperty<T> {
    /// Link directly to a shared [`Property`].
    pub fn from_property(property: Arc<Property<T>>) -> Self {
        let reader = property.clone();
        Self::new(
            move || reader.get(),
            move |value| {
                if property.set(value) {
                    tracing::trace!(target: targets::PROPERTY, "linked property changed");
                }
            },
        )
    }

    /// Link to a property of a different representation.
    ///
    /// `transform` maps the host value into the pattern value on every read;
    /// `reverse` maps a pattern value back into the host value on every write.
    pub fn mapped<S, F, G>(source: Arc<Property<S>>, transform: F, reverse: G) -> Self
    where
        S: Clone + PartialEq + Send + Sync + 'static,
        F: Fn(&S) -> T + Send + Sync + 'static,
        G: Fn(T) -> S + Send + Sync + 'static,
    {
        let reader = source.clone();
        Self::new(
            move || reader.with(|value| transform(value)),
            move |value| {
                if source.set(reverse(value)) {
                    tracing::trace!(target: targets::PROPERTY, "mapped property changed");
                }
            },
        )
    }
}

impl<T> Clone for LinkedProperty<T> {
    fn clone(&self) -> Self {
        Self {
            read: self.read.clone(),
            write: self.write.clone(),
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for LinkedProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LinkedProperty").field(&self.get()).finish()
    }
}

static_assertions::assert_impl_all!(Property<i32>: Send, Sync);
static_assertions::assert_impl_all!(Accessor<bool>: Send, Sync);
static_assertions::assert_impl_all!(LinkedProperty<Vec<u8>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_property_set_detects_change() {
        let prop = Property::new(10);

        assert!(!prop.set(10));
        assert_eq!(prop.get(), 10);

        assert!(prop.set(20));
        assert_eq!(prop.get(), 20);
    }

    #[test]
    fn test_property_with_closure() {
        let prop = Property::new(vec![1, 2, 3]);
        let sum: i32 = prop.with(|v| v.iter().sum());
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_accessor_reads_live_value() {
        let prop = Arc::new(Property::new(1));
        let accessor = Accessor::from_property(prop.clone());
        assert_eq!(accessor.get(), 1);

        prop.set_silent(5);
        assert_eq!(accessor.get(), 5);
    }

    #[test]
    fn test_accessor_is_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let accessor = Accessor::new(move || calls_clone.fetch_add(1, Ordering::SeqCst));

        accessor.get();
        accessor.get();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_accessor_map() {
        let prop = Arc::new(Property::new(3));
        let doubled = Accessor::from_property(prop.clone()).map(|v| v * 2);
        assert_eq!(doubled.get(), 6);

        prop.set(4);
        assert_eq!(doubled.get(), 8);
    }

    #[test]
    fn test_accessor_from_constant() {
        let accessor: Accessor<&'static str> = "fixed".into();
        assert_eq!(accessor.get(), "fixed");
    }

    #[test]
    fn test_linked_property_round_trip() {
        let prop = Arc::new(Property::new(0.0_f64));
        let linked = LinkedProperty::from_property(prop.clone());

        linked.set(2.5);
        assert_eq!(prop.get(), 2.5);

        prop.set(7.0);
        assert_eq!(linked.get(), 7.0);
        assert_eq!(linked.accessor().get(), 7.0);
    }

    #[test]
    fn test_linked_property_mapped() {
        let value = Arc::new(Property::new(None::<char>));
        let selection = LinkedProperty::mapped(
            value.clone(),
            |v: &Option<char>| v.iter().copied().collect::<Vec<_>>(),
            |list: Vec<char>| list.first().copied(),
        );

        assert!(selection.get().is_empty());

        selection.set(vec!['b', 'c']);
        assert_eq!(value.get(), Some('b'));
        assert_eq!(selection.get(), vec!['b']);

        selection.set(Vec::new());
        assert_eq!(value.get(), None);
    }
}
