//! Single- and multi-select state for radio groups and listboxes.
//!
//! The selection is a list of item *values* owned by the host and reached
//! through a [`LinkedProperty`]. Membership is decided by an injectable
//! equality function that defaults to `PartialEq`.
//!
//! # Modes
//!
//! - **Single**: [`trigger`](SelectionModel::trigger) replaces the selection
//!   with the triggered item.
//! - **Multi**: `trigger` toggles the item, and
//!   [`trigger_range`](SelectionModel::trigger_range) sets a whole span.
//!
//! Every mutator is a silent no-op while the container is disabled or
//! read-only, or when the target item itself is disabled.
//!
//! # Stale Entries
//!
//! Values that no longer match any item are *orphans*. They stay in the host
//! value but never make an item report as selected, and are surfaced as a
//! [`Violation`].

use std::sync::Arc;

use horizon_aria_core::logging::targets;
use horizon_aria_core::{Accessor, LinkedProperty, Signal};

use crate::item::SelectableItem;
use crate::validation::Violation;

/// Equality used to match selection entries against item values.
pub type ValueEq<V> = Arc<dyn Fn(&V, &V) -> bool + Send + Sync>;

/// Selection state over host-owned values.
pub struct SelectionModel<V: 'static> {
    selection: LinkedProperty<Vec<V>>,
    multiple: Accessor<bool>,
    disabled: Accessor<bool>,
    readonly: Accessor<bool>,
    equals: ValueEq<V>,
    anchor: Option<usize>,

    /// Emitted with the new selection after every change.
    pub selection_changed: Signal<Vec<V>>,
}

impl<V: Clone + PartialEq + Send + Sync + 'static> SelectionModel<V> {
    /// Create a single-select model using `PartialEq` for membership.
    pub fn new(selection: LinkedProperty<Vec<V>>) -> Self {
        Self::with_equality(selection, |a: &V, b: &V| a == b)
    }
}

impl<V: Clone + 'static> SelectionModel<V> {
    /// Create a single-select model with a custom equality function.
    pub fn with_equality<F>(selection: LinkedProperty<Vec<V>>, equals: F) -> Self
    where
        F: Fn(&V, &V) -> bool + Send + Sync + 'static,
    {
        Self {
            selection,
            multiple: Accessor::constant(false),
            disabled: Accessor::constant(false),
            readonly: Accessor::constant(false),
            equals: Arc::new(equals),
            anchor: None,
            selection_changed: Signal::new(),
        }
    }

    /// Set the multi-select accessor using builder pattern.
    pub fn with_multiple(mut self, multiple: impl Into<Accessor<bool>>) -> Self {
        self.multiple = multiple.into();
        self
    }

    /// Replace the multi-select accessor.
    pub fn set_multiple(&mut self, multiple: Accessor<bool>) {
        self.multiple = multiple;
    }

    /// Set the disabled accessor using builder pattern.
    pub fn with_disabled(mut self, disabled: impl Into<Accessor<bool>>) -> Self {
        self.disabled = disabled.into();
        self
    }

    /// Set the readonly accessor using builder pattern.
    pub fn with_readonly(mut self, readonly: impl Into<Accessor<bool>>) -> Self {
        self.readonly = readonly.into();
        self
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Whether multi-select is on.
    pub fn is_multiple(&self) -> bool {
        self.multiple.get()
    }

    /// Whether mutators currently take effect.
    pub fn is_interactive(&self) -> bool {
        !self.disabled.get() && !self.readonly.get()
    }

    /// The raw selected values, orphans included.
    pub fn values(&self) -> Vec<V> {
        self.selection.get()
    }

    /// The index of the last triggered item, the origin of range selection.
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Set the range anchor.
    pub fn set_anchor(&mut self, anchor: Option<usize>) {
        self.anchor = anchor;
    }

    /// Whether `value` is in the selection.
    pub fn contains(&self, value: &V) -> bool {
        let selection = self.selection.get();
        self.contains_in(&selection, value)
    }

    /// Whether the item at `index` is selected.
    ///
    /// When several items share a value, only the first of them reports as
    /// selected.
    pub fn is_selected<I>(&self, items: &[I], index: usize) -> bool
    where
        I: SelectableItem<Value = V>,
    {
        let Some(item) = items.get(index) else {
            return false;
        };
        let value = item.value();
        self.contains(&value) && self.index_of(items, &value) == Some(index)
    }

    /// The first item index whose value is selected.
    pub fn first_selected_index<I>(&self, items: &[I]) -> Option<usize>
    where
        I: SelectableItem<Value = V>,
    {
        let selection = self.selection.get();
        selection
            .iter()
            .filter_map(|value| self.index_of(items, value))
            .min()
    }

    /// The index of the first item whose value equals `value`.
    pub fn index_of<I>(&self, items: &[I], value: &V) -> Option<usize>
    where
        I: SelectableItem<Value = V>,
    {
        items
            .iter()
            .position(|item| (self.equals)(&item.value(), value))
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Trigger the item at `index`: replace the selection in single mode,
    /// toggle membership in multi mode. Returns `true` if the selection
    /// changed.
    pub fn trigger<I>(&mut self, items: &[I], index: usize) -> bool
    where
        I: SelectableItem<Value = V>,
    {
        let Some(value) = self.target_value(items, index) else {
            return false;
        };
        self.anchor = Some(index);

        if !self.is_multiple() {
            return self.commit(vec![value]);
        }

        let mut selection = self.selection.get();
        if self.contains_in(&selection, &value) {
            selection.retain(|entry| !(self.equals)(entry, &value));
        } else {
            selection.push(value);
        }
        self.commit(selection)
    }

    /// Make the item at `index` the only selected item, in either mode.
    pub fn select_only<I>(&mut self, items: &[I], index: usize) -> bool
    where
        I: SelectableItem<Value = V>,
    {
        let Some(value) = self.target_value(items, index) else {
            return false;
        };
        self.anchor = Some(index);
        self.commit(vec![value])
    }

    /// Set membership of every enabled item between `from` and `to`
    /// (inclusive, in either order) to `turn_on`. Multi-select only.
    pub fn trigger_range<I>(&mut self, items: &[I], from: usize, to: usize, turn_on: bool) -> bool
    where
        I: SelectableItem<Value = V>,
    {
        if !self.is_multiple() || !self.is_interactive() {
            return false;
        }
        let Some(last) = items.len().checked_sub(1) else {
            return false;
        };
        let (start, end) = (from.min(to).min(last), from.max(to).min(last));

        let mut selection = self.selection.get();
        for item in items[start..=end].iter().filter(|item| !item.is_disabled()) {
            let value = item.value();
            let present = self.contains_in(&selection, &value);
            if turn_on && !present {
                selection.push(value);
            } else if !turn_on && present {
                selection.retain(|entry| !(self.equals)(entry, &value));
            }
        }
        tracing::trace!(target: targets::SELECTION, start, end, turn_on, "range triggered");
        self.commit(selection)
    }

    /// Select every enabled item. Disabled items keep their state.
    pub fn select_all<I>(&mut self, items: &[I]) -> bool
    where
        I: SelectableItem<Value = V>,
    {
        self.set_all_enabled(items, true)
    }

    /// Deselect every enabled item. Disabled items keep their state.
    pub fn deselect_all<I>(&mut self, items: &[I]) -> bool
    where
        I: SelectableItem<Value = V>,
    {
        self.set_all_enabled(items, false)
    }

    /// Deselect all enabled items if they are all selected, else select them.
    pub fn toggle_all<I>(&mut self, items: &[I]) -> bool
    where
        I: SelectableItem<Value = V>,
    {
        let selection = self.selection.get();
        let all_selected = items
            .iter()
            .filter(|item| !item.is_disabled())
            .all(|item| self.contains_in(&selection, &item.value()));
        self.set_all_enabled(items, !all_selected)
    }

    fn set_all_enabled<I>(&mut self, items: &[I], turn_on: bool) -> bool
    where
        I: SelectableItem<Value = V>,
    {
        if !self.is_multiple() {
            return false;
        }
        match items.len() {
            0 => false,
            len => self.trigger_range(items, 0, len - 1, turn_on),
        }
    }

    fn target_value<I>(&self, items: &[I], index: usize) -> Option<V>
    where
        I: SelectableItem<Value = V>,
    {
        if !self.is_interactive() {
            tracing::trace!(target: targets::SELECTION, index, "selection ignored: disabled or readonly");
            return None;
        }
        let item = items.get(index)?;
        if item.is_disabled() {
            tracing::trace!(target: targets::SELECTION, index, "selection ignored: item disabled");
            return None;
        }
        Some(item.value())
    }

    fn contains_in(&self, selection: &[V], value: &V) -> bool {
        selection.iter().any(|entry| (self.equals)(entry, value))
    }

    fn commit(&self, next: Vec<V>) -> bool {
        let current = self.selection.get();
        let unchanged = current.len() == next.len()
            && current
                .iter()
                .zip(&next)
                .all(|(a, b)| (self.equals)(a, b));
        if unchanged {
            return false;
        }
        tracing::trace!(
            target: targets::SELECTION,
            from = current.len(),
            to = next.len(),
            "selection changed"
        );
        self.selection.set(next.clone());
        self.selection_changed.emit(next);
        true
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Pairs of items whose values compare equal, as `(first, duplicate)`
    /// indices.
    pub fn duplicate_values<I>(&self, items: &[I]) -> Vec<(usize, usize)>
    where
        I: SelectableItem<Value = V>,
    {
        let values: Vec<V> = items.iter().map(SelectableItem::value).collect();
        let mut pairs = Vec::new();
        for (index, value) in values.iter().enumerate() {
            if let Some(first) = values[..index]
                .iter()
                .position(|earlier| (self.equals)(earlier, value))
            {
                pairs.push((first, index));
            }
        }
        pairs
    }

    /// Selected values that match no current item.
    pub fn orphaned_entries<I>(&self, items: &[I]) -> Vec<V>
    where
        I: SelectableItem<Value = V>,
    {
        self.selection
            .get()
            .into_iter()
            .filter(|value| self.index_of(items, value).is_none())
            .collect()
    }

    /// Structural problems with the selection against `items`.
    pub fn violations<I>(&self, items: &[I]) -> Vec<Violation>
    where
        I: SelectableItem<Value = V>,
    {
        let mut violations: Vec<Violation> = self
            .duplicate_values(items)
            .into_iter()
            .map(|(first, duplicate)| Violation::DuplicateValue {
                first: items[first].id().to_string(),
                duplicate: items[duplicate].id().to_string(),
            })
            .collect();

        let orphans = self.orphaned_entries(items).len();
        if orphans > 0 {
            violations.push(Violation::OrphanedSelection { count: orphans });
        }

        let count = self.selection.get().len();
        if !self.is_multiple() && count > 1 {
            violations.push(Violation::MultipleSelectionInSingleMode { count });
        }
        violations
    }
}

impl<V: Clone + std::fmt::Debug + 'static> std::fmt::Debug for SelectionModel<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionModel")
            .field("values", &self.selection.get())
            .field("multiple", &self.multiple.get())
            .field("anchor", &self.anchor)
            .finish()
    }
}

static_assertions::assert_impl_all!(SelectionModel<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::OptionItem;
    use horizon_aria_core::Property;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn items(disabled: &[usize], count: usize) -> Vec<OptionItem<u32>> {
        (0..count)
            .map(|i| {
                OptionItem::new(format!("opt-{i}"), i as u32 * 10)
                    .with_disabled(disabled.contains(&i))
            })
            .collect()
    }

    fn model(initial: Vec<u32>) -> (Arc<Property<Vec<u32>>>, SelectionModel<u32>) {
        let prop = Arc::new(Property::new(initial));
        let model = SelectionModel::new(LinkedProperty::from_property(prop.clone()));
        (prop, model)
    }

    #[test]
    fn test_single_trigger_replaces() {
        let list = items(&[], 3);
        let (prop, mut model) = model(Vec::new());

        assert!(model.trigger(&list, 1));
        assert_eq!(prop.get(), vec![10]);
        assert!(model.trigger(&list, 2));
        assert_eq!(prop.get(), vec![20]);
        assert!(!model.trigger(&list, 2));
        assert!(model.is_selected(&list, 2));
        assert!(!model.is_selected(&list, 1));
    }

    #[test]
    fn test_multi_trigger_toggles() {
        let list = items(&[], 3);
        let (prop, model) = model(Vec::new());
        let mut model = model.with_multiple(true);

        model.trigger(&list, 0);
        model.trigger(&list, 2);
        assert_eq!(prop.get(), vec![0, 20]);

        model.trigger(&list, 0);
        assert_eq!(prop.get(), vec![20]);
        assert_eq!(model.anchor(), Some(0));
    }

    #[test]
    fn test_guards() {
        let list = items(&[1], 3);
        let (prop, model) = model(Vec::new());
        let disabled = Arc::new(Property::new(false));
        let mut model = model.with_disabled(Accessor::from_property(disabled.clone()));

        assert!(!model.trigger(&list, 1));
        assert!(prop.get().is_empty());

        disabled.set(true);
        assert!(!model.trigger(&list, 0));
        assert!(prop.get().is_empty());

        disabled.set(false);
        let mut model = model.with_readonly(true);
        assert!(!model.trigger(&list, 0));
        assert!(!model.trigger(&list, 7));
        assert!(prop.get().is_empty());
    }

    #[test]
    fn test_range_is_inclusive_and_order_independent() {
        let list = items(&[2], 6);
        let (prop, model) = model(Vec::new());
        let mut model = model.with_multiple(true);

        assert!(model.trigger_range(&list, 4, 1, true));
        assert_eq!(prop.get(), vec![10, 30, 40]);

        assert!(model.trigger_range(&list, 3, 4, false));
        assert_eq!(prop.get(), vec![10]);
    }

    #[test]
    fn test_range_requires_multi() {
        let list = items(&[], 4);
        let (prop, mut model) = model(Vec::new());
        assert!(!model.trigger_range(&list, 0, 3, true));
        assert!(prop.get().is_empty());
    }

    #[test]
    fn test_toggle_all_keeps_disabled_state() {
        let list = items(&[1], 3);
        // The disabled item's value is selected and must stay selected.
        let (prop, model) = model(vec![10]);
        let mut model = model.with_multiple(true);

        assert!(model.toggle_all(&list));
        assert_eq!(prop.get(), vec![10, 0, 20]);

        assert!(model.toggle_all(&list));
        assert_eq!(prop.get(), vec![10]);
    }

    #[test]
    fn test_custom_equality() {
        let list: Vec<OptionItem<String>> = vec![
            OptionItem::new("a", "Apple".to_string()),
            OptionItem::new("b", "Banana".to_string()),
        ];
        let prop = Arc::new(Property::new(vec!["BANANA".to_string()]));
        let model = SelectionModel::with_equality(
            LinkedProperty::from_property(prop.clone()),
            |a: &String, b: &String| a.eq_ignore_ascii_case(b),
        );

        assert!(model.is_selected(&list, 1));
        assert_eq!(model.first_selected_index(&list), Some(1));
        assert!(model.orphaned_entries(&list).is_empty());
    }

    #[test]
    fn test_duplicates_use_first_match() {
        let list = vec![
            OptionItem::new("x", 1),
            OptionItem::new("y", 2),
            OptionItem::new("z", 1),
        ];
        let prop = Arc::new(Property::new(vec![1]));
        let model = SelectionModel::new(LinkedProperty::from_property(prop));

        assert_eq!(model.duplicate_values(&list), vec![(0, 2)]);
        assert!(model.is_selected(&list, 0));
        assert!(!model.is_selected(&list, 2));
        assert_eq!(
            model.violations(&list),
            vec![Violation::DuplicateValue {
                first: "x".into(),
                duplicate: "z".into()
            }]
        );
    }

    #[test]
    fn test_orphans_are_reported_and_ignored() {
        let list = items(&[], 2);
        let (_, model) = model(vec![10, 99]);

        assert_eq!(model.orphaned_entries(&list), vec![99]);
        assert_eq!(model.first_selected_index(&list), Some(1));
        let violations = model.violations(&list);
        assert!(violations.contains(&Violation::OrphanedSelection { count: 1 }));
        assert!(violations.contains(&Violation::MultipleSelectionInSingleMode { count: 2 }));
    }

    #[test]
    fn test_selection_changed_only_on_change() {
        let list = items(&[], 2);
        let (_, mut model) = model(Vec::new());
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        model.selection_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        model.trigger(&list, 0);
        model.trigger(&list, 0);
        model.select_only(&list, 1);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
