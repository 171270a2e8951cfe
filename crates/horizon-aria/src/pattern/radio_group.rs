//! Radio group pattern.
//!
//! Selection follows focus: moving the active radio with the arrow keys,
//! Home or End also checks it. A read-only group lets the active radio move
//! but never changes the checked one. Space and Enter check the active radio.

use std::sync::Arc;

use horizon_aria_core::logging::targets;
use horizon_aria_core::{Accessor, LinkedProperty, Property, Result};

use super::{Composite, Pattern, consume};
use crate::aria::{AriaAttributes, AriaRole};
use crate::config::ContainerConfig;
use crate::events::{KeyPressEvent, PointerEvent, PointerTarget};
use crate::item::SelectableItem;
use crate::selection::SelectionModel;
use crate::validation::ValidationReporter;

/// Keyboard and pointer handling for a group of radio buttons.
pub struct RadioGroupPattern<I: SelectableItem + 'static>
where
    I::Value: 'static,
{
    composite: Composite<I>,
}

impl<I> RadioGroupPattern<I>
where
    I: SelectableItem + 'static,
    I::Value: Clone + PartialEq + Send + Sync + 'static,
{
    /// Create a radio group over an optional host value.
    ///
    /// The `Option<V>` value is exposed to the selection model as a list of
    /// zero or one entries.
    pub fn new(
        items: Accessor<Vec<I>>,
        value: Arc<Property<Option<I::Value>>>,
        config: ContainerConfig,
    ) -> Self {
        let selection = LinkedProperty::mapped(
            value,
            |value: &Option<I::Value>| value.iter().cloned().collect::<Vec<_>>(),
            |list: Vec<I::Value>| list.into_iter().next(),
        );
        Self::with_selection(items, SelectionModel::new(selection), config)
    }
}

impl<I> RadioGroupPattern<I>
where
    I: SelectableItem + 'static,
    I::Value: Clone + Send + Sync + 'static,
{
    /// Create a radio group over a prepared selection model, for hosts that
    /// need a custom equality function. The model is forced to single-select.
    pub fn with_selection(
        items: Accessor<Vec<I>>,
        selection: SelectionModel<I::Value>,
        config: ContainerConfig,
    ) -> Self {
        Self {
            composite: Composite::new(items, selection.with_multiple(false), config),
        }
    }

    /// Set the development-mode flag using builder pattern.
    pub fn with_dev_mode(mut self, dev_mode: impl Into<Accessor<bool>>) -> Self {
        self.composite.set_reporter(ValidationReporter::new(dev_mode));
        self
    }

    /// The shared composite state.
    pub fn composite(&self) -> &Composite<I> {
        &self.composite
    }

    /// The composite state, mutably, for hosts wiring signals.
    pub fn composite_mut(&mut self) -> &mut Composite<I> {
        &mut self.composite
    }

    /// The active radio.
    pub fn active_index(&self) -> Option<usize> {
        self.composite.active_index()
    }

    /// Whether the radio at `index` is checked.
    pub fn is_checked(&self, index: usize) -> bool {
        self.composite
            .selection()
            .is_selected(&self.composite.items(), index)
    }

    /// The tabindex to render on radio `index`.
    pub fn item_tabindex(&self, index: usize) -> Option<i32> {
        let active = self.active_index();
        self.composite.focus().item_tabindex(index, active)
    }

    /// Attributes to render on radio `index`.
    pub fn item_attributes(&self, index: usize) -> AriaAttributes {
        self.composite
            .item_attributes(AriaRole::Radio, "aria-checked", index)
    }

    fn check_active(&mut self, items: &[I]) {
        if self.composite.is_readonly() {
            return;
        }
        if let Some(active) = self.composite.active_in(items) {
            self.composite.selection_mut().trigger(items, active);
        }
    }
}

impl<I> Pattern for RadioGroupPattern<I>
where
    I: SelectableItem + 'static,
    I::Value: Clone + Send + Sync + 'static,
{
    fn role(&self) -> AriaRole {
        AriaRole::RadioGroup
    }

    fn on_keydown(&mut self, event: &mut KeyPressEvent) -> Result<bool> {
        if self.composite.is_disabled() {
            tracing::trace!(target: targets::PATTERN, key = ?event.key, "radio group disabled, key ignored");
            return Ok(false);
        }
        if event.modifiers.primary() || event.modifiers.alt {
            return Ok(false);
        }

        let items = self.composite.items();
        if let Some(direction) = self.composite.policy().resolve(event.key) {
            self.composite.navigate(&items, direction);
            self.check_active(&items);
            return Ok(consume(&mut event.base, true));
        }

        if event.key.is_activation() {
            self.check_active(&items);
            return Ok(consume(&mut event.base, true));
        }
        Ok(false)
    }

    fn on_pointerdown(&mut self, event: &mut PointerEvent) -> Result<bool> {
        let PointerTarget::Item(index) = event.target else {
            return Ok(false);
        };
        if !event.is_primary() {
            return Ok(false);
        }

        let items = self.composite.items();
        let Some(target) = self.composite.point_at(&items, index) else {
            return Ok(false);
        };
        self.composite.selection_mut().trigger(&items, target);
        Ok(consume(&mut event.base, true))
    }

    fn on_focus_in(&mut self) {
        self.composite.focus_in();
    }

    fn on_items_changed(&mut self) {
        self.composite.items_changed(self.role());
    }

    fn validate(&self) -> Vec<String> {
        self.composite.report(self.role(), &self.composite.items())
    }

    fn container_attributes(&self) -> AriaAttributes {
        self.composite.container_attributes(self.role())
    }
}

static_assertions::assert_impl_all!(
    RadioGroupPattern<crate::item::OptionItem<String>>: Send, Sync
);
