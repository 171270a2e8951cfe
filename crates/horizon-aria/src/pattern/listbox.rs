//! Listbox pattern.
//!
//! # Keyboard
//!
//! | Key | Single-select | Multi-select |
//! |-----|---------------|--------------|
//! | Arrows, Home, End | move | move |
//! | Shift + Arrow | move | move and extend from the anchor |
//! | Shift + Home / End | move | move and select up to the new item |
//! | Space / Enter | select | toggle |
//! | Shift + Space / Enter | select | set the anchor range |
//! | Ctrl/Cmd + A | | select all, or deselect all |
//! | Printable characters | typeahead | typeahead |
//!
//! With [`SelectionFollow::Follow`], plain navigation also selects the new
//! active option (replacing the selection in multi-select mode; holding Ctrl
//! moves without selecting).
//!
//! # Contract Check
//!
//! In development mode, a single-select listbox whose host value holds more
//! than one entry fails every event with [`Error::SelectionContract`]. Outside
//! development mode the extra entries are tolerated.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use horizon_aria_core::logging::targets;
use horizon_aria_core::{Accessor, Error, LinkedProperty, Result};

use super::{Composite, Pattern, consume};
use crate::aria::{AriaAttributes, AriaRole};
use crate::config::ContainerConfig;
use crate::events::{Key, KeyPressEvent, KeyboardModifiers, PointerEvent, PointerTarget};
use crate::item::SelectableItem;
use crate::navigation::Direction;
use crate::selection::SelectionModel;
use crate::typeahead::Typeahead;
use crate::validation::ValidationReporter;

/// Whether keyboard navigation changes the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionFollow {
    /// Navigation only moves the active option.
    #[default]
    Explicit,
    /// Navigation selects the new active option.
    Follow,
}

/// Keyboard, pointer and typeahead handling for a listbox.
pub struct ListboxPattern<I: SelectableItem + 'static>
where
    I::Value: 'static,
{
    composite: Composite<I>,
    multiple: Accessor<bool>,
    follow: Accessor<SelectionFollow>,
    typeahead: Typeahead,
}

impl<I> ListboxPattern<I>
where
    I: SelectableItem + 'static,
    I::Value: Clone + PartialEq + Send + Sync + 'static,
{
    /// Create a listbox over a host selection list, compared with
    /// `PartialEq`.
    pub fn new(
        items: Accessor<Vec<I>>,
        selection: LinkedProperty<Vec<I::Value>>,
        config: ContainerConfig,
    ) -> Self {
        Self::with_selection(items, SelectionModel::new(selection), config)
    }
}

impl<I> ListboxPattern<I>
where
    I: SelectableItem + 'static,
    I::Value: Clone + Send + Sync + 'static,
{
    /// Create a listbox over a prepared selection model.
    pub fn with_selection(
        items: Accessor<Vec<I>>,
        selection: SelectionModel<I::Value>,
        config: ContainerConfig,
    ) -> Self {
        let multiple = Accessor::constant(false);
        Self {
            composite: Composite::new(items, selection.with_multiple(multiple.clone()), config),
            multiple,
            follow: Accessor::constant(SelectionFollow::default()),
            typeahead: Typeahead::new(),
        }
    }

    /// Set the multi-select accessor using builder pattern.
    pub fn with_multiple(mut self, multiple: impl Into<Accessor<bool>>) -> Self {
        self.multiple = multiple.into();
        self.composite
            .selection_mut()
            .set_multiple(self.multiple.clone());
        self
    }

    /// Set the selection-follows-focus accessor using builder pattern.
    pub fn with_selection_follow(mut self, follow: impl Into<Accessor<SelectionFollow>>) -> Self {
        self.follow = follow.into();
        self
    }

    /// Set the typeahead state using builder pattern.
    pub fn with_typeahead(mut self, typeahead: Typeahead) -> Self {
        self.typeahead = typeahead;
        self
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

    /// Whether multi-select is on.
    pub fn is_multiple(&self) -> bool {
        self.multiple.get()
    }

    /// The active option.
    pub fn active_index(&self) -> Option<usize> {
        self.composite.active_index()
    }

    /// Whether option `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.composite
            .selection()
            .is_selected(&self.composite.items(), index)
    }

    /// The tabindex to render on option `index`.
    pub fn item_tabindex(&self, index: usize) -> Option<i32> {
        let active = self.active_index();
        self.composite.focus().item_tabindex(index, active)
    }

    /// Attributes to render on option `index`.
    pub fn item_attributes(&self, index: usize) -> AriaAttributes {
        self.composite
            .item_attributes(AriaRole::Option, "aria-selected", index)
    }

    /// Feed a typeahead character typed at `now`. Returns `true` if an
    /// option matched.
    pub fn type_char(&mut self, ch: char, now: Instant) -> bool {
        let items = self.composite.items();
        let current = self.composite.active_in(&items);
        let skip_disabled = self.composite.config().skip_disabled.get();
        let Some(found) = self.typeahead.search(&items, current, ch, now, skip_disabled) else {
            return false;
        };
        self.composite.focus_mut().set_active(&items, found);
        if self.follows() && !self.is_multiple() {
            self.composite.selection_mut().trigger(&items, found);
        }
        true
    }

    fn follows(&self) -> bool {
        self.follow.get() == SelectionFollow::Follow
    }

    fn check_contract(&self) -> Result<()> {
        if !self.composite.reporter().is_dev_mode() || self.is_multiple() {
            return Ok(());
        }
        let selected = self.composite.selection().values().len();
        if selected > 1 {
            tracing::warn!(target: targets::VALIDATION, selected, "single-select listbox holds several values");
            return Err(Error::SelectionContract { selected });
        }
        Ok(())
    }

    fn navigate(&mut self, items: &[I], direction: Direction, modifiers: KeyboardModifiers) {
        let before = self.composite.active_in(items);
        let moved = self.composite.navigate(items, direction);
        let multiple = self.is_multiple();

        if multiple && modifiers.shift {
            let Some(to) = moved else {
                return;
            };
            let selection = self.composite.selection_mut();
            match direction {
                Direction::First | Direction::Last => {
                    let from = before.unwrap_or(to);
                    selection.trigger_range(items, from, to, true);
                }
                Direction::Next | Direction::Previous => {
                    let anchor = selection.anchor().or(before).unwrap_or(to);
                    selection.trigger_range(items, anchor, to, true);
                    selection.set_anchor(Some(anchor));
                }
            }
            return;
        }

        if !self.follows() || modifiers.control {
            return;
        }
        let Some(active) = moved else {
            return;
        };
        let selection = self.composite.selection_mut();
        if multiple {
            selection.select_only(items, active);
        } else {
            selection.trigger(items, active);
        }
    }

    fn activate(&mut self, items: &[I], modifiers: KeyboardModifiers) {
        let Some(active) = self.composite.active_in(items) else {
            return;
        };
        if self.is_multiple() && modifiers.shift {
            self.select_range_to(items, active);
        } else {
            self.composite.selection_mut().trigger(items, active);
        }
    }

    /// Set every option between the anchor and `index` to the opposite of
    /// `index`'s current state.
    fn select_range_to(&mut self, items: &[I], index: usize) {
        let selection = self.composite.selection_mut();
        let turn_on = !selection.is_selected(items, index);
        let anchor = selection.anchor().unwrap_or(index);
        selection.trigger_range(items, anchor, index, turn_on);
    }
}

impl<I> Pattern for ListboxPattern<I>
where
    I: SelectableItem + 'static,
    I::Value: Clone + Send + Sync + 'static,
{
    fn role(&self) -> AriaRole {
        AriaRole::Listbox
    }

    fn on_keydown(&mut self, event: &mut KeyPressEvent) -> Result<bool> {
        self.check_contract()?;
        if self.composite.is_disabled() {
            tracing::trace!(target: targets::PATTERN, key = ?event.key, "listbox disabled, key ignored");
            return Ok(false);
        }

        let items = self.composite.items();
        let modifiers = event.modifiers;

        if modifiers.primary() && event.key == Key::A {
            if !self.is_multiple() {
                return Ok(false);
            }
            self.composite.selection_mut().toggle_all(&items);
            return Ok(consume(&mut event.base, true));
        }
        if modifiers.alt {
            return Ok(false);
        }

        if let Some(direction) = self.composite.policy().resolve(event.key) {
            self.typeahead.reset();
            self.navigate(&items, direction, modifiers);
            return Ok(consume(&mut event.base, true));
        }

        if event.key.is_activation() && !modifiers.primary() {
            self.activate(&items, modifiers);
            return Ok(consume(&mut event.base, true));
        }

        if let Some(ch) = event.printable_char() {
            let matched = self.type_char(ch, Instant::now());
            return Ok(consume(&mut event.base, matched));
        }
        Ok(false)
    }

    fn on_pointerdown(&mut self, event: &mut PointerEvent) -> Result<bool> {
        self.check_contract()?;
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
        if self.is_multiple() && event.modifiers.shift {
            self.select_range_to(&items, target);
        } else {
            self.composite.selection_mut().trigger(&items, target);
        }
        Ok(consume(&mut event.base, true))
    }

    fn on_focus_in(&mut self) {
        self.composite.focus_in();
    }

    fn on_items_changed(&mut self) {
        self.typeahead.reset();
        self.composite.items_changed(self.role());
    }

    fn validate(&self) -> Vec<String> {
        self.composite.report(self.role(), &self.composite.items())
    }

    fn container_attributes(&self) -> AriaAttributes {
        let mut attrs = self.composite.container_attributes(self.role());
        attrs.set("aria-multiselectable", self.is_multiple());
        attrs
    }
}

static_assertions::assert_impl_all!(
    ListboxPattern<crate::item::OptionItem<String>>: Send, Sync
);
