//! Active-item ownership and its focus presentation.
//!
//! [`FocusCoordinator`] decides which item of a composite widget is active
//! and how that is exposed to assistive technology:
//!
//! - **Roving tabindex**: the active item has `tabindex="0"`, every other
//!   item `-1`, and real input focus moves from item to item. When the whole
//!   container is disabled, the container becomes the only tab stop.
//! - **Active descendant**: the container keeps focus (`tabindex="0"`) and
//!   points at the active item through `aria-activedescendant`. Items carry
//!   no tabindex and real focus never moves.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --focus_in--> Idle --(key, pointer, item change)--> Idle
//! ```
//!
//! Until the first focus-in, the active item is the *default*: the selected
//! item if there is one, else the first enabled item. The default is
//! recomputed on every read, so item lists that change before first focus are
//! always reflected.

use horizon_aria_core::Signal;
use horizon_aria_core::logging::targets;

use crate::config::{ContainerConfig, FocusMode};
use crate::item::NavigableItem;
use crate::navigation::{self, Direction, NavigationPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusState {
    Uninitialized,
    Idle { active: Option<usize> },
}

/// Owns the active index of one composite widget.
pub struct FocusCoordinator {
    config: ContainerConfig,
    state: FocusState,

    /// Emitted when the active index changes.
    pub active_changed: Signal<Option<usize>>,
}

impl FocusCoordinator {
    /// Create a coordinator reading the given container configuration.
    pub fn new(config: ContainerConfig) -> Self {
        Self {
            config,
            state: FocusState::Uninitialized,
            active_changed: Signal::new(),
        }
    }

    /// The container configuration.
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// The current focus mode.
    pub fn focus_mode(&self) -> FocusMode {
        self.config.focus_mode.get()
    }

    /// Whether focus has landed inside the widget at least once.
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, FocusState::Idle { .. })
    }

    /// The default active item: the selected item when it is eligible, else
    /// the first enabled item.
    ///
    /// When no item is enabled the first item is used so that a roving
    /// widget keeps exactly one tab stop.
    pub fn default_active<I: NavigableItem>(
        &self,
        items: &[I],
        selected: Option<usize>,
    ) -> Option<usize> {
        let skip_disabled = self.config.skip_disabled.get();
        let selected = selected.filter(|&index| {
            items
                .get(index)
                .is_some_and(|item| !skip_disabled || !item.is_disabled())
        });

        selected
            .or_else(|| crate::item::first_enabled(items))
            .or_else(|| (!items.is_empty()).then_some(0))
    }

    /// The active index as seen right now.
    ///
    /// Before first focus this is [`default_active`](Self::default_active);
    /// afterwards it is the committed index, clamped into the current list.
    pub fn active_index<I: NavigableItem>(
        &self,
        items: &[I],
        selected: Option<usize>,
    ) -> Option<usize> {
        match self.state {
            FocusState::Uninitialized => self.default_active(items, selected),
            FocusState::Idle { active } => {
                let last = items.len().checked_sub(1)?;
                match active {
                    Some(index) => Some(index.min(last)),
                    None => self.default_active(items, selected),
                }
            }
        }
    }

    /// Run the default-state computation on first focus.
    ///
    /// Later calls do nothing.
    pub fn focus_in<I: NavigableItem>(&mut self, items: &[I], selected: Option<usize>) {
        if self.is_initialized() {
            return;
        }
        let active = self.default_active(items, selected);
        self.state = FocusState::Idle { active };
        tracing::trace!(target: targets::FOCUS, ?active, "default focus computed");
        self.active_changed.emit(active);
    }

    /// Make `index` the active item.
    ///
    /// In roving mode the item's element also receives real focus. Returns
    /// `true` if the active index changed.
    pub fn set_active<I: NavigableItem>(&mut self, items: &[I], index: usize) -> bool {
        let Some(item) = items.get(index) else {
            tracing::trace!(target: targets::FOCUS, index, len = items.len(), "active index out of range");
            return false;
        };

        let previous = match self.state {
            FocusState::Idle { active } => active,
            FocusState::Uninitialized => None,
        };
        self.state = FocusState::Idle {
            active: Some(index),
        };

        if self.focus_mode() == FocusMode::Roving {
            item.focus();
        }

        if previous == Some(index) {
            return false;
        }
        tracing::trace!(target: targets::FOCUS, from = ?previous, to = index, "active item changed");
        self.active_changed.emit(Some(index));
        true
    }

    /// Move the active item in `direction` under the current policy.
    ///
    /// Returns the new active index, or `None` if nothing moved.
    pub fn navigate<I: NavigableItem>(
        &mut self,
        items: &[I],
        selected: Option<usize>,
        direction: Direction,
    ) -> Option<usize> {
        let policy = NavigationPolicy::from_config(&self.config);
        let current = self.active_index(items, selected);
        let target = navigation::next_index(items, current, direction, &policy)?;
        if Some(target) == current && self.is_initialized() {
            return None;
        }
        self.set_active(items, target);
        Some(target)
    }

    /// Bring the committed active index back in line with a changed item
    /// list: clamp it into range and, under skip-disabled, move it off a
    /// disabled item.
    pub fn reconcile<I: NavigableItem>(&mut self, items: &[I]) {
        let FocusState::Idle { active } = self.state else {
            return;
        };

        let policy = NavigationPolicy::from_config(&self.config).with_wrap(false);
        let reconciled = match (items.len().checked_sub(1), active) {
            (None, _) => None,
            (Some(_), None) => navigation::first_eligible(items, &policy),
            (Some(last), Some(index)) => {
                let index = index.min(last);
                if policy.skip_disabled && items[index].is_disabled() {
                    navigation::next_index(items, Some(index), Direction::Next, &policy)
                } else {
                    Some(index)
                }
            }
        };

        if reconciled != active {
            self.state = FocusState::Idle { active: reconciled };
            tracing::trace!(target: targets::FOCUS, from = ?active, to = ?reconciled, "active item reconciled");
            self.active_changed.emit(reconciled);
        }
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// The tabindex to render on item `index`, or `None` when items carry no
    /// tabindex (active-descendant mode).
    pub fn item_tabindex(&self, index: usize, active: Option<usize>) -> Option<i32> {
        match self.focus_mode() {
            FocusMode::ActiveDescendant => None,
            FocusMode::Roving if self.config.disabled.get() => Some(-1),
            FocusMode::Roving if active == Some(index) => Some(0),
            FocusMode::Roving => Some(-1),
        }
    }

    /// The tabindex to render on the container.
    pub fn container_tabindex(&self) -> i32 {
        match self.focus_mode() {
            FocusMode::ActiveDescendant => 0,
            FocusMode::Roving if self.config.disabled.get() => 0,
            FocusMode::Roving => -1,
        }
    }

    /// The id for `aria-activedescendant`, in active-descendant mode only.
    pub fn active_descendant<'a, I: NavigableItem>(
        &self,
        items: &'a [I],
        active: Option<usize>,
    ) -> Option<&'a str> {
        if self.focus_mode() != FocusMode::ActiveDescendant {
            return None;
        }
        active.and_then(|index| items.get(index)).map(NavigableItem::id)
    }
}

impl std::fmt::Debug for FocusCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusCoordinator")
            .field("state", &self.state)
            .field("focus_mode", &self.focus_mode())
            .finish()
    }
}

static_assertions::assert_impl_all!(FocusCoordinator: Send, Sync);
