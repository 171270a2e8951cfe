//! State shared by item-based patterns.

use horizon_aria_core::{Accessor, aria_debug};

use crate::aria::{AriaAttributes, AriaRole};
use crate::config::ContainerConfig;
use crate::focus::FocusCoordinator;
use crate::item::SelectableItem;
use crate::navigation::{self, Direction, NavigationPolicy};
use crate::selection::SelectionModel;
use crate::validation::{self, ValidationReporter, Violation};

/// Items, configuration, focus and selection of one composite widget.
///
/// Radio groups and listboxes differ only in how input maps onto these
/// parts, so both patterns are thin layers over a `Composite`.
pub struct Composite<I: SelectableItem + 'static>
where
    I::Value: 'static,
{
    items: Accessor<Vec<I>>,
    config: ContainerConfig,
    focus: FocusCoordinator,
    selection: SelectionModel<I::Value>,
    reporter: ValidationReporter,
}

impl<I> Composite<I>
where
    I: SelectableItem + 'static,
    I::Value: Clone + Send + Sync + 'static,
{
    /// Assemble a composite. The selection is wired to the container's
    /// disabled and readonly flags.
    pub fn new(
        items: Accessor<Vec<I>>,
        selection: SelectionModel<I::Value>,
        config: ContainerConfig,
    ) -> Self {
        let selection = selection
            .with_disabled(config.disabled.clone())
            .with_readonly(config.readonly.clone());
        Self {
            items,
            focus: FocusCoordinator::new(config.clone()),
            config,
            selection,
            reporter: ValidationReporter::default(),
        }
    }

    pub(crate) fn set_reporter(&mut self, reporter: ValidationReporter) {
        self.reporter = reporter;
    }

    /// The current item list.
    pub fn items(&self) -> Vec<I> {
        self.items.get()
    }

    /// The container configuration.
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// The focus coordinator.
    pub fn focus(&self) -> &FocusCoordinator {
        &self.focus
    }

    /// The focus coordinator, mutably.
    pub fn focus_mut(&mut self) -> &mut FocusCoordinator {
        &mut self.focus
    }

    /// The selection model.
    pub fn selection(&self) -> &SelectionModel<I::Value> {
        &self.selection
    }

    /// The selection model, mutably.
    pub fn selection_mut(&mut self) -> &mut SelectionModel<I::Value> {
        &mut self.selection
    }

    /// The validation reporter.
    pub fn reporter(&self) -> &ValidationReporter {
        &self.reporter
    }

    /// Whether the whole container is disabled.
    pub fn is_disabled(&self) -> bool {
        self.config.disabled.get()
    }

    /// Whether the container is read-only.
    pub fn is_readonly(&self) -> bool {
        self.config.readonly.get()
    }

    /// The navigation policy right now.
    pub fn policy(&self) -> NavigationPolicy {
        NavigationPolicy::from_config(&self.config)
    }

    /// The active index within `items`.
    pub fn active_in(&self, items: &[I]) -> Option<usize> {
        let selected = self.selection.first_selected_index(items);
        self.focus.active_index(items, selected)
    }

    /// The active index within the current item list.
    pub fn active_index(&self) -> Option<usize> {
        self.active_in(&self.items())
    }

    /// Move the active item in `direction`; returns the new active index if
    /// it moved.
    pub fn navigate(&mut self, items: &[I], direction: Direction) -> Option<usize> {
        let selected = self.selection.first_selected_index(items);
        self.focus.navigate(items, selected, direction)
    }

    /// Make the item under the pointer active. Refused only when the
    /// container is disabled.
    pub fn point_at(&mut self, items: &[I], index: usize) -> Option<usize> {
        let target = navigation::pointer_target(items.len(), index, self.is_disabled())?;
        self.focus.set_active(items, target);
        Some(target)
    }

    /// Run the default-state computation.
    pub fn focus_in(&mut self) {
        let items = self.items();
        let selected = self.selection.first_selected_index(&items);
        self.focus.focus_in(&items, selected);
        aria_debug!(len = items.len(), ?selected, "focus entered composite");
    }

    /// Reconcile with a changed item list and, in development mode, report
    /// structural problems.
    pub fn items_changed(&mut self, role: AriaRole) {
        let items = self.items();
        aria_debug!(role = role.as_str(), len = items.len(), "items changed");
        self.focus.reconcile(&items);
        if self.reporter.is_dev_mode() {
            self.report(role, &items);
        }
    }

    /// Structural problems against `items`.
    pub fn violations(&self, items: &[I]) -> Vec<Violation> {
        let mut violations = validation::duplicate_ids(items.iter().map(|item| item.id()));
        violations.extend(self.selection.violations(items));
        violations
    }

    /// Render violations for the current items.
    pub fn report(&self, role: AriaRole, items: &[I]) -> Vec<String> {
        self.reporter.report(role.as_str(), &self.violations(items))
    }

    /// Container attributes common to radio groups and listboxes.
    pub fn container_attributes(&self, role: AriaRole) -> AriaAttributes {
        let items = self.items();
        let active = self.active_in(&items);

        let mut attrs = AriaAttributes::with_role(role);
        attrs.set("tabindex", self.focus.container_tabindex());
        attrs.set("aria-orientation", self.config.orientation.get().as_str());
        attrs.set_opt(
            "aria-activedescendant",
            self.focus.active_descendant(&items, active),
        );
        attrs.set_flag("aria-disabled", self.is_disabled());
        attrs.set_flag("aria-readonly", self.is_readonly());
        attrs
    }

    /// Item attributes common to radios and options. `state` is the name of
    /// the checked/selected attribute.
    pub fn item_attributes(&self, role: AriaRole, state: &'static str, index: usize) -> AriaAttributes {
        let items = self.items();
        let active = self.active_in(&items);
        let Some(item) = items.get(index) else {
            return AriaAttributes::new();
        };

        let mut attrs = AriaAttributes::with_role(role);
        attrs.set("id", item.id());
        attrs.set(state, self.selection.is_selected(&items, index));
        attrs.set_flag("aria-disabled", item.is_disabled() || self.is_disabled());
        attrs.set_opt("tabindex", self.focus.item_tabindex(index, active));
        attrs
    }
}

impl<I> std::fmt::Debug for Composite<I>
where
    I: SelectableItem + 'static,
    I::Value: Clone + std::fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composite")
            .field("config", &self.config)
            .field("focus", &self.focus)
            .field("selection", &self.selection)
            .finish()
    }
}
