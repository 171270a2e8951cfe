//! Numeric value model for spinbutton-like widgets.
//!
//! [`ValueModel`] owns the clamp/wrap/step arithmetic. The value itself lives
//! with the host and is reached through a [`LinkedProperty`]; the bounds and
//! steps are live [`Accessor`]s.
//!
//! # Wrapping
//!
//! Wrapping is a single boundary jump: stepping past `max` lands exactly on
//! `min` (and past `min` lands on `max`), however far past the bound the raw
//! result was. It is not modulo arithmetic.
//!
//! ```
//! use std::sync::Arc;
//! use horizon_aria::value::ValueModel;
//! use horizon_aria_core::{LinkedProperty, Property};
//!
//! let value = Arc::new(Property::new(12.0));
//! let model = ValueModel::new(LinkedProperty::from_property(value.clone()))
//!     .with_min(Some(1.0))
//!     .with_max(Some(12.0))
//!     .with_wrap(true);
//!
//! model.increment();
//! assert_eq!(value.get(), 1.0);
//! ```

use horizon_aria_core::logging::targets;
use horizon_aria_core::{Accessor, LinkedProperty, Signal};

use crate::config::SpinbuttonSettings;
use crate::validation::Violation;

/// Clamp/wrap/step arithmetic over a host-owned number.
pub struct ValueModel {
    value: LinkedProperty<f64>,
    min: Accessor<Option<f64>>,
    max: Accessor<Option<f64>>,
    step: Accessor<f64>,
    page_step: Accessor<Option<f64>>,
    wrap: Accessor<bool>,
    disabled: Accessor<bool>,
    readonly: Accessor<bool>,

    /// Emitted after a pattern-driven mutation changes the value.
    pub value_changed: Signal<f64>,
}

impl ValueModel {
    /// Create a model with no bounds, a step of 1 and no wrapping.
    pub fn new(value: LinkedProperty<f64>) -> Self {
        Self {
            value,
            min: Accessor::constant(None),
            max: Accessor::constant(None),
            step: Accessor::constant(1.0),
            page_step: Accessor::constant(None),
            wrap: Accessor::constant(false),
            disabled: Accessor::constant(false),
            readonly: Accessor::constant(false),
            value_changed: Signal::new(),
        }
    }

    /// Create a model from a settings snapshot.
    pub fn from_settings(value: LinkedProperty<f64>, settings: SpinbuttonSettings) -> Self {
        Self::new(value)
            .with_min(settings.min)
            .with_max(settings.max)
            .with_step(settings.step)
            .with_page_step(settings.page_step)
            .with_wrap(settings.wrap)
    }

    /// Set the lower bound accessor using builder pattern.
    pub fn with_min(mut self, min: impl Into<Accessor<Option<f64>>>) -> Self {
        self.min = min.into();
        self
    }

    /// Set the upper bound accessor using builder pattern.
    pub fn with_max(mut self, max: impl Into<Accessor<Option<f64>>>) -> Self {
        self.max = max.into();
        self
    }

    /// Set the step accessor using builder pattern.
    pub fn with_step(mut self, step: impl Into<Accessor<f64>>) -> Self {
        self.step = step.into();
        self
    }

    /// Set the page-step accessor using builder pattern.
    pub fn with_page_step(mut self, page_step: impl Into<Accessor<Option<f64>>>) -> Self {
        self.page_step = page_step.into();
        self
    }

    /// Set the wrap accessor using builder pattern.
    pub fn with_wrap(mut self, wrap: impl Into<Accessor<bool>>) -> Self {
        self.wrap = wrap.into();
        self
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

    /// The current value.
    pub fn value(&self) -> f64 {
        self.value.get()
    }

    /// The lower bound, if any.
    pub fn min(&self) -> Option<f64> {
        self.min.get()
    }

    /// The upper bound, if any.
    pub fn max(&self) -> Option<f64> {
        self.max.get()
    }

    /// The single-step amount.
    pub fn step(&self) -> f64 {
        self.step.get()
    }

    /// The page-step amount: `page_step` if set, else ten single steps.
    pub fn page_step(&self) -> f64 {
        self.page_step.get().unwrap_or_else(|| self.step() * 10.0)
    }

    /// Whether overflow wraps to the opposite bound.
    pub fn wraps(&self) -> bool {
        self.wrap.get()
    }

    /// Whether the widget is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    /// Whether the widget is read-only.
    pub fn is_readonly(&self) -> bool {
        self.readonly.get()
    }

    /// Whether mutators are currently allowed to change the value.
    pub fn is_interactive(&self) -> bool {
        !self.is_disabled() && !self.is_readonly()
    }

    /// The value exposed as `aria-valuenow`.
    pub fn aria_value_now(&self) -> f64 {
        self.value()
    }

    /// Whether the value sits at or below the lower bound.
    pub fn at_min(&self) -> bool {
        self.min().is_some_and(|min| self.value() <= min)
    }

    /// Whether the value sits at or above the upper bound.
    pub fn at_max(&self) -> bool {
        self.max().is_some_and(|max| self.value() >= max)
    }

    /// Whether the externally supplied value lies outside the bounds.
    pub fn is_out_of_range(&self) -> bool {
        let value = self.value();
        self.min().is_some_and(|min| value < min) || self.max().is_some_and(|max| value > max)
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Bring `v` into range.
    ///
    /// Without wrapping, `v` is clamped into `[min, max]` (a missing bound is
    /// unbounded). With wrapping, a value past `max` becomes `min` and a value
    /// below `min` becomes `max`; when the opposite bound is missing the value
    /// is clamped instead.
    pub fn settle(&self, v: f64) -> f64 {
        let min = self.min();
        let max = self.max();

        if self.wraps() {
            if let Some(upper) = max
                && v > upper
            {
                return min.unwrap_or(upper);
            }
            if let Some(lower) = min
                && v < lower
            {
                return max.unwrap_or(lower);
            }
            return v;
        }

        let mut settled = v;
        if let Some(upper) = max {
            settled = settled.min(upper);
        }
        if let Some(lower) = min {
            settled = settled.max(lower);
        }
        settled
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Step up by `step`. Returns `true` if the value changed.
    pub fn increment(&self) -> bool {
        self.step_by(self.step())
    }

    /// Step down by `step`. Returns `true` if the value changed.
    pub fn decrement(&self) -> bool {
        self.step_by(-self.step())
    }

    /// Step up by the page step. Returns `true` if the value changed.
    pub fn increment_by_page(&self) -> bool {
        self.step_by(self.page_step())
    }

    /// Step down by the page step. Returns `true` if the value changed.
    pub fn decrement_by_page(&self) -> bool {
        self.step_by(-self.page_step())
    }

    /// Jump to the lower bound; a no-op when there is none.
    pub fn go_to_min(&self) -> bool {
        match self.min() {
            Some(min) => self.assign(min),
            None => false,
        }
    }

    /// Jump to the upper bound; a no-op when there is none.
    pub fn go_to_max(&self) -> bool {
        match self.max() {
            Some(max) => self.assign(max),
            None => false,
        }
    }

    /// Set a value on behalf of the user, settling it into range first.
    pub fn set_value(&self, v: f64) -> bool {
        self.assign(self.settle(v))
    }

    fn step_by(&self, delta: f64) -> bool {
        self.set_value(self.value() + delta)
    }

    fn assign(&self, next: f64) -> bool {
        if !self.is_interactive() {
            tracing::trace!(target: targets::VALUE, "value change ignored: disabled or readonly");
            return false;
        }

        let current = self.value();
        if current == next {
            return false;
        }

        self.value.set(next);
        tracing::trace!(target: targets::VALUE, from = current, to = next, "value changed");
        self.value_changed.emit(next);
        true
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Structural problems with the current configuration.
    pub fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if let (Some(min), Some(max)) = (self.min(), self.max())
            && min > max
        {
            violations.push(Violation::MinExceedsMax { min, max });
        }
        let step = self.step();
        if step.is_nan() || step <= 0.0 {
            violations.push(Violation::NonPositiveStep { step });
        }
        violations
    }
}

impl std::fmt::Debug for ValueModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueModel")
            .field("value", &self.value())
            .field("min", &self.min())
            .field("max", &self.max())
            .field("step", &self.step())
            .field("wrap", &self.wraps())
            .finish()
    }
}

static_assertions::assert_impl_all!(ValueModel: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_aria_core::Property;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn model(value: f64) -> (Arc<Property<f64>>, ValueModel) {
        let prop = Arc::new(Property::new(value));
        let model = ValueModel::new(LinkedProperty::from_property(prop.clone()));
        (prop, model)
    }

    #[test]
    fn test_increment_decrement() {
        let (prop, model) = model(5.0);
        assert!(model.increment());
        assert_eq!(prop.get(), 6.0);
        assert!(model.decrement());
        assert_eq!(prop.get(), 5.0);
    }

    #[test]
    fn test_settle_is_identity_within_bounds() {
        let (_, model) = model(0.0);
        let model = model.with_min(Some(-3.0)).with_max(Some(3.0));
        for v in [-3.0, -1.5, 0.0, 2.25, 3.0] {
            assert_eq!(model.settle(v), v);
        }
        let model = model.with_wrap(true);
        for v in [-3.0, 0.0, 3.0] {
            assert_eq!(model.settle(v), v);
        }
    }

    #[test]
    fn test_clamp_at_max() {
        let (prop, model) = model(10.0);
        let model = model.with_min(Some(0.0)).with_max(Some(10.0));

        assert!(!model.increment());
        assert_eq!(prop.get(), 10.0);
        assert!(model.at_max());
        assert!(!model.at_min());
    }

    #[test]
    fn test_single_boundary_wrap() {
        let (prop, model) = model(12.0);
        let model = model
            .with_min(Some(1.0))
            .with_max(Some(12.0))
            .with_wrap(true);

        assert!(model.increment());
        assert_eq!(prop.get(), 1.0);

        assert!(model.decrement());
        assert_eq!(prop.get(), 12.0);

        // A page step far past the bound still lands on the opposite bound.
        prop.set(11.0);
        assert!(model.increment_by_page());
        assert_eq!(prop.get(), 1.0);
    }

    #[test]
    fn test_wrap_without_opposite_bound_clamps() {
        let (_, model) = model(0.0);
        let model = model.with_max(Some(5.0)).with_wrap(true);
        assert_eq!(model.settle(9.0), 5.0);
        assert_eq!(model.settle(-100.0), -100.0);
    }

    #[test]
    fn test_page_step_defaults_to_ten_steps() {
        let (prop, model) = model(5.0);
        let model = model.with_step(2.0);

        assert_eq!(model.page_step(), 20.0);
        assert!(model.increment_by_page());
        assert_eq!(prop.get(), 25.0);

        let model = model.with_page_step(Some(3.0));
        assert!(model.decrement_by_page());
        assert_eq!(prop.get(), 22.0);
    }

    #[test]
    fn test_go_to_bounds() {
        let (prop, model) = model(4.0);
        assert!(!model.go_to_min());
        assert!(!model.go_to_max());
        assert_eq!(prop.get(), 4.0);

        let model = model.with_min(Some(-2.0)).with_max(Some(8.0));
        assert!(model.go_to_max());
        assert_eq!(prop.get(), 8.0);
        assert!(model.go_to_min());
        assert_eq!(prop.get(), -2.0);
    }

    #[test]
    fn test_guards() {
        let (prop, model) = model(5.0);
        let disabled = Arc::new(Property::new(true));
        let model = model.with_disabled(Accessor::from_property(disabled.clone()));

        assert!(!model.increment());
        assert!(!model.go_to_max());
        assert_eq!(prop.get(), 5.0);

        disabled.set(false);
        let model = model.with_readonly(true);
        assert!(!model.decrement());
        assert_eq!(prop.get(), 5.0);
    }

    #[test]
    fn test_value_changed_signal() {
        let (_, model) = model(0.0);
        let model = model.with_max(Some(1.0));
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        model.value_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        model.increment();
        model.increment(); // clamped, no change
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_out_of_range_external_value() {
        let (prop, model) = model(50.0);
        let model = model.with_min(Some(0.0)).with_max(Some(10.0));
        assert!(model.is_out_of_range());

        // The next pattern-driven mutation settles it.
        model.decrement();
        assert_eq!(prop.get(), 10.0);
        assert!(!model.is_out_of_range());
    }

    #[test]
    fn test_violations() {
        let (_, model) = model(0.0);
        assert!(model.violations().is_empty());

        let model = model.with_min(Some(5.0)).with_max(Some(1.0)).with_step(0.0);
        let violations = model.violations();
        assert!(violations.contains(&Violation::MinExceedsMax { min: 5.0, max: 1.0 }));
        assert!(violations.contains(&Violation::NonPositiveStep { step: 0.0 }));
    }

    #[test]
    fn test_from_settings() {
        let settings = SpinbuttonSettings {
            min: Some(0.0),
            max: Some(100.0),
            step: 5.0,
            page_step: Some(25.0),
            wrap: true,
        };
        let (_, model) = model(0.0);
        let model = ValueModel::from_settings(model.value.clone(), settings);
        assert_eq!(model.min(), Some(0.0));
        assert_eq!(model.max(), Some(100.0));
        assert_eq!(model.step(), 5.0);
        assert_eq!(model.page_step(), 25.0);
        assert!(model.wraps());
    }
}
