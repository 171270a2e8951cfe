//! Spinbutton pattern.
//!
//! | Key | Action |
//! |-----|--------|
//! | ArrowUp / ArrowDown | step up / down |
//! | PageUp / PageDown | page step up / down |
//! | Home / End | jump to min / max |
//!
//! A disabled spinbutton consumes nothing. A read-only spinbutton consumes
//! its keys but never changes the value.

use std::sync::Arc;

use horizon_aria_core::logging::targets;
use horizon_aria_core::{Accessor, Result};

use super::{Pattern, consume};
use crate::aria::{AriaAttributes, AriaRole};
use crate::events::{Key, KeyPressEvent, PointerEvent, PointerTarget};
use crate::validation::ValidationReporter;
use crate::value::ValueModel;

/// Host formatter for `aria-valuetext`.
pub type ValueFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpinAction {
    Increment,
    Decrement,
    PageUp,
    PageDown,
    Min,
    Max,
}

impl SpinAction {
    fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowUp => Some(SpinAction::Increment),
            Key::ArrowDown => Some(SpinAction::Decrement),
            Key::PageUp => Some(SpinAction::PageUp),
            Key::PageDown => Some(SpinAction::PageDown),
            Key::Home => Some(SpinAction::Min),
            Key::End => Some(SpinAction::Max),
            _ => None,
        }
    }
}

/// Keyboard and pointer handling for a numeric spinbutton.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use horizon_aria::events::{Key, KeyPressEvent};
/// use horizon_aria::pattern::{Pattern, SpinbuttonPattern};
/// use horizon_aria::value::ValueModel;
/// use horizon_aria_core::{LinkedProperty, Property};
///
/// let value = Arc::new(Property::new(5.0));
/// let mut spin = SpinbuttonPattern::new(
///     ValueModel::new(LinkedProperty::from_property(value.clone())).with_step(2.0),
/// );
///
/// let mut event = KeyPressEvent::key(Key::PageUp);
/// assert!(spin.on_keydown(&mut event).unwrap());
/// assert_eq!(value.get(), 25.0);
/// ```
pub struct SpinbuttonPattern {
    model: ValueModel,
    value_text: Option<ValueFormatter>,
    reporter: ValidationReporter,
}

impl SpinbuttonPattern {
    /// Create a spinbutton over a value model.
    pub fn new(model: ValueModel) -> Self {
        Self {
            model,
            value_text: None,
            reporter: ValidationReporter::default(),
        }
    }

    /// Set the `aria-valuetext` formatter using builder pattern.
    pub fn with_value_text<F>(mut self, formatter: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.value_text = Some(Arc::new(formatter));
        self
    }

    /// Set the development-mode flag using builder pattern.
    pub fn with_dev_mode(mut self, dev_mode: impl Into<Accessor<bool>>) -> Self {
        self.reporter = ValidationReporter::new(dev_mode);
        self
    }

    /// The underlying value model.
    pub fn model(&self) -> &ValueModel {
        &self.model
    }

    /// The `aria-valuetext` string, if a formatter is set.
    pub fn value_text(&self) -> Option<String> {
        self.value_text
            .as_ref()
            .map(|format| format(self.model.value()))
    }

    /// Whether the externally supplied value is outside its bounds.
    pub fn is_invalid(&self) -> bool {
        self.model.is_out_of_range()
    }

    fn apply(&self, action: SpinAction) {
        let model = &self.model;
        match action {
            SpinAction::Increment => model.increment(),
            SpinAction::Decrement => model.decrement(),
            SpinAction::PageUp => model.increment_by_page(),
            SpinAction::PageDown => model.decrement_by_page(),
            SpinAction::Min => model.go_to_min(),
            SpinAction::Max => model.go_to_max(),
        };
    }
}

impl Pattern for SpinbuttonPattern {
    fn role(&self) -> AriaRole {
        AriaRole::Spinbutton
    }

    fn on_keydown(&mut self, event: &mut KeyPressEvent) -> Result<bool> {
        if self.model.is_disabled() {
            tracing::trace!(target: targets::PATTERN, key = ?event.key, "spinbutton disabled, key ignored");
            return Ok(false);
        }
        if event.modifiers.primary() || event.modifiers.alt {
            return Ok(false);
        }
        let Some(action) = SpinAction::from_key(event.key) else {
            return Ok(false);
        };

        // Readonly consumes the key so the page doesn't scroll.
        if !self.model.is_readonly() {
            self.apply(action);
        }
        tracing::trace!(target: targets::PATTERN, ?action, value = self.model.value(), "spinbutton key");
        Ok(consume(&mut event.base, true))
    }

    fn on_pointerdown(&mut self, event: &mut PointerEvent) -> Result<bool> {
        if self.model.is_disabled() || !event.is_primary() {
            return Ok(false);
        }
        let action = match event.target {
            PointerTarget::IncrementButton => SpinAction::Increment,
            PointerTarget::DecrementButton => SpinAction::Decrement,
            PointerTarget::Item(_) | PointerTarget::Container => return Ok(false),
        };
        if !self.model.is_readonly() {
            self.apply(action);
        }
        Ok(consume(&mut event.base, true))
    }

    fn validate(&self) -> Vec<String> {
        self.reporter.report(self.role().as_str(), &self.model.violations())
    }

    fn container_attributes(&self) -> AriaAttributes {
        let mut attrs = AriaAttributes::with_role(AriaRole::Spinbutton);
        attrs.set("tabindex", 0);
        attrs.set("aria-valuenow", self.model.aria_value_now());
        attrs.set_opt("aria-valuemin", self.model.min());
        attrs.set_opt("aria-valuemax", self.model.max());
        attrs.set_opt("aria-valuetext", self.value_text());
        attrs.set_flag("aria-invalid", self.is_invalid());
        attrs.set_flag("aria-disabled", self.model.is_disabled());
        attrs.set_flag("aria-readonly", self.model.is_readonly());
        attrs
    }
}

impl std::fmt::Debug for SpinbuttonPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpinbuttonPattern")
            .field("model", &self.model)
            .field("has_value_text", &self.value_text.is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(SpinbuttonPattern: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{KeyboardModifiers, MouseButton};
    use horizon_aria_core::{LinkedProperty, Property};

    fn spin(value: f64) -> (Arc<Property<f64>>, SpinbuttonPattern) {
        let prop = Arc::new(Property::new(value));
        let model = ValueModel::new(LinkedProperty::from_property(prop.clone()));
        (prop, SpinbuttonPattern::new(model))
    }

    fn press(pattern: &mut SpinbuttonPattern, key: Key) -> bool {
        let mut event = KeyPressEvent::key(key);
        let consumed = pattern.on_keydown(&mut event).unwrap();
        assert_eq!(consumed, event.base.is_accepted());
        consumed
    }

    #[test]
    fn test_keymap() {
        let prop = Arc::new(Property::new(50.0));
        let model = ValueModel::new(LinkedProperty::from_property(prop.clone()))
            .with_min(Some(0.0))
            .with_max(Some(100.0))
            .with_page_step(Some(5.0));
        let mut spin = SpinbuttonPattern::new(model);

        press(&mut spin, Key::ArrowUp);
        assert_eq!(prop.get(), 51.0);
        press(&mut spin, Key::ArrowDown);
        assert_eq!(prop.get(), 50.0);
        press(&mut spin, Key::PageUp);
        assert_eq!(prop.get(), 55.0);
        press(&mut spin, Key::PageDown);
        assert_eq!(prop.get(), 50.0);
        press(&mut spin, Key::End);
        assert_eq!(prop.get(), 100.0);
        press(&mut spin, Key::Home);
        assert_eq!(prop.get(), 0.0);
    }

    #[test]
    fn test_unrecognized_key_not_consumed() {
        let (prop, mut spin) = spin(5.0);
        assert!(!press(&mut spin, Key::ArrowLeft));
        assert!(!press(&mut spin, Key::Enter));
        assert_eq!(prop.get(), 5.0);

        let mut ctrl_up = KeyPressEvent::with_modifiers(Key::ArrowUp, KeyboardModifiers::CTRL);
        assert!(!spin.on_keydown(&mut ctrl_up).unwrap());
    }

    #[test]
    fn test_disabled_ignores_keys() {
        let prop = Arc::new(Property::new(5.0));
        let model = ValueModel::new(LinkedProperty::from_property(prop.clone())).with_disabled(true);
        let mut spin = SpinbuttonPattern::new(model);

        assert!(!press(&mut spin, Key::ArrowUp));
        assert_eq!(prop.get(), 5.0);
    }

    #[test]
    fn test_readonly_consumes_without_change() {
        let prop = Arc::new(Property::new(5.0));
        let model = ValueModel::new(LinkedProperty::from_property(prop.clone())).with_readonly(true);
        let mut spin = SpinbuttonPattern::new(model);

        assert!(press(&mut spin, Key::ArrowUp));
        assert_eq!(prop.get(), 5.0);
    }

    #[test]
    fn test_stepper_buttons() {
        let (prop, mut spin) = spin(0.0);

        let mut up = PointerEvent::new(
            MouseButton::Left,
            KeyboardModifiers::NONE,
            PointerTarget::IncrementButton,
        );
        assert!(spin.on_pointerdown(&mut up).unwrap());
        assert!(up.base.is_accepted());
        assert_eq!(prop.get(), 1.0);

        let mut down = PointerEvent::new(
            MouseButton::Left,
            KeyboardModifiers::NONE,
            PointerTarget::DecrementButton,
        );
        spin.on_pointerdown(&mut down).unwrap();
        assert_eq!(prop.get(), 0.0);

        let mut right = PointerEvent::new(
            MouseButton::Right,
            KeyboardModifiers::NONE,
            PointerTarget::IncrementButton,
        );
        assert!(!spin.on_pointerdown(&mut right).unwrap());
        assert_eq!(prop.get(), 0.0);
    }

    #[test]
    fn test_attributes() {
        let prop = Arc::new(Property::new(3.0));
        let model = ValueModel::new(LinkedProperty::from_property(prop.clone()))
            .with_min(Some(1.0))
            .with_max(Some(12.0));
        let spin = SpinbuttonPattern::new(model).with_value_text(|v| format!("month {v}"));

        let attrs = spin.container_attributes();
        assert_eq!(attrs.get("role"), Some("spinbutton"));
        assert_eq!(attrs.get("tabindex"), Some("0"));
        assert_eq!(attrs.get("aria-valuenow"), Some("3"));
        assert_eq!(attrs.get("aria-valuemin"), Some("1"));
        assert_eq!(attrs.get("aria-valuemax"), Some("12"));
        assert_eq!(attrs.get("aria-valuetext"), Some("month 3"));
        assert!(!attrs.contains("aria-invalid"));

        prop.set(40.0);
        assert_eq!(spin.container_attributes().get("aria-invalid"), Some("true"));
    }

    #[test]
    fn test_unbounded_attributes_omit_range() {
        let (_, spin) = spin(0.0);
        let attrs = spin.container_attributes();
        assert!(!attrs.contains("aria-valuemin"));
        assert!(!attrs.contains("aria-valuemax"));
        assert!(!attrs.contains("aria-valuetext"));
    }

    #[test]
    fn test_validate_min_exceeds_max() {
        let prop = Arc::new(Property::new(0.0));
        let model = ValueModel::new(LinkedProperty::from_property(prop))
            .with_min(Some(10.0))
            .with_max(Some(1.0));
        let spin = SpinbuttonPattern::new(model).with_dev_mode(true);

        assert_eq!(spin.validate(), vec!["min (10) is greater than max (1)".to_string()]);
    }
}
