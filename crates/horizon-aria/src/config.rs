//! Container configuration.
//!
//! A pattern reads its container configuration through live [`Accessor`]s so
//! that a host toggling `disabled` or flipping text direction is seen on the
//! very next event, without notifying the pattern.
//!
//! [`ContainerSettings`] and [`SpinbuttonSettings`] are the serializable
//! counterparts: plain snapshots that can be loaded from TOML and turned into
//! constant accessors.
//!
//! # Example
//!
//! ```
//! use horizon_aria::config::{ContainerSettings, Orientation};
//!
//! let settings = ContainerSettings::from_toml_str(r#"
//! orientation = "horizontal"
//! wrap = false
//! "#).unwrap();
//!
//! let config = settings.into_config();
//! assert_eq!(config.orientation.get(), Orientation::Horizontal);
//! assert!(!config.wrap.get());
//! assert!(config.skip_disabled.get());
//! ```

use serde::{Deserialize, Serialize};

use horizon_aria_core::{Accessor, Error, Result};

/// Primary navigation axis of a composite widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Left/Right arrows navigate.
    Horizontal,
    /// Up/Down arrows navigate.
    #[default]
    Vertical,
}

impl Orientation {
    /// The `aria-orientation` token.
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Reading direction of the surrounding text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left; Left/Right arrows are mirrored.
    Rtl,
}

/// How the active item is exposed to assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusMode {
    /// Real focus moves between items; only the active item is tabbable.
    #[default]
    Roving,
    /// Focus stays on the container, which points at the active item through
    /// `aria-activedescendant`.
    ActiveDescendant,
}

/// Live configuration of a composite container.
///
/// Every field is re-read on each query.
#[derive(Clone)]
pub struct ContainerConfig {
    /// Primary navigation axis.
    pub orientation: Accessor<Orientation>,
    /// Reading direction.
    pub text_direction: Accessor<TextDirection>,
    /// The whole widget is disabled.
    pub disabled: Accessor<bool>,
    /// The widget can be navigated but its value can't change.
    pub readonly: Accessor<bool>,
    /// Navigation continues from the opposite end at a boundary.
    pub wrap: Accessor<bool>,
    /// Navigation passes over disabled items.
    pub skip_disabled: Accessor<bool>,
    /// Focus strategy.
    pub focus_mode: Accessor<FocusMode>,
}

impl ContainerConfig {
    /// Set the orientation accessor using builder pattern.
    pub fn with_orientation(mut self, orientation: impl Into<Accessor<Orientation>>) -> Self {
        self.orientation = orientation.into();
        self
    }

    /// Set the text direction accessor using builder pattern.
    pub fn with_text_direction(mut self, direction: impl Into<Accessor<TextDirection>>) -> Self {
        self.text_direction = direction.into();
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

    /// Set the wrap accessor using builder pattern.
    pub fn with_wrap(mut self, wrap: impl Into<Accessor<bool>>) -> Self {
        self.wrap = wrap.into();
        self
    }

    /// Set the skip-disabled accessor using builder pattern.
    pub fn with_skip_disabled(mut self, skip: impl Into<Accessor<bool>>) -> Self {
        self.skip_disabled = skip.into();
        self
    }

    /// Set the focus mode accessor using builder pattern.
    pub fn with_focus_mode(mut self, mode: impl Into<Accessor<FocusMode>>) -> Self {
        self.focus_mode = mode.into();
        self
    }

    /// Whether the widget accepts value/selection changes right now.
    pub fn is_interactive(&self) -> bool {
        !self.disabled.get() && !self.readonly.get()
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        ContainerSettings::default().into_config()
    }
}

impl std::fmt::Debug for ContainerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerConfig")
            .field("orientation", &self.orientation.get())
            .field("text_direction", &self.text_direction.get())
            .field("disabled", &self.disabled.get())
            .field("readonly", &self.readonly.get())
            .field("wrap", &self.wrap.get())
            .field("skip_disabled", &self.skip_disabled.get())
            .field("focus_mode", &self.focus_mode.get())
            .finish()
    }
}

/// Serializable snapshot of a container configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSettings {
    /// Primary navigation axis.
    pub orientation: Orientation,
    /// Reading direction.
    pub text_direction: TextDirection,
    /// The whole widget is disabled.
    pub disabled: bool,
    /// The widget can't change value.
    pub readonly: bool,
    /// Navigation wraps at the boundaries.
    pub wrap: bool,
    /// Navigation passes over disabled items.
    pub skip_disabled: bool,
    /// Focus strategy.
    pub focus_mode: FocusMode,
}

impl Default for ContainerSettings {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            text_direction: TextDirection::Ltr,
            disabled: false,
            readonly: false,
            wrap: true,
            skip_disabled: true,
            focus_mode: FocusMode::Roving,
        }
    }
}

impl ContainerSettings {
    /// Parse settings from a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|err| Error::settings(err.message()))
    }

    /// Turn the snapshot into constant accessors.
    pub fn into_config(self) -> ContainerConfig {
        ContainerConfig {
            orientation: Accessor::constant(self.orientation),
            text_direction: Accessor::constant(self.text_direction),
            disabled: Accessor::constant(self.disabled),
            readonly: Accessor::constant(self.readonly),
            wrap: Accessor::constant(self.wrap),
            skip_disabled: Accessor::constant(self.skip_disabled),
            focus_mode: Accessor::constant(self.focus_mode),
        }
    }
}

/// Serializable snapshot of a spinbutton's numeric range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinbuttonSettings {
    /// Lower bound, if any.
    pub min: Option<f64>,
    /// Upper bound, if any.
    pub max: Option<f64>,
    /// Single-step amount.
    pub step: f64,
    /// Page-step amount; `step * 10` when absent.
    pub page_step: Option<f64>,
    /// Overflow past one bound lands on the other.
    pub wrap: bool,
}

impl Default for SpinbuttonSettings {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            step: 1.0,
            page_step: None,
            wrap: false,
        }
    }
}

impl SpinbuttonSettings {
    /// Parse settings from a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|err| Error::settings(err.message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_aria_core::Property;
    use std::sync::Arc;

    #[test]
    fn test_default_settings() {
        let settings = ContainerSettings::default();
        assert_eq!(settings.orientation, Orientation::Vertical);
        assert_eq!(settings.text_direction, TextDirection::Ltr);
        assert!(settings.wrap);
        assert!(settings.skip_disabled);
        assert_eq!(settings.focus_mode, FocusMode::Roving);
    }

    #[test]
    fn test_settings_from_toml() {
        let settings = ContainerSettings::from_toml_str(
            r#"
            orientation = "horizontal"
            text_direction = "rtl"
            focus_mode = "activedescendant"
            skip_disabled = false
            "#,
        )
        .unwrap();

        assert_eq!(settings.orientation, Orientation::Horizontal);
        assert_eq!(settings.text_direction, TextDirection::Rtl);
        assert_eq!(settings.focus_mode, FocusMode::ActiveDescendant);
        assert!(!settings.skip_disabled);
        assert!(settings.wrap);
    }

    #[test]
    fn test_settings_rejects_bad_values() {
        let err = ContainerSettings::from_toml_str(r#"orientation = "diagonal""#).unwrap_err();
        assert!(matches!(err, Error::Settings { .. }));
    }

    #[test]
    fn test_spinbutton_settings_from_toml() {
        let settings = SpinbuttonSettings::from_toml_str(
            r#"
            min = 1.0
            max = 12.0
            wrap = true
            "#,
        )
        .unwrap();

        assert_eq!(settings.min, Some(1.0));
        assert_eq!(settings.max, Some(12.0));
        assert_eq!(settings.step, 1.0);
        assert_eq!(settings.page_step, None);
        assert!(settings.wrap);
    }

    #[test]
    fn test_config_reads_live_values() {
        let disabled = Arc::new(Property::new(false));
        let config = ContainerConfig::default()
            .with_disabled(Accessor::from_property(disabled.clone()));

        assert!(config.is_interactive());
        disabled.set(true);
        assert!(!config.is_interactive());
    }

    #[test]
    fn test_orientation_token() {
        assert_eq!(Orientation::Horizontal.as_str(), "horizontal");
        assert_eq!(Orientation::Vertical.as_str(), "vertical");
    }
}
