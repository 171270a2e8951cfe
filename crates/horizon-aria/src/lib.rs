//! Horizon ARIA - framework-agnostic interaction core for ARIA composite
//! widgets.
//!
//! This crate decides, independently of any rendering layer, which item of a
//! composite widget is active, how keyboard and pointer input change a value
//! or a selection, and how focus is exposed to assistive technology.
//!
//! # Components
//!
//! - [`value::ValueModel`]: clamp/wrap/step arithmetic for spinbuttons
//! - [`navigation`]: orientation- and direction-aware next-index computation
//! - [`focus::FocusCoordinator`]: the active item, as roving tabindex or
//!   `aria-activedescendant`
//! - [`selection::SelectionModel`]: single- and multi-select state
//! - [`validation::ValidationReporter`]: development-mode self-checks
//! - [`pattern`]: the spinbutton, radio group and listbox patterns built
//!   from the above
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_aria::prelude::*;
//!
//! let items = Accessor::constant(vec![
//!     OptionItem::new("small", "S"),
//!     OptionItem::new("medium", "M"),
//!     OptionItem::new("large", "L"),
//! ]);
//! let size = Arc::new(Property::new(None));
//! let mut group = RadioGroupPattern::new(items, size.clone(), ContainerConfig::default());
//!
//! group.on_focus_in();
//! let mut event = KeyPressEvent::key(Key::ArrowDown);
//! assert!(group.on_keydown(&mut event).unwrap());
//! assert_eq!(size.get(), Some("M"));
//! assert_eq!(group.item_tabindex(1), Some(0));
//! ```
//!
//! # Logging
//!
//! State transitions are traced under the targets in
//! [`horizon_aria_core::logging::targets`]. Development-mode diagnostics are
//! logged at `warn` level only when the host enables development mode on a
//! pattern.

pub mod aria;
pub mod config;
pub mod events;
pub mod focus;
pub mod item;
pub mod navigation;
pub mod pattern;
pub mod prelude;
pub mod selection;
pub mod typeahead;
pub mod validation;
pub mod value;

pub use horizon_aria_core::{Error, Result};
