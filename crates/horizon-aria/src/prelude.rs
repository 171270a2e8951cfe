//! Prelude module for Horizon ARIA.
//!
//! ```ignore
//! use horizon_aria::prelude::*;
//! ```

// ============================================================================
// Reactive Plumbing
// ============================================================================

pub use horizon_aria_core::{Accessor, LinkedProperty, Property, Signal};
pub use horizon_aria_core::{Error, Result};

// ============================================================================
// Configuration and Input
// ============================================================================

pub use crate::config::{
    ContainerConfig, ContainerSettings, FocusMode, Orientation, SpinbuttonSettings, TextDirection,
};
pub use crate::events::{
    Key, KeyPressEvent, KeyboardModifiers, MouseButton, PointerEvent, PointerTarget,
};
pub use crate::item::{NavigableItem, OptionItem, SelectableItem};

// ============================================================================
// Models
// ============================================================================

pub use crate::focus::FocusCoordinator;
pub use crate::navigation::{Direction, NavigationPolicy};
pub use crate::selection::SelectionModel;
pub use crate::validation::{ValidationReporter, Violation};
pub use crate::value::ValueModel;

// ============================================================================
// Patterns
// ============================================================================

pub use crate::aria::{AriaAttributes, AriaRole};
pub use crate::pattern::{
    ListboxPattern, Pattern, RadioGroupPattern, SelectionFollow, SpinbuttonPattern,
};
