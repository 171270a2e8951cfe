//! Widget interaction patterns.
//!
//! A pattern is created once per widget instance. The host forwards raw
//! input to it and re-renders from its derived getters:
//!
//! ```text
//! host event ──► on_keydown / on_pointerdown ──► models mutate ──► signals
//!                                                               │
//! host render ◄── container_attributes / item_attributes ◄──────┘
//! ```
//!
//! | Pattern | Container role | Item role | State |
//! |---------|----------------|-----------|-------|
//! | [`SpinbuttonPattern`] | `spinbutton` | none | [`ValueModel`](crate::value::ValueModel) |
//! | [`RadioGroupPattern`] | `radiogroup` | `radio` | single [`SelectionModel`](crate::selection::SelectionModel) |
//! | [`ListboxPattern`] | `listbox` | `option` | single or multi `SelectionModel` |

mod composite;
mod listbox;
mod radio_group;
mod spinbutton;

pub use composite::Composite;
pub use listbox::{ListboxPattern, SelectionFollow};
pub use radio_group::RadioGroupPattern;
pub use spinbutton::{SpinbuttonPattern, ValueFormatter};

use horizon_aria_core::Result;

use crate::aria::{AriaAttributes, AriaRole};
use crate::events::{EventBase, KeyPressEvent, PointerEvent};

/// The event surface shared by every widget pattern.
pub trait Pattern {
    /// The container role.
    fn role(&self) -> AriaRole;

    /// Handle a key press. Returns `true` when the event was consumed; the
    /// event is then also marked accepted.
    ///
    /// Fails only on a development-mode contract violation by the host.
    fn on_keydown(&mut self, event: &mut KeyPressEvent) -> Result<bool>;

    /// Handle a pointer press. Returns `true` when the event was consumed.
    fn on_pointerdown(&mut self, event: &mut PointerEvent) -> Result<bool>;

    /// Focus entered the widget.
    fn on_focus_in(&mut self) {}

    /// The host's item list changed.
    fn on_items_changed(&mut self) {}

    /// Run the structural checks and return plain-text diagnostics.
    fn validate(&self) -> Vec<String>;

    /// Attributes to render on the container element.
    fn container_attributes(&self) -> AriaAttributes;
}

/// Mark `base` accepted when `consumed`, and pass `consumed` through.
pub(crate) fn consume(base: &mut EventBase, consumed: bool) -> bool {
    if consumed {
        base.accept();
    }
    consumed
}
