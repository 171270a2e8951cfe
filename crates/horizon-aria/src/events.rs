//! Input events forwarded by the host.
//!
//! The host translates its native keyboard and pointer events into these
//! types and passes them to a pattern's `on_keydown` / `on_pointerdown`.
//! A pattern that handles an event marks it accepted; the host should then
//! suppress the platform default action (scrolling, text entry).

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Meta modifier only.
    pub const META: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: true,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// The platform "command" modifier: Ctrl, or Cmd on macOS.
    pub fn primary(&self) -> bool {
        self.control || self.meta
    }

    /// Shift is the only modifier held.
    pub fn shift_only(&self) -> bool {
        self.shift && !self.control && !self.alt && !self.meta
    }
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left, or a touch/pen contact).
    #[default]
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Common data for all input events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event; the host should suppress the default action.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Keyboard key codes.
///
/// Follows the structure of web `KeyboardEvent.code` values for the keys the
/// interaction patterns care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Key {
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Numbers (main keyboard)
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Navigation
    ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
    Home, End, PageUp, PageDown,

    // Editing
    Backspace, Delete,
    Enter, Tab,

    // Whitespace
    Space,

    // Control
    Escape,

    // Any other key
    Unknown(u16),
}

impl Key {
    /// Check if this is an arrow key.
    pub fn is_arrow(&self) -> bool {
        matches!(
            self,
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight
        )
    }

    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        self.is_arrow() || matches!(self, Key::Home | Key::End | Key::PageUp | Key::PageDown)
    }

    /// Space or Enter, the keys that activate the focused item.
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Space | Key::Enter)
    }
}

/// Key press event, sent when a key is pressed.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// The text input from this key press (if any).
    ///
    /// For printable keys, this contains the character that would be typed.
    /// For non-printable keys this is empty.
    pub text: String,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers, text: impl Into<String>) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            text: text.into(),
        }
    }

    /// A key press with no modifiers and no text.
    pub fn key(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE, "")
    }

    /// A key press with modifiers and no text.
    pub fn with_modifiers(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self::new(key, modifiers, "")
    }

    /// A printable character typed without command modifiers.
    pub fn character(key: Key, ch: char) -> Self {
        Self::new(key, KeyboardModifiers::NONE, ch.to_string())
    }

    /// The typed character, when this press produces exactly one printable
    /// character and no command modifier is held.
    pub fn printable_char(&self) -> Option<char> {
        if self.modifiers.primary() || self.modifiers.alt {
            return None;
        }
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !ch.is_control() => Some(ch),
            _ => None,
        }
    }
}

/// What a pointer press landed on, as resolved by the host's hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    /// An item of the composite widget, by index in the current item list.
    Item(usize),
    /// The container itself, outside any item.
    Container,
    /// A spinbutton's increment control.
    IncrementButton,
    /// A spinbutton's decrement control.
    DecrementButton,
}

/// Pointer press event (mouse down, touch start, pen contact).
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// What was hit.
    pub target: PointerTarget,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub fn new(button: MouseButton, modifiers: KeyboardModifiers, target: PointerTarget) -> Self {
        Self {
            base: EventBase::new(),
            button,
            modifiers,
            target,
        }
    }

    /// A plain primary-button press on an item.
    pub fn on_item(index: usize) -> Self {
        Self::new(MouseButton::Left, KeyboardModifiers::NONE, PointerTarget::Item(index))
    }

    /// A primary-button press on an item with modifiers held.
    pub fn on_item_with(index: usize, modifiers: KeyboardModifiers) -> Self {
        Self::new(MouseButton::Left, modifiers, PointerTarget::Item(index))
    }

    /// Whether this is a primary-button press.
    pub fn is_primary(&self) -> bool {
        self.button == MouseButton::Left
    }
}
