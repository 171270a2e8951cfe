//! Directional navigation over a list of items.
//!
//! Everything here is a pure function of an item slice, a current index and a
//! [`NavigationPolicy`]. The engine never stores state; the focus coordinator
//! owns the active index and asks the engine where to go next.
//!
//! # Direction Resolution
//!
//! Only the arrow keys on the container's axis move the active item:
//! Up/Down for vertical containers, Left/Right for horizontal ones. Under a
//! right-to-left text direction Left and Right are swapped so that "next"
//! always follows reading order. Home and End work on either axis.
//!
//! # Stepping
//!
//! ```text
//!  wrap = false:   [0] [1] [2] [3]  -> Next from 3 stays on 3
//!  wrap = true:    [0] [1] [2] [3]  -> Next from 3 lands on 0
//!  skip_disabled:  [0] [x] [x] [3]  -> Next from 0 lands on 3
//! ```

use horizon_aria_core::logging::targets;

use crate::config::{ContainerConfig, Orientation, TextDirection};
use crate::events::Key;
use crate::item::NavigableItem;

/// A logical navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One position forward in reading order.
    Next,
    /// One position backward in reading order.
    Previous,
    /// The first eligible item.
    First,
    /// The last eligible item.
    Last,
}

impl Direction {
    /// The direction pointing the other way.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Next => Direction::Previous,
            Direction::Previous => Direction::Next,
            Direction::First => Direction::Last,
            Direction::Last => Direction::First,
        }
    }
}

/// Snapshot of the container settings that shape navigation.
///
/// Taken once per event from the live [`ContainerConfig`] so a single
/// navigation step sees a consistent configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationPolicy {
    /// Primary navigation axis.
    pub orientation: Orientation,
    /// Reading direction.
    pub text_direction: TextDirection,
    /// Continue from the opposite end at a boundary.
    pub wrap: bool,
    /// Pass over disabled items.
    pub skip_disabled: bool,
}

impl NavigationPolicy {
    /// Read the current policy from a live configuration.
    pub fn from_config(config: &ContainerConfig) -> Self {
        Self {
            orientation: config.orientation.get(),
            text_direction: config.text_direction.get(),
            wrap: config.wrap.get(),
            skip_disabled: config.skip_disabled.get(),
        }
    }

    /// Set the wrap flag using builder pattern.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Resolve a key under this policy.
    pub fn resolve(&self, key: Key) -> Option<Direction> {
        resolve_direction(key, self.orientation, self.text_direction)
    }

    fn is_eligible<I: NavigableItem>(&self, item: &I) -> bool {
        !self.skip_disabled || !item.is_disabled()
    }
}

impl Default for NavigationPolicy {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            text_direction: TextDirection::Ltr,
            wrap: true,
            skip_disabled: true,
        }
    }
}

/// Map a key to a logical direction, or `None` if the key doesn't navigate
/// on this axis.
pub fn resolve_direction(
    key: Key,
    orientation: Orientation,
    text_direction: TextDirection,
) -> Option<Direction> {
    let rtl = text_direction == TextDirection::Rtl;
    match (key, orientation) {
        (Key::Home, _) => Some(Direction::First),
        (Key::End, _) => Some(Direction::Last),
        (Key::ArrowDown, Orientation::Vertical) => Some(Direction::Next),
        (Key::ArrowUp, Orientation::Vertical) => Some(Direction::Previous),
        (Key::ArrowRight, Orientation::Horizontal) if rtl => Some(Direction::Previous),
        (Key::ArrowRight, Orientation::Horizontal) => Some(Direction::Next),
        (Key::ArrowLeft, Orientation::Horizontal) if rtl => Some(Direction::Next),
        (Key::ArrowLeft, Orientation::Horizontal) => Some(Direction::Previous),
        _ => None,
    }
}

/// Compute the index that `direction` leads to from `current`.
///
/// `current` is `None` when nothing is active yet; `Next` then lands on the
/// first eligible item and `Previous` on the last. An index past the end of
/// the list is treated as the last item.
///
/// When skip-disabled applies and at least one enabled item exists, the
/// result is always an enabled item. When no eligible item exists the
/// original index is returned unchanged.
pub fn next_index<I: NavigableItem>(
    items: &[I],
    current: Option<usize>,
    direction: Direction,
    policy: &NavigationPolicy,
) -> Option<usize> {
    if items.is_empty() {
        return current;
    }

    let current_clamped = current.map(|index| index.min(items.len() - 1));

    let target = match (direction, current_clamped) {
        (Direction::First, _) | (Direction::Next, None) => first_eligible(items, policy),
        (Direction::Last, _) | (Direction::Previous, None) => last_eligible(items, policy),
        (Direction::Next | Direction::Previous, Some(start)) => {
            walk(items, start, direction, policy)
                .or_else(|| {
                    // Nothing further that way: stay if the current item is
                    // still eligible, else retreat to the nearest eligible one.
                    if policy.is_eligible(&items[start]) {
                        Some(start)
                    } else {
                        walk(items, start, direction.reversed(), &policy.with_wrap(false))
                    }
                })
        }
    };

    let result = target.or(current);
    tracing::trace!(
        target: targets::NAVIGATION,
        ?direction,
        from = ?current,
        to = ?result,
        "navigate"
    );
    result
}

/// Resolve a pointer press on `index`.
///
/// Pointer activation bypasses the step walk and the skip-disabled policy; it
/// is refused only when the whole container is disabled or the index is out
/// of range.
pub fn pointer_target(len: usize, index: usize, container_disabled: bool) -> Option<usize> {
    if container_disabled || index >= len {
        None
    } else {
        Some(index)
    }
}

/// Index of the first item eligible under `policy`.
pub fn first_eligible<I: NavigableItem>(items: &[I], policy: &NavigationPolicy) -> Option<usize> {
    items.iter().position(|item| policy.is_eligible(item))
}

/// Index of the last item eligible under `policy`.
pub fn last_eligible<I: NavigableItem>(items: &[I], policy: &NavigationPolicy) -> Option<usize> {
    items.iter().rposition(|item| policy.is_eligible(item))
}

/// Walk one position at a time from `start` (exclusive) until an eligible
/// item is found. Visits each other item at most once.
fn walk<I: NavigableItem>(
    items: &[I],
    start: usize,
    direction: Direction,
    policy: &NavigationPolicy,
) -> Option<usize> {
    let len = items.len();
    let mut position = start;

    for _ in 1..len {
        position = match direction {
            Direction::Next if position + 1 < len => position + 1,
            Direction::Next if policy.wrap => 0,
            Direction::Previous if position > 0 => position - 1,
            Direction::Previous if policy.wrap => len - 1,
            _ => return None,
        };
        if policy.is_eligible(&items[position]) {
            return Some(position);
        }
    }
    None
}
