//! Structural self-checks.
//!
//! Each model reports the problems it can see as [`Violation`] values. A
//! pattern collects them and hands them to its [`ValidationReporter`], which
//! turns them into plain-text diagnostics and, in development mode, logs them
//! under [`targets::VALIDATION`].
//!
//! Nothing here ever fails: a violation describes a misconfiguration the
//! widget keeps working around.

use horizon_aria_core::Accessor;
use horizon_aria_core::logging::targets;

/// A structural problem detected in a composed pattern.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Violation {
    /// The lower bound is above the upper bound.
    #[error("min ({min}) is greater than max ({max})")]
    MinExceedsMax { min: f64, max: f64 },

    /// The step can't make progress.
    #[error("step must be a positive number, got {step}")]
    NonPositiveStep { step: f64 },

    /// Two items have values that compare equal.
    #[error("items `{first}` and `{duplicate}` have equal values; `{first}` is used for lookups")]
    DuplicateValue { first: String, duplicate: String },

    /// Two items share an id, so `aria-activedescendant` is ambiguous.
    #[error("more than one item has id `{id}`")]
    DuplicateId { id: String },

    /// Selected values with no matching item.
    #[error("{count} selected value(s) match no current item and are ignored")]
    OrphanedSelection { count: usize },

    /// Single-select mode holding more than one value.
    #[error("single-select widget holds {count} selected values")]
    MultipleSelectionInSingleMode { count: usize },
}

/// Turns violations into diagnostics, logging them in development mode.
#[derive(Clone, Debug)]
pub struct ValidationReporter {
    dev_mode: Accessor<bool>,
}

impl Default for ValidationReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ValidationReporter {
    /// Create a reporter gated on a host-supplied development-mode flag.
    pub fn new(dev_mode: impl Into<Accessor<bool>>) -> Self {
        Self {
            dev_mode: dev_mode.into(),
        }
    }

    /// Whether development-mode diagnostics are on.
    pub fn is_dev_mode(&self) -> bool {
        self.dev_mode.get()
    }

    /// Render `violations` as text, logging each at `warn` in development
    /// mode. `widget` names the reporting widget in the log.
    pub fn report(&self, widget: &str, violations: &[Violation]) -> Vec<String> {
        let messages: Vec<String> = violations.iter().map(ToString::to_string).collect();
        if self.is_dev_mode() {
            for message in &messages {
                tracing::warn!(target: targets::VALIDATION, widget, "{message}");
            }
        }
        messages
    }
}

/// Find items sharing an id. Each repeated id is reported once.
pub fn duplicate_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<Violation> {
    let mut seen: Vec<&str> = Vec::new();
    let mut reported: Vec<&str> = Vec::new();
    let mut violations = Vec::new();
    for id in ids {
        if seen.contains(&id) {
            if !reported.contains(&id) {
                reported.push(id);
                violations.push(Violation::DuplicateId { id: id.to_string() });
            }
        } else {
            seen.push(id);
        }
    }
    violations
}
