//! Logging facilities for Horizon ARIA.
//!
//! Horizon ARIA uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the host installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_aria=debug")
//!         .init();
//! }
//! ```
//!
//! State transitions are logged at `trace` level. Development-mode
//! diagnostics (invalid configuration, orphaned selection entries) are logged
//! at `warn` level under [`targets::VALIDATION`].

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core plumbing target.
    pub const CORE: &str = "horizon_aria_core";
    /// Signal emission target.
    pub const SIGNAL: &str = "horizon_aria_core::signal";
    /// Property and accessor target.
    pub const PROPERTY: &str = "horizon_aria_core::property";
    /// Numeric value model target.
    pub const VALUE: &str = "horizon_aria::value";
    /// Directional navigation target.
    pub const NAVIGATION: &str = "horizon_aria::navigation";
    /// Active item / focus target.
    pub const FOCUS: &str = "horizon_aria::focus";
    /// Selection target.
    pub const SELECTION: &str = "horizon_aria::selection";
    /// Development-mode diagnostics target.
    pub const VALIDATION: &str = "horizon_aria::validation";
    /// Pattern event handling target.
    pub const PATTERN: &str = "horizon_aria::pattern";
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros with consistent
/// target naming.
#[macro_export]
macro_rules! aria_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "horizon_aria", $($arg)*)
    };
}

#[macro_export]
macro_rules! aria_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "horizon_aria", $($arg)*)
    };
}

#[macro_export]
macro_rules! aria_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "horizon_aria", $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn test_targets_are_namespaced() {
        for target in [
            targets::VALUE,
            targets::NAVIGATION,
            targets::FOCUS,
            targets::SELECTION,
            targets::VALIDATION,
            targets::PATTERN,
        ] {
            assert!(target.starts_with("horizon_aria::"));
        }
        assert!(targets::SIGNAL.starts_with(targets::CORE));
        assert!(targets::PROPERTY.starts_with(targets::CORE));
    }

    #[test]
    fn test_macros_expand() {
        // No subscriber installed; just ensure the macros expand and don't panic.
        aria_trace!(index = 3, "moved");
        aria_debug!("debug message");
        aria_warn!(count = 2, "warned");
    }
}
