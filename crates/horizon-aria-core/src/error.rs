//! Error types for Horizon ARIA.

/// A specialized Result type for Horizon ARIA operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the interaction core.
///
/// Configuration problems (an inverted range, duplicate option values) are not
/// errors; they are reported as diagnostics by the validation layer and the
/// widget keeps operating. Only host misuse of a component contract surfaces
/// here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A single-select listbox holds more than one selected value.
    #[error("single-select listbox holds {selected} selected values; at most one is allowed")]
    SelectionContract {
        /// Number of entries found in the selection.
        selected: usize,
    },

    /// An item index does not exist in the current item list.
    #[error("item index {index} is out of range for {len} items")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of items at the time of the request.
        len: usize,
    },

    /// A settings document could not be parsed.
    #[error("invalid settings: {message}")]
    Settings {
        /// Parser message.
        message: String,
    },
}

impl Error {
    /// Create a settings error.
    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings {
            message: message.into(),
        }
    }
}
