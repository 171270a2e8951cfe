//! Core plumbing for Horizon ARIA.
//!
//! This crate provides the reactive building blocks the interaction patterns
//! are assembled from:
//!
//! - **Property System**: host-owned values with change detection
//! - **Accessors**: live, read-on-every-query views of host configuration
//! - **Linked Properties**: two-way views with explicit transform/reverse pairs
//! - **Signals**: synchronous change notification
//! - **Errors and Logging**: the shared error type and `tracing` targets
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_aria_core::{Accessor, Property, Signal};
//!
//! let step = Arc::new(Property::new(1.0));
//! let step_accessor = Accessor::from_property(step.clone());
//!
//! let step_changed = Signal::<f64>::new();
//! step_changed.connect(|step| println!("step is now {step}"));
//!
//! if step.set(5.0) {
//!     step_changed.emit(step_accessor.get());
//! }
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::{Error, Result};
pub use property::{Accessor, LinkedProperty, Property};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
