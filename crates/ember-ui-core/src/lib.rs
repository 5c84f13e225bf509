//! Ember UI Core - reactive infrastructure for the Ember UI toolkit.
//!
//! This crate provides the pieces every widget is built from:
//!
//! - [`Signal`] - synchronous, type-safe change notification
//! - [`Property`] - change-detecting value cells
//! - [`logging`] - tracing target names for log filtering
//!
//! Widgets pair a [`Property`] with a [`Signal`]: the property detects
//! whether a write actually changed anything, and the owning object emits
//! the signal when it did.
//!
//! # Example
//!
//! ```
//! use ember_ui_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! let counter = Counter {
//!     value: Property::new(0),
//!     value_changed: Signal::new(),
//! };
//!
//! counter.value_changed.connect(|&v| println!("now {v}"));
//! if counter.value.set(5) {
//!     counter.value_changed.emit(5);
//! }
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
