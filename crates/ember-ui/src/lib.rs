//! Ember UI - a retained-mode widget toolkit for real-time renderers.
//!
//! Ember UI supplies the widget-side half of a UI stack: value and content
//! state machines, change notification, and the paint descriptions a
//! render layer consumes. The rendering engine, layout pass, and input
//! platform are external collaborators.
//!
//! # Example
//!
//! ```
//! use ember_ui::prelude::*;
//!
//! let volume = BoundedValue::new()
//!     .with_range(Some(0.0), Some(100.0))
//!     .with_enforcement(RangeEnforcement::Clamp);
//! volume.value_changed.connect(|&v| println!("volume: {v}"));
//! volume.set_value(120.0).unwrap();
//! assert_eq!(volume.value(), 100.0);
//!
//! let host = ContentHost::new();
//! host.set_content("hello");
//! assert!(host.child().is_some());
//! ```

pub mod error;
pub mod paint;
pub mod prelude;
pub mod widget;

pub use ember_ui_core::*;

pub use error::{ContainerError, RangeError};
