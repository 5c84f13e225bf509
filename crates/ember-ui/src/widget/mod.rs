//! Widget system for Ember UI.
//!
//! This module provides the foundational widget architecture:
//!
//! - [`Widget`] trait: the base trait for all UI elements
//! - [`WidgetBase`]: common implementation every widget embeds
//! - [`WidgetRef`]: shared widget handle with identity comparison
//! - [`Container`]: capability contract for child-holding widgets
//! - [`widgets`]: the standard widget set
//!
//! # Creating a Widget
//!
//! A widget is a struct with a [`WidgetBase`] field and a [`Widget`]
//! implementation delegating to it:
//!
//! ```
//! use ember_ui::widget::{Widget, WidgetBase};
//!
//! struct Spacer {
//!     base: WidgetBase,
//! }
//!
//! impl Widget for Spacer {
//!     fn widget_base(&self) -> &WidgetBase { &self.base }
//!     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
//!     fn as_any(&self) -> &dyn std::any::Any { self }
//! }
//! ```
//!
//! # Threading
//!
//! Widgets are owned and driven by a single thread; signals fire
//! synchronously inside the mutating call. Everything is `Send + Sync` so
//! an embedding engine may move ownership between frames, but nothing in
//! this module blocks or defers.

pub mod base;
pub mod events;
pub mod keyboard;
pub mod traits;
pub mod widgets;

pub use base::{WidgetBase, WidgetId};
pub use events::{
    PointerButton, PointerMoveEvent, PointerPressEvent, PointerReleaseEvent, TextInputEvent,
};
pub use keyboard::{CodePage, KeyboardLayout};
pub use traits::{Container, Widget, WidgetRef};
