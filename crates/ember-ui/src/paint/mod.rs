//! Paint primitives shared by the widget system.
//!
//! These are plain value types describing what a widget looks like; the
//! rendering engine that turns them into pixels lives outside this crate.

mod brush;
mod font;
mod image;
mod types;

pub use brush::Brush;
pub use font::{Font, FontFamily};
pub use image::{DrawableImage, ImageResource};
pub use types::{Color, Point, Rect, Size};
