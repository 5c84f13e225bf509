//! Convenience re-exports for applications.
//!
//! ```
//! use ember_ui::prelude::*;
//! ```

pub use ember_ui_core::{Property, Signal};

pub use crate::error::{ContainerError, RangeError};
pub use crate::paint::{Brush, Color, DrawableImage, Font, FontFamily, ImageResource, Point, Rect, Size};
pub use crate::widget::widgets::{
    BoundedValue, Content, ContentHost, ContentTemplate, ContentTemplateRef, ImageView, Label,
    ListItem, Panel, RangeEnforcement, RepeatButton, TextInput,
};
pub use crate::widget::{
    CodePage, Container, KeyboardLayout, PointerButton, PointerMoveEvent, PointerPressEvent,
    PointerReleaseEvent, TextInputEvent, Widget, WidgetBase, WidgetId, WidgetRef,
};
