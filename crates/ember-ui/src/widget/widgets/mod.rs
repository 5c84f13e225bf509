//! Standard widgets for Ember UI.
//!
//! - [`BoundedValue`]: bounds-enforcing numeric value behind range widgets
//! - [`ContentHost`]: presents one arbitrary content value
//! - [`ListItem`]: selectable content host with state-keyed backgrounds
//! - [`Panel`]: plain child-holding container
//! - [`RepeatButton`]: button that re-fires while held
//! - [`TextInput`]: text entry with legacy-layout re-encoding
//! - [`Label`], [`ImageView`]: built-in presentation widgets

mod bounded;
mod content;
mod image_view;
mod label;
mod list_item;
mod panel;
mod repeat_button;
mod text_input;

pub use bounded::{BoundedValue, RangeEnforcement};
pub use content::{Content, ContentHost, ContentTemplate, ContentTemplateRef, OpaqueContent};
pub use image_view::{ImageSource, ImageView};
pub use label::Label;
pub use list_item::ListItem;
pub use panel::Panel;
pub use repeat_button::RepeatButton;
pub use text_input::TextInput;
