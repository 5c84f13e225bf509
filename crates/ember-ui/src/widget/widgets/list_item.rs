//! Selectable list item.
//!
//! [`ListItem`] is a content host specialized for list views: it carries a
//! selection flag and a set of state-keyed background brushes, and picks
//! exactly one background per query from the current interaction state.

use ember_ui_core::Signal;

use crate::paint::Brush;
use crate::widget::base::WidgetBase;
use crate::widget::traits::{Widget, WidgetRef};

use super::content::{Content, ContentHost, ContentTemplateRef};

/// A selectable item presenting one content value.
///
/// # Background lookup
///
/// [`background`](Self::background) picks the first matching tier, in
/// order: pressed, hovered, selected, focused, then the default. If the
/// winning tier has no brush set, the default brush is used instead, even
/// though a higher-priority tier matched. The query is evaluated fresh on
/// every call and has no side effects.
///
/// # Signals
///
/// - `selected_changed(bool)`: emitted when the selection flag flips
pub struct ListItem {
    /// Content hosting (owns the widget base).
    host: ContentHost,

    /// Whether the item is currently selected.
    selected: bool,

    /// Background when no other tier applies (and the fallback for unset
    /// tiers).
    default_background: Option<Brush>,

    /// Background while the pointer hovers the item.
    hover_background: Option<Brush>,

    /// Background while the item is pressed.
    pressed_background: Option<Brush>,

    /// Background while the item has keyboard focus.
    focus_background: Option<Brush>,

    /// Background while the item is selected.
    selected_background: Option<Brush>,

    /// Signal emitted when the selection flag changes.
    pub selected_changed: Signal<bool>,
}

impl ListItem {
    /// Create an unselected item with no content and no brushes.
    pub fn new() -> Self {
        Self {
            host: ContentHost::new(),
            selected: false,
            default_background: None,
            hover_background: None,
            pressed_background: None,
            focus_background: None,
            selected_background: None,
            selected_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Check if the item is selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the selection flag.
    pub fn set_selected(&mut self, selected: bool) {
        if self.selected != selected {
            self.selected = selected;
            self.host.widget_base_mut().update();
            self.selected_changed.emit(selected);
            self.host.widget_base().property_changed.emit("selected");
        }
    }

    /// Set the selection flag using builder pattern.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    // =========================================================================
    // Backgrounds
    // =========================================================================

    /// Pick the background for the current interaction state.
    ///
    /// Read-only; evaluated fresh on every call.
    pub fn background(&self) -> Option<&Brush> {
        let base = self.host.widget_base();
        let tier = if base.is_pressed() {
            self.pressed_background.as_ref()
        } else if base.is_hovered() {
            self.hover_background.as_ref()
        } else if self.selected {
            self.selected_background.as_ref()
        } else if base.has_focus() {
            self.focus_background.as_ref()
        } else {
            None
        };
        // An unset brush at the winning tier falls through to the default.
        tier.or(self.default_background.as_ref())
    }

    /// Set the default background.
    pub fn set_background(&mut self, brush: Option<Brush>) {
        self.default_background = brush;
        self.host.widget_base_mut().update();
    }

    /// Set the hover background.
    pub fn set_hover_background(&mut self, brush: Option<Brush>) {
        self.hover_background = brush;
        self.host.widget_base_mut().update();
    }

    /// Set the pressed background.
    pub fn set_pressed_background(&mut self, brush: Option<Brush>) {
        self.pressed_background = brush;
        self.host.widget_base_mut().update();
    }

    /// Set the focus background.
    pub fn set_focus_background(&mut self, brush: Option<Brush>) {
        self.focus_background = brush;
        self.host.widget_base_mut().update();
    }

    /// Set the selected background.
    pub fn set_selected_background(&mut self, brush: Option<Brush>) {
        self.selected_background = brush;
        self.host.widget_base_mut().update();
    }

    // =========================================================================
    // Content delegation
    // =========================================================================

    /// Replace the item's content value.
    pub fn set_content(&self, content: impl Into<Content>) {
        self.host.set_content(content);
    }

    /// Get the item's content value.
    pub fn content(&self) -> Content {
        self.host.content()
    }

    /// Check if the item has content.
    pub fn has_content(&self) -> bool {
        self.host.has_content()
    }

    /// The resolved presentation child, if any.
    pub fn child(&self) -> Option<WidgetRef> {
        self.host.child()
    }

    /// Replace the presentation template.
    pub fn set_template(&self, template: Option<ContentTemplateRef>) {
        self.host.set_template(template);
    }

    /// Signal emitted when the content is replaced.
    pub fn content_changed(&self) -> &Signal<()> {
        &self.host.content_changed
    }

    /// Set the content using builder pattern.
    pub fn with_content(self, content: impl Into<Content>) -> Self {
        self.host.set_content(content);
        self
    }
}

impl Default for ListItem {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ListItem {
    fn widget_base(&self) -> &WidgetBase {
        self.host.widget_base()
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        self.host.widget_base_mut()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

static_assertions::assert_impl_all!(ListItem: Send, Sync);
