//! Widget base implementation.
//!
//! This module provides [`WidgetBase`], the common implementation details
//! for all widgets: identity, geometry, visibility, enabled state, the
//! interaction flags written by the input platform layer, and the generic
//! property-change notification channel.

use std::sync::atomic::{AtomicU64, Ordering};

use ember_ui_core::Signal;

use crate::paint::{Point, Rect, Size};

/// A unique identifier for a widget instance.
///
/// IDs are allocated once at construction and never reused within a
/// process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// The base implementation for all widgets.
///
/// Widget implementations include this as a field and delegate common
/// operations to it:
///
/// ```ignore
/// use ember_ui::widget::{Widget, WidgetBase};
///
/// struct Badge {
///     base: WidgetBase,
///     count: u32,
/// }
///
/// impl Widget for Badge {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///     fn as_any(&self) -> &dyn std::any::Any { self }
/// }
/// ```
///
/// # Interaction State
///
/// The hovered, pressed, and focused flags are written by the external
/// input layer as it routes platform events; widgets only read them (for
/// example, to pick a state-dependent background).
pub struct WidgetBase {
    /// Unique instance ID.
    id: WidgetId,

    /// The widget's geometry (position relative to parent and size).
    geometry: Rect,

    /// Whether the widget is visible.
    visible: bool,

    /// Whether the widget is enabled (can receive input).
    enabled: bool,

    /// Whether the mouse is currently over this widget.
    hovered: bool,

    /// Whether a pointer button is currently held on this widget.
    pressed: bool,

    /// Whether the widget currently has keyboard focus.
    focused: bool,

    /// Whether the widget needs to be repainted.
    needs_repaint: bool,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when visibility changes.
    pub visible_changed: Signal<bool>,

    /// Signal emitted when enabled state changes.
    pub enabled_changed: Signal<bool>,

    /// Generic property-change channel carrying the property name.
    ///
    /// Every mutable property of the owning widget reports here in addition
    /// to any dedicated typed signal, so observers that only care *that*
    /// something changed need a single connection.
    pub property_changed: Signal<&'static str>,
}

impl WidgetBase {
    /// Create a new widget base.
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            geometry: Rect::ZERO,
            visible: true,
            enabled: true,
            hovered: false,
            pressed: false,
            focused: false,
            needs_repaint: true,
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
            enabled_changed: Signal::new(),
            property_changed: Signal::new(),
        }
    }

    /// Get the widget's unique ID.
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    ///
    /// Emits `geometry_changed` if the geometry actually changed.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.needs_repaint = true;
            self.geometry_changed.emit(rect);
            self.property_changed.emit("geometry");
        }
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Get a rectangle representing the widget's local coordinate space.
    ///
    /// Always positioned at (0, 0) with the widget's size.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.size.width, self.geometry.size.height)
    }

    /// Check if a point (in local coordinates) is inside the widget.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the widget is visible.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_repaint = true;
            self.visible_changed.emit(visible);
            self.property_changed.emit("visible");
        }
    }

    /// Show the widget.
    pub fn show(&mut self) {
        self.set_visible(true);
    }

    /// Hide the widget.
    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the widget is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.needs_repaint = true;
            self.enabled_changed.emit(enabled);
            self.property_changed.emit("enabled");
        }
    }

    // =========================================================================
    // Interaction State (written by the input layer)
    // =========================================================================

    /// Check if the mouse is currently over this widget.
    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Set the hover state.
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.needs_repaint = true;
        }
    }

    /// Check if a pointer button is currently held on this widget.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Set the pressed state.
    pub fn set_pressed(&mut self, pressed: bool) {
        if self.pressed != pressed {
            self.pressed = pressed;
            self.needs_repaint = true;
        }
    }

    /// Check if the widget currently has keyboard focus.
    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Set the focused state.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.needs_repaint = true;
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check if the widget needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint of the widget.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Clear the repaint flag after the render layer has painted.
    pub fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(WidgetBase: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = WidgetBase::new();
        let b = WidgetBase::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_geometry_change_notifies_once() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let mut base = WidgetBase::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        base.geometry_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        base.set_geometry(rect);
        base.set_geometry(rect);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_interaction_state_roundtrip() {
        let mut base = WidgetBase::new();
        assert!(!base.is_hovered());
        assert!(!base.is_pressed());
        assert!(!base.has_focus());

        base.set_hovered(true);
        base.set_pressed(true);
        base.set_focused(true);
        assert!(base.is_hovered());
        assert!(base.is_pressed());
        assert!(base.has_focus());
    }

    #[test]
    fn test_contains_point_uses_local_rect() {
        let mut base = WidgetBase::new();
        base.set_geometry(Rect::new(100.0, 100.0, 20.0, 20.0));
        assert!(base.contains_point(Point::new(5.0, 5.0)));
        assert!(!base.contains_point(Point::new(25.0, 5.0)));
    }
}
