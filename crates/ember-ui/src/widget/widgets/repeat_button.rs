//! Button that re-fires while held.
//!
//! [`RepeatButton`] converts a held-pointer state into a stream of
//! activations: every pointer-move tick delivered while the button is
//! pressed (or while its click-on-hover flag is set) triggers the same
//! action as a discrete click. There is no debouncing; the tick rate is
//! whatever cadence the input layer delivers moves at.

use ember_ui_core::Signal;

use crate::widget::base::WidgetBase;
use crate::widget::events::{PointerButton, PointerMoveEvent, PointerPressEvent, PointerReleaseEvent};
use crate::widget::traits::Widget;

/// A button that fires repeatedly while held down.
///
/// # Signals
///
/// - `clicked(())`: one activation; fired on release-over-button and once
///   per qualifying pointer-move tick
/// - `pressed(())` / `released(())`: pointer button transitions
pub struct RepeatButton {
    /// Widget base.
    base: WidgetBase,

    /// Fire on every tick while merely hovered, without a press.
    click_on_hover: bool,

    /// Signal emitted for each activation.
    pub clicked: Signal<()>,

    /// Signal emitted when the button is pressed down.
    pub pressed: Signal<()>,

    /// Signal emitted when the button is released.
    pub released: Signal<()>,
}

impl RepeatButton {
    /// Create a repeat button.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            click_on_hover: false,
            clicked: Signal::new(),
            pressed: Signal::new(),
            released: Signal::new(),
        }
    }

    /// Check if the button fires on hover without a press.
    pub fn click_on_hover(&self) -> bool {
        self.click_on_hover
    }

    /// Set whether the button fires on hover without a press.
    pub fn set_click_on_hover(&mut self, enabled: bool) {
        self.click_on_hover = enabled;
    }

    /// Set click-on-hover using builder pattern.
    pub fn with_click_on_hover(mut self, enabled: bool) -> Self {
        self.click_on_hover = enabled;
        self
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a pointer press.
    ///
    /// Returns `true` if the event was handled.
    pub fn handle_pointer_press(&mut self, event: &PointerPressEvent) -> bool {
        if event.button != PointerButton::Primary || !self.base.is_enabled() {
            return false;
        }

        self.base.set_pressed(true);
        self.pressed.emit(());
        true
    }

    /// Handle a pointer release.
    ///
    /// Returns `true` if the release produced a click.
    pub fn handle_pointer_release(&mut self, event: &PointerReleaseEvent) -> bool {
        if event.button != PointerButton::Primary || !self.base.is_enabled() {
            return false;
        }

        let was_pressed = self.base.is_pressed();
        self.base.set_pressed(false);
        self.released.emit(());

        if was_pressed && self.base.contains_point(event.position) {
            self.click();
            return true;
        }
        false
    }

    /// Handle a per-tick pointer move.
    ///
    /// Fires one activation per tick the repeat condition holds: the
    /// button is pressed, or click-on-hover is set.
    ///
    /// Returns `true` if an activation fired.
    pub fn handle_pointer_move(&mut self, _event: &PointerMoveEvent) -> bool {
        if !self.base.is_enabled() {
            return false;
        }

        if self.base.is_pressed() || self.click_on_hover {
            self.click();
            return true;
        }
        false
    }

    /// Programmatically activate the button.
    pub fn click(&mut self) {
        if !self.base.is_enabled() {
            return;
        }
        self.clicked.emit(());
        self.base.update();
    }
}

impl Default for RepeatButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for RepeatButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

static_assertions::assert_impl_all!(RepeatButton: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::paint::{Point, Rect};

    use super::*;

    fn clicks(button: &RepeatButton) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        button.clicked.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    fn sized_button() -> RepeatButton {
        let mut button = RepeatButton::new();
        button.widget_base_mut().set_geometry(Rect::new(0.0, 0.0, 40.0, 20.0));
        button
    }

    #[test]
    fn test_press_release_over_button_clicks_once() {
        let mut button = sized_button();
        let count = clicks(&button);

        button.handle_pointer_press(&PointerPressEvent::primary(Point::new(5.0, 5.0)));
        button.handle_pointer_release(&PointerReleaseEvent::primary(Point::new(5.0, 5.0)));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_release_outside_does_not_click() {
        let mut button = sized_button();
        let count = clicks(&button);

        button.handle_pointer_press(&PointerPressEvent::primary(Point::new(5.0, 5.0)));
        button.handle_pointer_release(&PointerReleaseEvent::primary(Point::new(99.0, 5.0)));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_held_button_fires_every_tick() {
        let mut button = sized_button();
        let count = clicks(&button);

        button.handle_pointer_press(&PointerPressEvent::primary(Point::new(5.0, 5.0)));
        for _ in 0..4 {
            button.handle_pointer_move(&PointerMoveEvent::at(Point::new(5.0, 5.0)));
        }
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_unpressed_move_does_not_fire() {
        let mut button = sized_button();
        let count = clicks(&button);

        button.handle_pointer_move(&PointerMoveEvent::at(Point::new(5.0, 5.0)));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_click_on_hover_fires_without_press() {
        let mut button = sized_button().with_click_on_hover(true);
        let count = clicks(&button);

        button.handle_pointer_move(&PointerMoveEvent::at(Point::new(5.0, 5.0)));
        button.handle_pointer_move(&PointerMoveEvent::at(Point::new(6.0, 5.0)));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_disabled_button_ignores_everything() {
        let mut button = sized_button().with_click_on_hover(true);
        button.widget_base_mut().set_enabled(false);
        let count = clicks(&button);

        assert!(!button.handle_pointer_press(&PointerPressEvent::primary(Point::new(5.0, 5.0))));
        assert!(!button.handle_pointer_move(&PointerMoveEvent::at(Point::new(5.0, 5.0))));
        button.click();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_secondary_button_ignored() {
        let mut button = sized_button();
        let count = clicks(&button);

        let press = PointerPressEvent {
            button: PointerButton::Secondary,
            position: Point::new(5.0, 5.0),
        };
        assert!(!button.handle_pointer_press(&press));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
