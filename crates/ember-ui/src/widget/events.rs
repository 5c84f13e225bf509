//! Input event types consumed by the widget layer.
//!
//! These are the opaque event payloads the external input platform layer
//! delivers; the widget layer reads them but never produces them.

use crate::paint::Point;

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (usually left).
    Primary,
    /// Secondary button (usually right).
    Secondary,
    /// Middle button.
    Middle,
}

/// A pointer button was pressed over a widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPressEvent {
    /// The button that was pressed.
    pub button: PointerButton,
    /// Position in widget-local coordinates.
    pub position: Point,
}

impl PointerPressEvent {
    /// Create a primary-button press at a position.
    pub fn primary(position: Point) -> Self {
        Self {
            button: PointerButton::Primary,
            position,
        }
    }
}

/// A pointer button was released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerReleaseEvent {
    /// The button that was released.
    pub button: PointerButton,
    /// Position in widget-local coordinates.
    pub position: Point,
}

impl PointerReleaseEvent {
    /// Create a primary-button release at a position.
    pub fn primary(position: Point) -> Self {
        Self {
            button: PointerButton::Primary,
            position,
        }
    }
}

/// The pointer moved. Delivered once per frame tick while the pointer is
/// over (or captured by) a widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMoveEvent {
    /// Position in widget-local coordinates.
    pub position: Point,
}

impl PointerMoveEvent {
    /// Create a move event at a position.
    pub fn at(position: Point) -> Self {
        Self { position }
    }
}

/// Committed text input.
///
/// `from_composition` marks text produced by an IME commit rather than
/// direct keystrokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputEvent {
    /// The committed text.
    pub text: String,
    /// Whether this text is the output of an IME composition.
    pub from_composition: bool,
}

impl TextInputEvent {
    /// Create a direct (non-composition) text input event.
    pub fn direct(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            from_composition: false,
        }
    }

    /// Create an IME-commit text input event.
    pub fn composed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            from_composition: true,
        }
    }
}
