//! Text entry widget with legacy-layout re-encoding.
//!
//! [`TextInput`] owns a text buffer fed by committed text events from the
//! input platform layer. Its one piece of real logic is a narrow
//! compatibility shim: some upstream input paths decode keystrokes as if
//! they were Latin-1 even when the active keyboard layout works in a
//! different single-byte code page, mangling short insertions. When the
//! active layout declares a legacy code page, qualifying insertions are
//! re-interpreted under it before landing in the buffer.

use ember_ui_core::Signal;

use crate::widget::base::WidgetBase;
use crate::widget::events::TextInputEvent;
use crate::widget::keyboard::KeyboardLayout;
use crate::widget::traits::Widget;

/// A single-line text entry widget.
///
/// # Signals
///
/// - `text_changed(String)`: emitted with the new buffer after each change
pub struct TextInput {
    /// Widget base.
    base: WidgetBase,

    /// The text buffer.
    text: String,

    /// Whether an IME composition is in progress.
    composing: bool,

    /// The active keyboard layout, as reported by the input layer.
    layout: KeyboardLayout,

    /// Signal emitted when the buffer changes.
    pub text_changed: Signal<String>,
}

impl TextInput {
    /// Create an empty text input under the default layout.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            text: String::new(),
            composing: false,
            layout: KeyboardLayout::default(),
            text_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Buffer
    // =========================================================================

    /// Get the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the entire text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text;
            self.base.update();
            self.text_changed.emit(self.text.clone());
            self.base.property_changed.emit("text");
        }
    }

    /// Append text to the buffer.
    pub fn insert(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.text.push_str(text);
        self.base.update();
        self.text_changed.emit(self.text.clone());
        self.base.property_changed.emit("text");
    }

    // =========================================================================
    // Keyboard layout
    // =========================================================================

    /// The active keyboard layout.
    pub fn keyboard_layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    /// Set the active keyboard layout.
    pub fn set_keyboard_layout(&mut self, layout: KeyboardLayout) {
        self.layout = layout;
    }

    /// Set the layout using builder pattern.
    pub fn with_keyboard_layout(mut self, layout: KeyboardLayout) -> Self {
        self.layout = layout;
        self
    }

    // =========================================================================
    // Composition tracking
    // =========================================================================

    /// Check if an IME composition is in progress.
    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Note that an IME composition started.
    pub fn composition_started(&mut self) {
        self.composing = true;
    }

    /// Note that the IME composition ended.
    pub fn composition_ended(&mut self) {
        self.composing = false;
    }

    // =========================================================================
    // Input handling
    // =========================================================================

    /// Handle a committed text input event.
    ///
    /// Qualifying insertions are re-encoded (see [`recode`](Self::recode));
    /// everything else is inserted unchanged.
    pub fn handle_text_input(&mut self, event: &TextInputEvent) {
        if !self.base.is_enabled() {
            return;
        }
        let text = self.recode(event);
        self.insert(&text);
    }

    /// Correct a mis-decoded insertion under the layout's legacy code page.
    ///
    /// Applies only to insertions of at most two UTF-16 code units that are
    /// not composition output and not typed mid-composition, under a layout
    /// that declares a legacy code page. Text containing any character
    /// above U+00FF cannot have been byte-mangled and passes through.
    fn recode(&self, event: &TextInputEvent) -> String {
        let Some(code_page) = self.layout.legacy_code_page() else {
            return event.text.clone();
        };
        if event.from_composition || self.composing {
            return event.text.clone();
        }
        if event.text.encode_utf16().count() > 2 {
            return event.text.clone();
        }
        if event.text.chars().any(|c| c as u32 > 0xFF) {
            return event.text.clone();
        }

        let bytes: Vec<u8> = event.text.chars().map(|c| c as u8).collect();
        let recoded = code_page.decode(&bytes);
        tracing::trace!(
            target: "ember_ui::input",
            code_page = ?code_page,
            "re-encoded legacy text input"
        );
        recoded
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TextInput {
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

static_assertions::assert_impl_all!(TextInput: Send, Sync);

#[cfg(test)]
mod tests {
    use crate::widget::keyboard::CodePage;

    use super::*;

    fn cyrillic_input() -> TextInput {
        TextInput::new().with_keyboard_layout(
            KeyboardLayout::new("Russian").with_legacy_code_page(CodePage::Windows1251),
        )
    }

    #[test]
    fn test_plain_layout_passes_through() {
        let mut input = TextInput::new();
        input.handle_text_input(&TextInputEvent::direct("ab"));
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn test_short_insertion_is_recoded() {
        let mut input = cyrillic_input();
        // The upstream path decoded byte 0xF4 as Latin-1 'ô'; under
        // Windows-1251 it is 'ф'.
        input.handle_text_input(&TextInputEvent::direct("\u{F4}"));
        assert_eq!(input.text(), "ф");
    }

    #[test]
    fn test_two_unit_insertion_is_recoded() {
        let mut input = cyrillic_input();
        input.handle_text_input(&TextInputEvent::direct("\u{CF}\u{F0}"));
        assert_eq!(input.text(), "Пр");
    }

    #[test]
    fn test_long_insertion_passes_through() {
        let mut input = cyrillic_input();
        input.handle_text_input(&TextInputEvent::direct("\u{F4}\u{F4}\u{F4}"));
        assert_eq!(input.text(), "\u{F4}\u{F4}\u{F4}");
    }

    #[test]
    fn test_composition_output_passes_through() {
        let mut input = cyrillic_input();
        input.handle_text_input(&TextInputEvent::composed("\u{F4}"));
        assert_eq!(input.text(), "\u{F4}");
    }

    #[test]
    fn test_mid_composition_passes_through() {
        let mut input = cyrillic_input();
        input.composition_started();
        input.handle_text_input(&TextInputEvent::direct("\u{F4}"));
        assert_eq!(input.text(), "\u{F4}");

        input.composition_ended();
        input.handle_text_input(&TextInputEvent::direct("\u{F4}"));
        assert_eq!(input.text(), "\u{F4}ф");
    }

    #[test]
    fn test_non_latin1_chars_pass_through() {
        let mut input = cyrillic_input();
        // Already above U+00FF: cannot be a mangled byte.
        input.handle_text_input(&TextInputEvent::direct("ツ"));
        assert_eq!(input.text(), "ツ");
    }

    #[test]
    fn test_ascii_recodes_to_itself() {
        let mut input = TextInput::new().with_keyboard_layout(
            KeyboardLayout::new("French").with_legacy_code_page(CodePage::Windows1252),
        );
        input.handle_text_input(&TextInputEvent::direct("a"));
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn test_text_changed_reports_new_buffer() {
        use std::sync::Arc;
        use parking_lot::Mutex;

        let mut input = TextInput::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let log_clone = log.clone();
        input.text_changed.connect(move |text: &String| {
            log_clone.lock().push(text.clone());
        });

        input.insert("a");
        input.insert("b");
        assert_eq!(*log.lock(), vec!["a".to_string(), "ab".to_string()]);
    }

    #[test]
    fn test_disabled_input_ignores_events() {
        let mut input = TextInput::new();
        input.widget_base_mut().set_enabled(false);
        input.handle_text_input(&TextInputEvent::direct("x"));
        assert_eq!(input.text(), "");
    }
}
