//! Text presentation widget.

use crate::paint::Font;
use crate::widget::base::WidgetBase;
use crate::widget::traits::Widget;

/// A widget that presents a run of text in a single font.
///
/// Content resolution builds these for values that are neither widgets nor
/// images; applications can also construct them directly.
pub struct Label {
    /// Widget base.
    base: WidgetBase,

    /// The displayed text.
    text: String,

    /// The font the text is rendered with.
    font: Font,
}

impl Label {
    /// Create a label with the given text and the default font.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(),
            text: text.into(),
            font: Font::default(),
        }
    }

    /// Get the label's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the label's text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text;
            self.base.update();
            self.base.property_changed.emit("text");
        }
    }

    /// Get the font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Set the font.
    pub fn set_font(&mut self, font: Font) {
        if self.font != font {
            self.font = font;
            self.base.update();
            self.base.property_changed.emit("font");
        }
    }

    /// Set the font using builder pattern.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }
}

impl Widget for Label {
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

static_assertions::assert_impl_all!(Label: Send, Sync);

#[cfg(test)]
mod tests {
    use crate::paint::FontFamily;

    use super::*;

    #[test]
    fn test_text_change_detection() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let mut label = Label::new("a");
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        label.widget_base().property_changed.connect(move |&name| {
            if name == "text" {
                count_clone.fetch_add(1, Ordering::SeqCst);
            }
        });

        label.set_text("a");
        label.set_text("b");
        assert_eq!(label.text(), "b");
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_with_font_builder() {
        let label = Label::new("x").with_font(Font::new(FontFamily::Monospace, 9.0));
        assert_eq!(label.font().size(), 9.0);
    }
}
