//! Content hosting: turning an application value into a child widget.
//!
//! [`ContentHost`] owns an arbitrary [`Content`] value and an optional
//! [`ContentTemplate`], and derives exactly one child widget from them.
//! The derivation is a pure function re-run eagerly on every content,
//! template, or font change; the previous child is replaced outright.
//!
//! # Resolution priority
//!
//! First match wins, and the order is load-bearing:
//!
//! 1. empty content -> no child
//! 2. content is itself a widget -> that widget, by identity
//! 3. a template is set -> the template's instantiation of the content
//! 4. content is a decoded image -> a fresh [`ImageView`]
//! 5. content exposes a drawable-image capability -> a fresh [`ImageView`]
//! 6. otherwise -> a fresh [`Label`] showing the value's textual
//!    representation in the host's current font
//!
//! A widget-valued content always wins over a template; a template always
//! wins over the built-in image and text fallbacks.
//!
//! # Example
//!
//! ```
//! use ember_ui::widget::widgets::ContentHost;
//!
//! let host = ContentHost::new();
//! host.content_changed.connect(|_| println!("content replaced"));
//!
//! host.set_content("42 items");
//! assert!(host.has_content());
//! assert!(host.child().is_some());
//! ```

use std::fmt;
use std::sync::Arc;

use ember_ui_core::Signal;
use parking_lot::RwLock;

use crate::paint::{DrawableImage, Font, ImageResource};
use crate::widget::base::WidgetBase;
use crate::widget::traits::{Widget, WidgetRef};

use super::image_view::ImageView;
use super::label::Label;

/// Capability for content values without widget or image nature.
///
/// Such values are presented through their textual representation. The
/// blanket impl makes any displayable value usable as content.
pub trait OpaqueContent: fmt::Display + Send + Sync {}

impl<T: fmt::Display + Send + Sync> OpaqueContent for T {}

/// An application-supplied content value, tagged by presentation
/// capability.
///
/// The tag is assigned once, at the point the value enters the toolkit
/// (via the `From` conversions below), instead of probing the value's type
/// on every resolution.
#[derive(Clone)]
pub enum Content {
    /// No content.
    Empty,
    /// The content is itself a widget and is shown directly.
    Widget(WidgetRef),
    /// A decoded bitmap resource.
    Image(ImageResource),
    /// A value that can produce a bitmap on demand.
    Drawable(Arc<dyn DrawableImage>),
    /// Anything else; shown through its textual representation.
    Opaque(Arc<dyn OpaqueContent>),
}

impl Content {
    /// Wrap an arbitrary displayable value as opaque content.
    pub fn opaque(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self::Opaque(Arc::new(value))
    }

    /// Check if there is no content.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Empty
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Content::Empty"),
            Self::Widget(w) => write!(f, "Content::Widget({:?})", w.id()),
            Self::Image(img) => write!(f, "Content::Image({}x{})", img.width(), img.height()),
            Self::Drawable(_) => f.write_str("Content::Drawable"),
            Self::Opaque(v) => write!(f, "Content::Opaque({v})"),
        }
    }
}

impl From<WidgetRef> for Content {
    fn from(widget: WidgetRef) -> Self {
        Self::Widget(widget)
    }
}

impl From<ImageResource> for Content {
    fn from(image: ImageResource) -> Self {
        Self::Image(image)
    }
}

impl From<Arc<dyn DrawableImage>> for Content {
    fn from(drawable: Arc<dyn DrawableImage>) -> Self {
        Self::Drawable(drawable)
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::opaque(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::opaque(text.to_string())
    }
}

/// A factory that turns a content value into a widget.
///
/// Templates are opaque external collaborators: when applicable they
/// always return a widget, and failures inside `instantiate` are the
/// template's own to surface.
pub trait ContentTemplate: Send + Sync {
    /// Build a widget presenting `content`.
    fn instantiate(&self, content: &Content) -> WidgetRef;
}

impl<F> ContentTemplate for F
where
    F: Fn(&Content) -> WidgetRef + Send + Sync,
{
    fn instantiate(&self, content: &Content) -> WidgetRef {
        self(content)
    }
}

/// Shared handle to a content template.
pub type ContentTemplateRef = Arc<dyn ContentTemplate>;

/// Resolve a content value to its presentation widget.
///
/// Pure: the result depends only on the arguments. Both the content and
/// template setters call this explicitly; nothing recomputes behind the
/// caller's back.
fn resolve(
    content: &Content,
    template: Option<&ContentTemplateRef>,
    font: &Font,
) -> Option<WidgetRef> {
    if content.is_empty() {
        return None;
    }
    if let Content::Widget(widget) = content {
        // Identity: the widget itself becomes the child, never a copy.
        return Some(widget.clone());
    }
    if let Some(template) = template {
        return Some(template.instantiate(content));
    }
    match content {
        Content::Image(image) => Some(WidgetRef::new(ImageView::from_resource(image.clone()))),
        Content::Drawable(drawable) => {
            Some(WidgetRef::new(ImageView::from_drawable(Arc::clone(drawable))))
        }
        Content::Opaque(value) => Some(WidgetRef::new(
            Label::new(value.to_string()).with_font(font.clone()),
        )),
        // Unreachable: empty and widget content returned above.
        Content::Empty | Content::Widget(_) => None,
    }
}

/// A widget presenting a single arbitrary content value.
///
/// Content mutators take `&self` so change handlers may re-enter the host;
/// internal locks are never held across resolution or signal emission.
///
/// # Signals
///
/// - `content_changed(())`: emitted after every content replacement, with
///   the new child already resolved
/// - `property_changed` (on the widget base): `"content"`,
///   `"content_template"`, `"has_content"`, `"font"`
pub struct ContentHost {
    /// Widget base.
    base: WidgetBase,

    /// The stored content value.
    content: RwLock<Content>,

    /// Optional presentation template.
    template: RwLock<Option<ContentTemplateRef>>,

    /// Derived child; never independently settable.
    child: RwLock<Option<WidgetRef>>,

    /// Font used for the textual fallback presentation.
    font: RwLock<Font>,

    /// Signal emitted when the content is replaced.
    pub content_changed: Signal<()>,
}

impl ContentHost {
    /// Create an empty content host.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            content: RwLock::new(Content::Empty),
            template: RwLock::new(None),
            child: RwLock::new(None),
            font: RwLock::new(Font::default()),
            content_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Get the current content value.
    pub fn content(&self) -> Content {
        self.content.read().clone()
    }

    /// Check if the host has content.
    pub fn has_content(&self) -> bool {
        !self.content.read().is_empty()
    }

    /// Replace the content value.
    ///
    /// If the emptiness of the value differs from the previous one, a
    /// `"has_content"` property notification is emitted. The child is then
    /// re-resolved, `content_changed` fires (handlers observe the new
    /// child), and a `"content"` property notification follows - in that
    /// order, all before this returns.
    pub fn set_content(&self, content: impl Into<Content>) {
        let content = content.into();
        let had_content = {
            let mut stored = self.content.write();
            let had = !stored.is_empty();
            *stored = content;
            had
        };

        if had_content != self.has_content() {
            self.base.property_changed.emit("has_content");
        }
        self.refresh_child();
        self.content_changed.emit(());
        self.base.property_changed.emit("content");
    }

    /// Clear the content.
    pub fn clear_content(&self) {
        self.set_content(Content::Empty);
    }

    /// Set the content using builder pattern.
    pub fn with_content(self, content: impl Into<Content>) -> Self {
        self.set_content(content);
        self
    }

    // =========================================================================
    // Template
    // =========================================================================

    /// Get the presentation template, if any.
    pub fn template(&self) -> Option<ContentTemplateRef> {
        self.template.read().clone()
    }

    /// Replace the presentation template and re-resolve the child.
    ///
    /// Emits a `"content_template"` property notification; does not emit
    /// `content_changed`.
    pub fn set_template(&self, template: Option<ContentTemplateRef>) {
        *self.template.write() = template;
        self.refresh_child();
        self.base.property_changed.emit("content_template");
    }

    /// Set the template using builder pattern.
    pub fn with_template(self, template: ContentTemplateRef) -> Self {
        self.set_template(Some(template));
        self
    }

    // =========================================================================
    // Font
    // =========================================================================

    /// Get the font used for the textual fallback.
    pub fn font(&self) -> Font {
        self.font.read().clone()
    }

    /// Set the font used for the textual fallback.
    ///
    /// Re-resolves the child so an existing textual presentation picks the
    /// new font up.
    pub fn set_font(&self, font: Font) {
        {
            let mut stored = self.font.write();
            if *stored == font {
                return;
            }
            *stored = font;
        }
        self.refresh_child();
        self.base.property_changed.emit("font");
    }

    // =========================================================================
    // Derived child
    // =========================================================================

    /// The resolved presentation child, if any.
    pub fn child(&self) -> Option<WidgetRef> {
        self.child.read().clone()
    }

    /// Recompute the child from the current content, template, and font.
    ///
    /// The previous child is replaced outright; there is no diffing or
    /// reuse. All locks are released before the template runs and before
    /// any signal fires.
    fn refresh_child(&self) {
        let content = self.content.read().clone();
        let template = self.template.read().clone();
        let font = self.font.read().clone();

        let child = resolve(&content, template.as_ref(), &font);
        tracing::trace!(
            target: "ember_ui::content",
            content = ?content,
            has_child = child.is_some(),
            "content re-resolved"
        );
        *self.child.write() = child;
    }
}

impl Default for ContentHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ContentHost {
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

static_assertions::assert_impl_all!(ContentHost: Send, Sync);
