//! Image presentation widget.

use std::sync::Arc;

use crate::paint::{DrawableImage, ImageResource, Size};
use crate::widget::base::WidgetBase;
use crate::widget::traits::Widget;

/// What an [`ImageView`] presents.
#[derive(Clone)]
pub enum ImageSource {
    /// A decoded bitmap.
    Resource(ImageResource),
    /// A capability that produces a bitmap on demand.
    Drawable(Arc<dyn DrawableImage>),
}

/// A widget that presents a single image.
///
/// Content resolution builds these for image-valued and drawable-valued
/// content; applications can also construct them directly.
pub struct ImageView {
    /// Widget base.
    base: WidgetBase,

    /// The presented image.
    source: ImageSource,
}

impl ImageView {
    /// Create an image view over a decoded bitmap.
    pub fn from_resource(resource: ImageResource) -> Self {
        Self {
            base: WidgetBase::new(),
            source: ImageSource::Resource(resource),
        }
    }

    /// Create an image view over a drawable-image capability.
    pub fn from_drawable(drawable: Arc<dyn DrawableImage>) -> Self {
        Self {
            base: WidgetBase::new(),
            source: ImageSource::Drawable(drawable),
        }
    }

    /// The presented image source.
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    /// Replace the presented image.
    pub fn set_source(&mut self, source: ImageSource) {
        self.source = source;
        self.base.update();
        self.base.property_changed.emit("source");
    }

    /// The natural pixel size of the presented image.
    pub fn intrinsic_size(&self) -> Size {
        match &self.source {
            ImageSource::Resource(resource) => resource.size(),
            ImageSource::Drawable(drawable) => drawable.intrinsic_size(),
        }
    }

    /// The bitmap to draw this frame.
    ///
    /// For drawable sources this asks the capability for its current
    /// frame; for plain resources it is the resource itself.
    pub fn current_frame(&self) -> ImageResource {
        match &self.source {
            ImageSource::Resource(resource) => resource.clone(),
            ImageSource::Drawable(drawable) => drawable.current_frame(),
        }
    }
}

impl Widget for ImageView {
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

static_assertions::assert_impl_all!(ImageView: Send, Sync);
