//! Image resources handed to the content pipeline.

use std::fmt;
use std::sync::Arc;

use image::RgbaImage;

use super::types::Size;

/// A decoded RGBA bitmap shared by reference.
///
/// Cloning an `ImageResource` clones the handle, not the pixels; equality
/// is handle identity, which is what container membership and content
/// re-resolution care about.
#[derive(Clone)]
pub struct ImageResource {
    pixels: Arc<RgbaImage>,
}

impl ImageResource {
    /// Wrap an already-decoded bitmap.
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Create a solid-color placeholder bitmap of the given dimensions.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, image::Rgba(rgba)))
    }

    /// The bitmap width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// The bitmap height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// The bitmap dimensions as a layout size.
    pub fn size(&self) -> Size {
        Size::from((self.width(), self.height()))
    }

    /// Access the underlying pixel buffer.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl PartialEq for ImageResource {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl fmt::Debug for ImageResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageResource")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Capability for values that can present themselves as an image.
///
/// Implemented by animated images, procedural textures, render-target
/// snapshots - anything that can produce a bitmap on demand without being
/// one all the time.
pub trait DrawableImage: Send + Sync {
    /// The natural pixel size of the drawable.
    fn intrinsic_size(&self) -> Size;

    /// Produce the bitmap for the drawable's current state.
    fn current_frame(&self) -> ImageResource;
}
