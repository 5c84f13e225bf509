//! Font description types.
//!
//! A [`Font`] names a face and size; shaping and rasterization are the
//! render layer's concern.

/// A font family selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// The platform's default proportional face.
    #[default]
    SansSerif,
    /// The platform's default serif face.
    Serif,
    /// The platform's default fixed-width face.
    Monospace,
    /// A specific family by name.
    Named(String),
}

/// A font description: family plus point size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
}

impl Font {
    /// Create a font from a family and point size.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self { family, size }
    }

    /// The font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// The point size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Return the same family at a different size.
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            family: self.family.clone(),
            size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 14.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_size_keeps_family() {
        let base = Font::new(FontFamily::Named("Inter".into()), 14.0);
        let bigger = base.with_size(22.0);
        assert_eq!(bigger.family(), base.family());
        assert_eq!(bigger.size(), 22.0);
    }
}
