//! Brushes describing how an area is filled.

use super::types::Color;

/// A fill style for widget backgrounds.
///
/// Brushes are value types; widgets store them and hand them to the render
/// layer unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    /// A uniform color fill.
    Solid(Color),
    /// A two-stop linear gradient between `start` and `end`, rotated by
    /// `angle` radians from the horizontal axis.
    LinearGradient {
        start: Color,
        end: Color,
        angle: f32,
    },
}

impl Brush {
    /// Create a solid brush from a color.
    pub const fn solid(color: Color) -> Self {
        Self::Solid(color)
    }

    /// Create a horizontal two-stop gradient brush.
    pub const fn gradient(start: Color, end: Color) -> Self {
        Self::LinearGradient {
            start,
            end,
            angle: 0.0,
        }
    }

    /// Check if the brush covers its area with fully opaque pixels.
    pub fn is_opaque(&self) -> bool {
        match self {
            Self::Solid(color) => color.is_opaque(),
            Self::LinearGradient { start, end, .. } => start.is_opaque() && end.is_opaque(),
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity() {
        assert!(Brush::solid(Color::BLACK).is_opaque());
        assert!(!Brush::solid(Color::TRANSPARENT).is_opaque());

        let gradient = Brush::gradient(Color::WHITE, Color::from_rgba8(0, 0, 0, 128));
        assert!(!gradient.is_opaque());
    }
}
