//! Drawing surface abstraction
//!
//! An [`AvatarDrawable`](super::AvatarDrawable) only knows how to paint onto a
//! [`Surface`]. The iced canvas frame and the software raster both implement
//! it, so list rows and exported PNGs share one rendering path.

use iced::{Point, Rectangle};
use serde::{Deserialize, Serialize};

use super::Argb;

/// Outline of an avatar
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Shape {
    #[default]
    Rect,
    RoundRect { radius: f32 },
    Oval,
}

/// Font family used for avatar text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarFont {
    #[default]
    SansSerif,
    Serif,
    Monospace,
}

impl AvatarFont {
    pub fn all() -> &'static [AvatarFont] {
        &[AvatarFont::SansSerif, AvatarFont::Serif, AvatarFont::Monospace]
    }
}

impl std::fmt::Display for AvatarFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvatarFont::SansSerif => write!(f, "Sans-serif"),
            AvatarFont::Serif => write!(f, "Serif"),
            AvatarFont::Monospace => write!(f, "Monospace"),
        }
    }
}

/// Weight of the typeface itself, independent of fake bold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Paint settings for avatar text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    pub color: Argb,
    /// Fake bold on top of the typeface
    pub bold: bool,
    pub font: AvatarFont,
    pub weight: FontWeight,
}

impl TextStyle {
    /// Glyphs should look bold, either from the typeface or fake bold
    pub fn is_heavy(&self) -> bool {
        self.bold || self.weight == FontWeight::Bold
    }
}

/// Vertical font metrics relative to the baseline.
///
/// `ascent` is negative (above the baseline), `descent` positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl TextMetrics {
    /// Line model used when no font outlines are available
    pub fn approximate(size: f32) -> Self {
        Self {
            ascent: -0.8 * size,
            descent: 0.2 * size,
        }
    }

    /// Baseline that vertically centers text on `center_y`
    pub fn centered_baseline(&self, center_y: f32) -> f32 {
        center_y - (self.ascent + self.descent) / 2.0
    }
}

/// A 2D canvas an avatar can be drawn on
pub trait Surface {
    /// Fill `shape` covering `bounds`
    fn fill_shape(&mut self, shape: Shape, bounds: Rectangle, color: Argb);

    /// Stroke the outline of `shape` centered on the edge of `bounds`
    fn stroke_shape(&mut self, shape: Shape, bounds: Rectangle, color: Argb, width: f32);

    /// Metrics of the font `style` resolves to
    fn text_metrics(&self, style: &TextStyle) -> TextMetrics;

    /// Draw `text` horizontally centered on `origin.x` with its baseline at `origin.y`
    fn fill_text(&mut self, text: &str, origin: Point, style: &TextStyle);
}

/// Shrink `bounds` by `amount` on every side
pub fn inset(bounds: Rectangle, amount: f32) -> Rectangle {
    Rectangle {
        x: bounds.x + amount,
        y: bounds.y + amount,
        width: (bounds.width - 2.0 * amount).max(0.0),
        height: (bounds.height - 2.0 * amount).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_baseline() {
        let metrics = TextMetrics {
            ascent: -28.0,
            descent: 8.0,
        };
        // 50 - (-20 / 2) = 60
        assert_eq!(metrics.centered_baseline(50.0), 60.0);
    }

    #[test]
    fn test_heavy_from_weight_or_fake_bold() {
        let style = TextStyle {
            size: 10.0,
            color: Argb::WHITE,
            bold: false,
            font: AvatarFont::SansSerif,
            weight: FontWeight::Normal,
        };
        assert!(!style.is_heavy());
        assert!(TextStyle { bold: true, ..style }.is_heavy());
        assert!(TextStyle { weight: FontWeight::Bold, ..style }.is_heavy());
    }

    #[test]
    fn test_inset() {
        let rect = inset(Rectangle::new(Point::new(10.0, 20.0), iced::Size::new(100.0, 50.0)), 1.0);
        assert_eq!(rect.x, 11.0);
        assert_eq!(rect.y, 21.0);
        assert_eq!(rect.width, 98.0);
        assert_eq!(rect.height, 48.0);
    }

    #[test]
    fn test_inset_never_negative() {
        let rect = inset(Rectangle::new(Point::ORIGIN, iced::Size::new(2.0, 2.0)), 4.0);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
    }
}
