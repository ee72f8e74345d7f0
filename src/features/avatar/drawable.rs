//! Immutable text-in-shape drawable

use iced::{Point, Rectangle};

use super::builder::{DrawableConfig, ShapeBuilder};
use super::initials::to_upper;
use super::surface::{Surface, TextStyle, inset};

/// Avatar with a filled shape, optional border and centered initials
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarDrawable {
    config: DrawableConfig,
    text: String,
}

impl AvatarDrawable {
    pub fn builder() -> ShapeBuilder {
        ShapeBuilder::new()
    }

    pub(super) fn new(config: DrawableConfig, initials: String) -> Self {
        let text = if config.uppercase {
            to_upper(&initials)
        } else {
            initials
        };
        Self { config, text }
    }

    pub fn config(&self) -> &DrawableConfig {
        &self.config
    }

    /// Text as it will be rendered
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn intrinsic_width(&self) -> Option<u32> {
        self.config.width
    }

    pub fn intrinsic_height(&self) -> Option<u32> {
        self.config.height
    }

    /// Font size used when drawing into a `width` x `height` area
    pub fn resolved_font_size(&self, width: u32, height: u32) -> u32 {
        self.config.font_size.unwrap_or(width.min(height) / 2)
    }

    /// Paint the avatar into `bounds`
    pub fn draw(&self, surface: &mut impl Surface, bounds: Rectangle) {
        let config = &self.config;

        surface.fill_shape(config.shape, bounds, config.background_color);

        if config.border_thickness > 0 {
            let thickness = config.border_thickness as f32;
            surface.stroke_shape(
                config.shape,
                inset(bounds, thickness / 2.0),
                config.background_color.darker_shade(),
                thickness,
            );
        }

        if self.text.is_empty() {
            return;
        }

        let width = config.width.unwrap_or(bounds.width as u32);
        let height = config.height.unwrap_or(bounds.height as u32);
        let style = TextStyle {
            size: self.resolved_font_size(width, height) as f32,
            color: config.text_color,
            bold: config.bold,
            font: config.font,
            weight: config.font_weight,
        };

        let metrics = surface.text_metrics(&style);
        let origin = Point::new(
            bounds.x + width as f32 / 2.0,
            metrics.centered_baseline(bounds.y + height as f32 / 2.0),
        );
        surface.fill_text(&self.text, origin, &style);
    }
}
